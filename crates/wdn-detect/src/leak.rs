//! Leak assessment behind an explicit model context.
//!
//! The classifier itself is pluggable: [`LeakModel`] takes standardized
//! pressure samples and returns per-sample leak probabilities.  A trained
//! neural network belongs behind that seam; the in-repo [`CentroidModel`]
//! is a deliberately simple baseline for demos and tests.
//!
//! # No ambient state
//!
//! Scaler and model live together in a [`ModelContext`] that is constructed
//! exactly once — either by training ([`ModelContext::train`]) or from
//! pre-fitted parts ([`ModelContext::from_parts`]) — and passed explicitly
//! to every assessment call.  There is no process-wide model, so concurrent
//! callers with different contexts cannot interfere.

use std::io::Read;

use serde::Deserialize;

use wdn_core::DetectConfig;

use crate::{DetectError, DetectResult};

// ── Pressure input ────────────────────────────────────────────────────────────

/// One pressure sample row of a submitted readings table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PressureRecord {
    #[serde(rename = "Pressure")]
    pub pressure: f64,
}

/// Load pressure rows from any `Read` source.
pub fn load_pressure_records<R: Read>(reader: R) -> DetectResult<Vec<f64>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut samples = Vec::new();
    for result in csv_reader.deserialize::<PressureRecord>() {
        samples.push(result.map_err(|e| DetectError::Parse(e.to_string()))?.pressure);
    }
    Ok(samples)
}

// ── Scaler ────────────────────────────────────────────────────────────────────

/// Z-score standardization fitted on training pressures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardScaler {
    mean: f64,
    std:  f64,
}

impl StandardScaler {
    /// Fit mean and (population) standard deviation on `samples`.
    pub fn fit(samples: &[f64]) -> DetectResult<Self> {
        if samples.is_empty() {
            return Err(DetectError::EmptyInput("no samples to fit scaler"));
        }
        let n    = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var  = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        Ok(Self { mean, std: var.sqrt() })
    }

    /// Rehydrate a scaler fitted elsewhere.
    pub fn from_parts(mean: f64, std: f64) -> Self {
        Self { mean, std }
    }

    /// Standardize one sample.  A degenerate fit (zero spread) maps every
    /// sample to 0 rather than dividing by zero.
    pub fn transform(&self, x: f64) -> f64 {
        if self.std == 0.0 {
            0.0
        } else {
            (x - self.mean) / self.std
        }
    }

    pub fn transform_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.transform(x)).collect()
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std(&self) -> f64 {
        self.std
    }
}

// ── Model seam ────────────────────────────────────────────────────────────────

/// Pluggable leak classifier over standardized pressure samples.
pub trait LeakModel {
    /// Leak probability in `[0, 1]` for each sample.
    fn predict_proba(&self, scaled: &[f64]) -> Vec<f64>;
}

/// Baseline classifier: one centroid per class in standardized pressure
/// space, probability by distance softmax.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentroidModel {
    leak_centroid:  f64,
    clear_centroid: f64,
}

impl CentroidModel {
    /// Fit class centroids from standardized samples and per-sample leak
    /// labels.
    pub fn train(scaled: &[f64], leak_labels: &[bool]) -> DetectResult<Self> {
        if scaled.len() != leak_labels.len() {
            return Err(DetectError::Train(format!(
                "{} samples but {} labels",
                scaled.len(),
                leak_labels.len()
            )));
        }

        let mut sums   = [0.0f64; 2];
        let mut counts = [0usize; 2];
        for (&x, &leak) in scaled.iter().zip(leak_labels) {
            let class = usize::from(leak);
            sums[class] += x;
            counts[class] += 1;
        }
        if counts[0] == 0 || counts[1] == 0 {
            return Err(DetectError::Train(
                "training data must contain both leak and clear samples".into(),
            ));
        }

        Ok(Self {
            clear_centroid: sums[0] / counts[0] as f64,
            leak_centroid:  sums[1] / counts[1] as f64,
        })
    }

    /// Rehydrate a model trained elsewhere.
    pub fn from_centroids(leak_centroid: f64, clear_centroid: f64) -> Self {
        Self { leak_centroid, clear_centroid }
    }
}

impl LeakModel for CentroidModel {
    fn predict_proba(&self, scaled: &[f64]) -> Vec<f64> {
        scaled
            .iter()
            .map(|&x| {
                let to_leak  = (-(x - self.leak_centroid).abs()).exp();
                let to_clear = (-(x - self.clear_centroid).abs()).exp();
                to_leak / (to_leak + to_clear)
            })
            .collect()
    }
}

// ── Model context ─────────────────────────────────────────────────────────────

/// Leak verdict for one submitted pressure sample.
#[derive(Debug, Clone, PartialEq)]
pub struct LeakAssessment {
    pub node:        String,
    pub probability: f64,
    pub detected:    bool,
}

/// Scaler + model + decision threshold, constructed once and passed
/// explicitly.
#[derive(Debug, Clone)]
pub struct ModelContext<M: LeakModel> {
    scaler:    StandardScaler,
    model:     M,
    threshold: f64,
}

impl ModelContext<CentroidModel> {
    /// Train-path construction: fit the scaler on raw training pressures,
    /// then the baseline model on the standardized samples.
    pub fn train(
        pressures:   &[f64],
        leak_labels: &[bool],
        config:      &DetectConfig,
    ) -> DetectResult<Self> {
        let scaler = StandardScaler::fit(pressures)?;
        let scaled = scaler.transform_all(pressures);
        let model  = CentroidModel::train(&scaled, leak_labels)?;
        Ok(Self {
            scaler,
            model,
            threshold: config.leak_threshold,
        })
    }
}

impl<M: LeakModel> ModelContext<M> {
    /// Load-path construction from pre-fitted parts.
    pub fn from_parts(scaler: StandardScaler, model: M, config: &DetectConfig) -> Self {
        Self {
            scaler,
            model,
            threshold: config.leak_threshold,
        }
    }

    /// Assess a batch of raw pressure readings.
    ///
    /// Rows are named `Node1..NodeN` in input order, matching the reading
    /// sheets field teams submit (one anonymous pressure column).
    pub fn assess(&self, pressures: &[f64]) -> Vec<LeakAssessment> {
        let scaled = self.scaler.transform_all(pressures);
        self.model
            .predict_proba(&scaled)
            .into_iter()
            .enumerate()
            .map(|(i, probability)| LeakAssessment {
                node: format!("Node{}", i + 1),
                probability,
                detected: probability > self.threshold,
            })
            .collect()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

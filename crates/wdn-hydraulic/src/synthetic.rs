//! Deterministic synthetic pressure generation.
//!
//! Stands in for a real solver wherever one is unavailable: each junction
//! gets a base pressure derived from its elevation plus a small seeded
//! jitter per time step.  Not hydraulically meaningful — the point is a
//! plausible, fully reproducible series for reporting and model-training
//! paths.
//!
//! # Determinism strategy
//!
//! Each junction draws from its own `SmallRng` seeded by
//!
//!   seed = engine_seed XOR (junction_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive indexes uniformly across the seed space, so
//! series never depend on iteration order and runs are reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use wdn_network::InpDocument;

use crate::engine::{HydraulicEngine, LinkEnds, NodePressure, PressureSeries, SimulationOutput};
use crate::HydraulicResult;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Base pressure for a junction at elevation zero.
const BASE_PRESSURE: f64 = 50.0;

/// Pressure gained per unit of elevation in the synthetic model.
const ELEVATION_GAIN: f64 = 0.1;

/// Jitter half-width around the base pressure.
const JITTER: f64 = 0.5;

/// Deterministic stand-in hydraulic engine.
#[derive(Debug, Clone)]
pub struct SyntheticEngine {
    /// Samples per node (e.g. 24 for an hourly day).
    pub steps: usize,
    /// Seed for the jitter; the same seed always produces identical output.
    pub seed:  u64,
}

impl SyntheticEngine {
    pub fn new(steps: usize, seed: u64) -> Self {
        Self { steps, seed }
    }
}

impl Default for SyntheticEngine {
    /// One simulated day at hourly resolution.
    fn default() -> Self {
        Self { steps: 24, seed: 42 }
    }
}

impl HydraulicEngine for SyntheticEngine {
    /// Only junctions with an accepted elevation produce a series — the
    /// document parser already dropped the rest.
    fn run(&self, doc: &InpDocument) -> HydraulicResult<SimulationOutput> {
        let pressures = doc
            .junctions
            .iter()
            .enumerate()
            .map(|(i, junction)| {
                let base = BASE_PRESSURE + ELEVATION_GAIN * junction.elevation;
                let seed = self.seed ^ (i as u64).wrapping_mul(MIXING_CONSTANT);
                let mut rng = SmallRng::seed_from_u64(seed);
                let samples = (0..self.steps)
                    .map(|_| base + rng.gen_range(-JITTER..JITTER))
                    .collect();
                NodePressure {
                    node:   junction.label.clone(),
                    series: PressureSeries::new(samples),
                }
            })
            .collect();

        let links = doc
            .links
            .iter()
            .map(|l| LinkEnds {
                id:    l.id.clone(),
                start: l.start.clone(),
                end:   l.end.clone(),
            })
            .collect();

        Ok(SimulationOutput { pressures, links })
    }
}

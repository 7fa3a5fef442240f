//! INP document loader.
//!
//! # What is parsed
//!
//! Only the sections the allocation pipeline consumes: `[JUNCTIONS]` for
//! node elevations and `[PIPES]`/`[PUMPS]`/`[VALVES]` for link endpoints.
//! Everything else (`[OPTIONS]`, `[COORDINATES]`, demand patterns, …) is
//! skipped without being recorded.
//!
//! # Leniency
//!
//! Parsing is best-effort by contract: a junction line whose second token is
//! not a plain non-negative decimal, or a link line with fewer than three
//! tokens, is silently dropped rather than raised as an error.  Field
//! exports of these documents are full of hand-edited irregularities, and a
//! single bad line must not fail the run.
//!
//! # Section boundaries
//!
//! A bracketed header opens a section; the section ends at the first blank
//! line or the next bracketed header.  Lines starting with `;` are comments
//! and do not end a section; trailing `;` comments are stripped from record
//! lines.

use std::path::Path;

use rustc_hash::FxHashSet;

use wdn_core::{AllocationConfig, LabelTable, NodeId};

use crate::graph::{PipeGraph, PipeGraphBuilder};
use crate::NetworkResult;

// ── Document records ──────────────────────────────────────────────────────────

/// One accepted junction line: node label plus declared elevation.
#[derive(Debug, Clone, PartialEq)]
pub struct JunctionRecord {
    pub label:     String,
    pub elevation: f64,
}

/// One accepted link line (pipe, pump, or valve): link id plus the two
/// endpoint node labels, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRecord {
    pub id:    String,
    pub start: String,
    pub end:   String,
}

/// The parsed slice of an INP document the pipeline cares about.
#[derive(Debug, Clone, Default)]
pub struct InpDocument {
    pub junctions: Vec<JunctionRecord>,
    pub links:     Vec<LinkRecord>,
}

impl InpDocument {
    /// Parse an INP document from text.  Never fails; malformed lines are
    /// dropped (see module docs).
    pub fn parse(text: &str) -> Self {
        let mut doc = InpDocument::default();
        let mut section: Option<Section> = None;

        for raw in text.lines() {
            let line = raw.trim();

            // A blank line ends the current section; a comment line does not.
            if line.is_empty() {
                section = None;
                continue;
            }
            if line.starts_with(';') {
                continue;
            }
            if line.starts_with('[') {
                section = Some(Section::from_header(line));
                continue;
            }

            // Strip a trailing `;` comment before tokenizing.
            let body = match line.split_once(';') {
                Some((body, _)) => body,
                None => line,
            };
            let mut tokens = body.split_whitespace();

            match section {
                Some(Section::Junctions) => {
                    let (Some(label), Some(elev_token)) = (tokens.next(), tokens.next()) else {
                        continue;
                    };
                    if let Some(elevation) = parse_elevation(elev_token) {
                        doc.junctions.push(JunctionRecord {
                            label: label.to_owned(),
                            elevation,
                        });
                    }
                }
                Some(Section::Links) => {
                    let (Some(id), Some(start), Some(end)) =
                        (tokens.next(), tokens.next(), tokens.next())
                    else {
                        continue;
                    };
                    doc.links.push(LinkRecord {
                        id:    id.to_owned(),
                        start: start.to_owned(),
                        end:   end.to_owned(),
                    });
                }
                _ => {}
            }
        }

        doc
    }

    /// Read and parse a document from a file.
    pub fn from_path(path: &Path) -> NetworkResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Labels of junctions whose elevation is **strictly above** `threshold`.
    ///
    /// Junctions exactly at the threshold are kept in the graph.
    pub fn skip_labels(&self, threshold: f64) -> FxHashSet<&str> {
        self.junctions
            .iter()
            .filter(|j| j.elevation > threshold)
            .map(|j| j.label.as_str())
            .collect()
    }

    /// Declared elevation of `label`, if a junction line for it was accepted.
    /// The first declaration wins when a label appears twice.
    pub fn elevation_of(&self, label: &str) -> Option<f64> {
        self.junctions
            .iter()
            .find(|j| j.label == label)
            .map(|j| j.elevation)
    }
}

// ── Sections ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Section {
    Junctions,
    /// Pipes, pumps, and valves all contribute links — a pump or valve
    /// connects two nodes exactly like a pipe does.
    Links,
    Other,
}

impl Section {
    fn from_header(line: &str) -> Section {
        let name = line
            .trim_start_matches('[')
            .trim_end_matches(']')
            .trim()
            .to_ascii_uppercase();
        match name.as_str() {
            "JUNCTIONS" => Section::Junctions,
            "PIPES" | "PUMPS" | "VALVES" => Section::Links,
            _ => Section::Other,
        }
    }
}

/// Accept only plain non-negative decimals: ASCII digits with at most one
/// `.` and at least one digit.  `-5`, `+2`, and `1e3` are rejected, so the
/// containing line is skipped.
fn parse_elevation(token: &str) -> Option<f64> {
    let mut digits = 0usize;
    let mut dots = 0usize;
    for c in token.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' if dots == 0 => dots += 1,
            _ => return None,
        }
    }
    if digits == 0 {
        return None;
    }
    token.parse().ok()
}

// ── Network loading ───────────────────────────────────────────────────────────

/// A document-loaded pipe graph plus the label table that names its nodes
/// and the labels excluded by the elevation threshold.
#[derive(Debug, Clone)]
pub struct InpNetwork {
    pub graph:   PipeGraph,
    pub labels:  LabelTable,
    /// Skipped junction labels, in document order.
    pub skipped: Vec<String>,
}

/// Build the allocation graph from a parsed document.
///
/// Any link with a skipped endpoint is discarded entirely — the *other*
/// endpoint gains no adjacency entry from it either, which can locally
/// disconnect the graph.  That is accepted behavior: a high-elevation zone
/// takes its access links out of sensor consideration with it.
///
/// Nodes are interned in first-surviving-link order; a node referenced by a
/// link but never declared as a junction is a valid participant.  Pure
/// function of its inputs.
pub fn load_document(doc: &InpDocument, config: &AllocationConfig) -> InpNetwork {
    let skip = doc.skip_labels(config.elevation_threshold);

    let mut labels  = LabelTable::new();
    let mut builder = PipeGraphBuilder::with_capacity(doc.links.len() * 2);

    for link in &doc.links {
        if skip.contains(link.start.as_str()) || skip.contains(link.end.as_str()) {
            continue;
        }
        let a = node_id(&mut labels, &mut builder, &link.start);
        let b = node_id(&mut labels, &mut builder, &link.end);
        builder.add_main(a, b, config.edge_weight);
    }

    // Report skips in document order, not hash order.
    let skipped = doc
        .junctions
        .iter()
        .filter(|j| j.elevation > config.elevation_threshold)
        .map(|j| j.label.clone())
        .collect();

    InpNetwork {
        graph: builder.build(),
        labels,
        skipped,
    }
}

/// Parse `path` and build the allocation graph in one step.
pub fn load_path(path: &Path, config: &AllocationConfig) -> NetworkResult<InpNetwork> {
    let doc = InpDocument::from_path(path)?;
    Ok(load_document(&doc, config))
}

/// Intern `label`, keeping the label table and the builder's node count in
/// lock-step.
fn node_id(labels: &mut LabelTable, builder: &mut PipeGraphBuilder, label: &str) -> NodeId {
    if let Some(id) = labels.get(label) {
        return id;
    }
    let id = builder.add_node();
    let interned = labels.intern(label);
    debug_assert_eq!(id, interned);
    id
}

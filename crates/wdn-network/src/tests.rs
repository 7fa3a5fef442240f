//! Unit tests for wdn-network.
//!
//! All tests use hand-written document text so they run without any file.

#[cfg(test)]
mod helpers {
    use wdn_core::AllocationConfig;

    use crate::inp::{load_document, InpDocument, InpNetwork};

    /// A small document exercising every parser rule:
    /// comments, malformed junction lines, pumps and valves as links, and a
    /// junction above the default elevation threshold (J3 at 120.5).
    pub const DEMO_INP: &str = "\
[TITLE]
Small demo network

[JUNCTIONS]
;ID    Elev    Demand
J1     50.0    0
J2     100     0
J3     120.5   0
onlyonetoken
J4     -10     0
J5     abc     0

[RESERVOIRS]
R1     200

[PIPES]
;ID   Node1   Node2   Length
P1    J1      J2      100
P2    J2      J3      100
P3    J1      J4      100

[PUMPS]
PU1   J4      J5      HEAD1

[VALVES]
V1    J5      J1      12   PRV   0
";

    pub fn demo_network() -> InpNetwork {
        let doc = InpDocument::parse(DEMO_INP);
        load_document(&doc, &AllocationConfig::default())
    }
}

// ── Document parsing ──────────────────────────────────────────────────────────

#[cfg(test)]
mod parsing {
    use crate::inp::InpDocument;

    #[test]
    fn junctions_lenient() {
        let doc = InpDocument::parse(super::helpers::DEMO_INP);
        // J4 (negative elevation) and J5 (non-numeric) are dropped, as is
        // the single-token line.
        let labels: Vec<_> = doc.junctions.iter().map(|j| j.label.as_str()).collect();
        assert_eq!(labels, ["J1", "J2", "J3"]);
        assert_eq!(doc.elevation_of("J3"), Some(120.5));
        assert_eq!(doc.elevation_of("J4"), None);
    }

    #[test]
    fn pumps_and_valves_are_links() {
        let doc = InpDocument::parse(super::helpers::DEMO_INP);
        let ids: Vec<_> = doc.links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["P1", "P2", "P3", "PU1", "V1"]);
        assert_eq!(doc.links[3].start, "J4");
        assert_eq!(doc.links[3].end, "J5");
    }

    #[test]
    fn blank_line_ends_section() {
        let doc = InpDocument::parse(
            "[JUNCTIONS]\nJ1 10 0\n\nJ2 20 0\n[PIPES]\nP1 J1 J2 5\n",
        );
        // J2 follows the blank line, so it is outside any section.
        let labels: Vec<_> = doc.junctions.iter().map(|j| j.label.as_str()).collect();
        assert_eq!(labels, ["J1"]);
        assert_eq!(doc.links.len(), 1);
    }

    #[test]
    fn next_header_ends_section() {
        let doc = InpDocument::parse(
            "[JUNCTIONS]\nJ1 10 0\n[OPTIONS]\nJ9 30 0\n",
        );
        // J9 sits in [OPTIONS]; its shape would pass the junction rule but
        // the section does not.
        let labels: Vec<_> = doc.junctions.iter().map(|j| j.label.as_str()).collect();
        assert_eq!(labels, ["J1"]);
    }

    #[test]
    fn comment_lines_do_not_end_section() {
        let doc = InpDocument::parse(
            "[JUNCTIONS]\n; a comment\nJ1 10 0\nJ2 15 0 ; trailing note\n",
        );
        let labels: Vec<_> = doc.junctions.iter().map(|j| j.label.as_str()).collect();
        assert_eq!(labels, ["J1", "J2"]);
        assert_eq!(doc.elevation_of("J2"), Some(15.0));
    }

    #[test]
    fn elevation_token_shapes() {
        // "1." parses (one digit, one dot); "1e3", "+2", "-5" do not.
        let doc = InpDocument::parse(
            "[JUNCTIONS]\nA 1. 0\nB 1e3 0\nC +2 0\nD 5 0\n",
        );
        let labels: Vec<_> = doc.junctions.iter().map(|j| j.label.as_str()).collect();
        assert_eq!(labels, ["A", "D"]);
        assert_eq!(doc.elevation_of("A"), Some(1.0));
    }

    #[test]
    fn empty_document() {
        let doc = InpDocument::parse("");
        assert!(doc.junctions.is_empty());
        assert!(doc.links.is_empty());
    }
}

// ── Skip set ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod skip {
    use crate::inp::InpDocument;

    #[test]
    fn strictly_above_threshold() {
        let doc = InpDocument::parse(super::helpers::DEMO_INP);
        let skip = doc.skip_labels(100.0);
        // J2 sits exactly at the threshold and is kept.
        assert!(skip.contains("J3"));
        assert!(!skip.contains("J2"));
        assert!(!skip.contains("J1"));
        assert_eq!(skip.len(), 1);
    }

    #[test]
    fn threshold_below_everything() {
        let doc = InpDocument::parse(super::helpers::DEMO_INP);
        assert_eq!(doc.skip_labels(0.0).len(), 3);
    }
}

// ── Graph builder ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use wdn_core::NodeId;

    use crate::PipeGraphBuilder;

    #[test]
    fn empty_build() {
        let graph = PipeGraphBuilder::new().build();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn main_is_bidirectional_with_matching_weight() {
        let mut b = PipeGraphBuilder::new();
        let a = b.add_node();
        let c = b.add_node();
        b.add_main(a, c, 2.5);
        let graph = b.build();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(a).collect::<Vec<_>>(), [(c, 2.5)]);
        assert_eq!(graph.neighbors(c).collect::<Vec<_>>(), [(a, 2.5)]);
    }

    #[test]
    fn neighbor_order_is_insertion_order() {
        let mut b = PipeGraphBuilder::new();
        let a = b.add_node();
        let c = b.add_node();
        let d = b.add_node();
        let e = b.add_node();
        // Interleave sources so the stable sort has work to do.
        b.add_main(a, d, 1.0);
        b.add_main(c, e, 1.0);
        b.add_main(a, c, 1.0);
        b.add_main(a, e, 1.0);
        let graph = b.build();

        let order: Vec<NodeId> = graph.neighbors(a).map(|(n, _)| n).collect();
        assert_eq!(order, [d, c, e]);
    }

    #[test]
    fn self_loop_does_not_crash() {
        let mut b = PipeGraphBuilder::new();
        let a = b.add_node();
        b.add_main(a, a, 1.0);
        let graph = b.build();
        // Stored as two directed self-edges.
        assert_eq!(graph.degree(a), 2);
        assert!(graph.neighbors(a).all(|(n, _)| n == a));
    }

    #[test]
    fn degree_counts_directed_edges() {
        let mut b = PipeGraphBuilder::new();
        let a = b.add_node();
        let c = b.add_node();
        let d = b.add_node();
        b.add_main(a, c, 1.0);
        b.add_main(a, d, 1.0);
        let graph = b.build();
        assert_eq!(graph.degree(a), 2);
        assert_eq!(graph.degree(c), 1);
        assert_eq!(graph.degree(d), 1);
    }
}

// ── Document loading ──────────────────────────────────────────────────────────

#[cfg(test)]
mod loading {
    use wdn_core::AllocationConfig;

    use crate::inp::{load_document, InpDocument};

    #[test]
    fn skipped_link_discarded_entirely() {
        let net = super::helpers::demo_network();
        // J3 (elev 120.5) is skipped; pipe P2 (J2–J3) contributes nothing,
        // so J3 is never interned and J2 gains no edge from P2.
        assert_eq!(net.skipped, ["J3"]);
        assert!(net.labels.get("J3").is_none());

        let j2 = net.labels.get("J2").unwrap();
        assert_eq!(net.graph.degree(j2), 1); // only P1
    }

    #[test]
    fn undeclared_nodes_participate() {
        let net = super::helpers::demo_network();
        // J4 and J5 never produced junction records, but links name them.
        assert!(net.labels.get("J4").is_some());
        assert!(net.labels.get("J5").is_some());
    }

    #[test]
    fn adjacency_is_symmetric() {
        let net = super::helpers::demo_network();
        let g = &net.graph;
        for node in g.nodes() {
            for (nb, w) in g.neighbors(node) {
                assert!(
                    g.neighbors(nb).any(|(back, bw)| back == node && bw == w),
                    "missing reverse edge {node} <- {nb}"
                );
            }
        }
    }

    #[test]
    fn skip_nodes_in_no_neighbor_list() {
        let doc = InpDocument::parse(super::helpers::DEMO_INP);
        let net = super::helpers::demo_network();
        for label in doc.skip_labels(100.0) {
            assert!(net.labels.get(label).is_none(), "{label} leaked into graph");
        }
    }

    #[test]
    fn interning_follows_link_order() {
        let net = super::helpers::demo_network();
        // Surviving links in order: P1 (J1,J2), P3 (J1,J4), PU1 (J4,J5), V1 (J5,J1).
        let order: Vec<_> = net.labels.iter().map(|(_, s)| s.to_owned()).collect();
        assert_eq!(order, ["J1", "J2", "J4", "J5"]);
    }

    #[test]
    fn uniform_weight_from_config() {
        let net = super::helpers::demo_network();
        let g = &net.graph;
        for node in g.nodes() {
            for (_, w) in g.neighbors(node) {
                assert_eq!(w, 1.0);
            }
        }
    }

    #[test]
    fn custom_edge_weight() {
        let doc = InpDocument::parse("[PIPES]\nP1 A B 100\n");
        let config = AllocationConfig {
            edge_weight: 3.5,
            ..AllocationConfig::default()
        };
        let net = load_document(&doc, &config);
        let a = net.labels.get("A").unwrap();
        assert!(net.graph.neighbors(a).all(|(_, w)| w == 3.5));
    }
}

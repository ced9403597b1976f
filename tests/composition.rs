// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! Tree-shape properties of the track-surface composer

use trackriser::track::{track_surface, Connector, TrackStandard, WoodTrack};
use trackriser::{Evaluator, Node, NodeKind, RenderConfig};

/// Count (plugs, cutouts) in a composed surface tree. Plugs are the
/// additions beyond the base segment; cutouts are the subtrahends of the
/// final difference pass.
fn surface_parts(node: &Node) -> (usize, usize) {
    match &node.kind {
        NodeKind::Difference(children) => {
            let plugs = match &children[0].kind {
                NodeKind::Union(additions) => additions.len() - 1,
                _ => 0,
            };
            (plugs, children.len() - 1)
        }
        NodeKind::Union(children) => (children.len() - 1, 0),
        _ => (0, 0),
    }
}

fn surface(left: Connector, right: Connector) -> Node {
    track_surface(&WoodTrack, 40.0, left, right, &RenderConfig::default())
}

#[test]
fn test_each_side_contributes_exactly_one_connector() {
    use Connector::{Female, Male};

    for (left, right) in [(Male, Male), (Male, Female), (Female, Male), (Female, Female)] {
        let males = [left, right].iter().filter(|c| **c == Male).count();
        let females = 2 - males;

        let (plugs, cutouts) = surface_parts(&surface(left, right));
        assert_eq!(plugs, males, "{left:?}/{right:?}");
        assert_eq!(cutouts, females, "{left:?}/{right:?}");
    }
}

#[test]
fn test_cutouts_subtracted_after_unions() {
    // With any female side the root must be a single difference pass over
    // the accumulated union
    let node = surface(Connector::Female, Connector::Male);
    match &node.kind {
        NodeKind::Difference(children) => {
            assert!(matches!(children[0].kind, NodeKind::Union(_)));
            assert_eq!(children.len(), 2);
        }
        other => panic!("expected difference at root, got {other:?}"),
    }
}

#[test]
fn test_all_female_root_has_no_plug_union() {
    let node = surface(Connector::Female, Connector::Female);
    match &node.kind {
        NodeKind::Difference(children) => {
            // Base only, no plug additions
            assert!(!matches!(children[0].kind, NodeKind::Union(_)));
            assert_eq!(children.len(), 3);
        }
        other => panic!("expected difference at root, got {other:?}"),
    }
}

#[test]
fn test_male_side_reach_only_on_male_sides() {
    use Connector::{Female, Male};
    let std = WoodTrack;
    let reach = std.plug_neck_length() + std.plug_radius();
    let cfg = RenderConfig::draft();
    let evaluator = Evaluator::new();

    for (left, right) in [(Male, Male), (Male, Female), (Female, Male), (Female, Female)] {
        let mesh = evaluator
            .evaluate(&track_surface(&WoodTrack, 40.0, left, right, &cfg))
            .unwrap();
        let bbox = mesh.bounding_box();

        if left == Male {
            assert!((bbox.min.y + reach).abs() < 1e-6, "{left:?}/{right:?}");
        } else {
            assert!(bbox.min.y > -1e-6, "{left:?}/{right:?}");
        }
        if right == Male {
            assert!(
                (bbox.max.y - (40.0 + reach)).abs() < 1e-6,
                "{left:?}/{right:?}"
            );
        } else {
            assert!(bbox.max.y < 40.0 + 1e-6, "{left:?}/{right:?}");
        }
    }
}

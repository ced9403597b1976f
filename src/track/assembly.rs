// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! Final assembly
//!
//! Stacks the track surface on the riser column. A second copy of the
//! surface, dropped by one millimeter and clipped to the middle half of
//! the track width, patches the bevel seam the connector difference pass
//! leaves at the segment boundary. The cap is cosmetic, not structural.

use super::{connector_support, riser_body, track_surface, RiserParams, TrackStandard};
use crate::ast::{Node, Vec3};
use crate::config::RenderConfig;

/// Assembly-level feature switches
#[derive(Debug, Clone, Copy, Default)]
pub struct AssemblyOptions {
    /// Add print-support wedges under the connectors
    pub supports: bool,
}

/// Thickness of the seam-patch drop below the track surface
const CAP_DROP: f64 = 1.0;

pub fn assemble(
    standard: &dyn TrackStandard,
    params: &RiserParams,
    options: &AssemblyOptions,
    cfg: &RenderConfig,
) -> Node {
    let width = standard.width();
    let reach = standard.plug_neck_length() + standard.plug_radius();
    let ov = cfg.overlap;

    let surface = track_surface(standard, params.length, params.left, params.right, cfg);

    let top = Node::translate(Vec3::new(0.0, 0.0, params.height), surface.clone());

    // Clip box: middle half of the width, full connector-to-connector span
    let cap_bounds = Node::translate(
        Vec3::new(width / 4.0, -(reach + ov), -ov),
        Node::cube(
            Vec3::new(
                width / 2.0,
                params.length + 2.0 * (reach + ov),
                standard.thickness() + 2.0 * ov,
            ),
            false,
        ),
    );
    let cap = Node::translate(
        Vec3::new(0.0, 0.0, params.height - CAP_DROP),
        Node::intersection(vec![surface, cap_bounds]),
    );

    let mut parts = vec![top, cap, riser_body(standard, params, cfg)];

    if options.supports {
        parts.push(connector_support(standard, params, cfg));
    }

    Node::union(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Evaluator, NodeKind};
    use crate::track::{Connector, WoodTrack};

    fn default_params() -> RiserParams {
        RiserParams::new(40.0, 63.5, Connector::Female, Connector::Male).unwrap()
    }

    #[test]
    fn test_assembly_height_includes_track() {
        let cfg = RenderConfig::default();
        let params = default_params();
        let node = assemble(&WoodTrack, &params, &AssemblyOptions::default(), &cfg);
        let mesh = Evaluator::new().evaluate(&node).unwrap();

        let bbox = mesh.bounding_box();
        assert!((bbox.max.z - (63.5 + WoodTrack.thickness())).abs() < 1e-6);
        assert!(bbox.min.z.abs() < 1e-6);
    }

    #[test]
    fn test_default_assembly_has_three_parts() {
        let cfg = RenderConfig::default();
        let node = assemble(
            &WoodTrack,
            &default_params(),
            &AssemblyOptions::default(),
            &cfg,
        );
        match node.kind {
            NodeKind::Union(ref children) => assert_eq!(children.len(), 3),
            ref other => panic!("expected top-level union, got {other:?}"),
        }
    }

    #[test]
    fn test_supports_add_a_fourth_part() {
        let cfg = RenderConfig::default();
        let node = assemble(
            &WoodTrack,
            &default_params(),
            &AssemblyOptions { supports: true },
            &cfg,
        );
        match node.kind {
            NodeKind::Union(ref children) => assert_eq!(children.len(), 4),
            ref other => panic!("expected top-level union, got {other:?}"),
        }
    }
}

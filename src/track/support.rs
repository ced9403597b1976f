// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! Optional print-support wedges under the connectors
//!
//! Each wedge is a 45-degree triangular prism clipped to the connector
//! footprint: the intersection of an axis-aligned box under the connector,
//! a 45-degree-rotated box forming the slope, and a vertical cylinder
//! sized to the plug reach (male) or the track width (female). Disabled in
//! the default assembly.

use super::{Connector, RiserParams, TrackStandard};
use crate::ast::{Node, Vec3};
use crate::config::RenderConfig;

/// Support wedges for both connectors, unioned
pub fn connector_support(
    standard: &dyn TrackStandard,
    params: &RiserParams,
    cfg: &RenderConfig,
) -> Node {
    Node::union(vec![
        side_support(standard, params, params.left, false, cfg),
        side_support(standard, params, params.right, true, cfg),
    ])
}

fn side_support(
    standard: &dyn TrackStandard,
    params: &RiserParams,
    connector: Connector,
    right_side: bool,
    cfg: &RenderConfig,
) -> Node {
    let width = standard.width();
    let height = params.height;
    let ov = cfg.overlap;

    let reach = standard.plug_neck_length() + standard.plug_radius();
    let depth = reach.min(height);
    let y_end = if right_side { params.length } else { 0.0 };

    // Region under the connector overhang
    let y_near = if right_side { y_end } else { y_end - depth };
    let bound = Node::translate(
        Vec3::new(-ov, y_near, height - depth),
        Node::cube(Vec3::new(width + 2.0 * ov, depth, depth), false),
    );

    // 45-degree slope from the track underside down to the column
    let s = 2.0 * depth;
    let tilt = if right_side { 45.0 } else { -45.0 };
    let block = Node::cube(Vec3::new(width + 2.0 * ov, s, s), false);
    // The slope block has to sit on the outward side of the end face
    // before it is tilted
    let block = if right_side {
        block
    } else {
        Node::translate(Vec3::new(0.0, -s, 0.0), block)
    };
    let slope = Node::translate(
        Vec3::new(-ov, y_end, height - depth),
        Node::rotate(Vec3::new(tilt, 0.0, 0.0), block),
    );

    // Clip to the connector footprint
    let radius = match connector {
        Connector::Male => reach,
        Connector::Female => width / 2.0,
    };
    let clip = Node::translate(
        Vec3::new(width / 2.0, y_end, height - depth - ov),
        Node::cylinder(depth + 2.0 * ov, radius, cfg.segments),
    );

    Node::intersection(vec![bound, slope, clip])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Evaluator;
    use crate::track::WoodTrack;

    #[test]
    fn test_support_sits_below_track_surface() {
        let cfg = RenderConfig::default();
        let params =
            RiserParams::new(40.0, 63.5, Connector::Male, Connector::Male).unwrap();
        let mesh = Evaluator::new()
            .evaluate(&connector_support(&WoodTrack, &params, &cfg))
            .unwrap();

        assert!(mesh.triangle_count() > 0);
        let bbox = mesh.bounding_box();
        assert!(bbox.max.z <= params.height + 1e-6);
        assert!(bbox.min.z >= params.height - (WoodTrack.plug_neck_length() + WoodTrack.plug_radius()) - 1e-6);
    }

    #[test]
    fn test_support_stays_near_connector_ends() {
        let cfg = RenderConfig::default();
        let params =
            RiserParams::new(40.0, 63.5, Connector::Female, Connector::Male).unwrap();
        let mesh = Evaluator::new()
            .evaluate(&connector_support(&WoodTrack, &params, &cfg))
            .unwrap();

        let reach = WoodTrack.plug_neck_length() + WoodTrack.plug_radius();
        let bbox = mesh.bounding_box();
        assert!(bbox.min.y >= -reach - 1e-6);
        assert!(bbox.max.y <= 40.0 + reach + 1e-6);
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! Track-surface composer
//!
//! Builds the horizontal track-top solid: the straight segment plus a plug
//! per male side, minus a cutout per female side. The provider's segment
//! runs along +x; the composer rotates it 90 degrees and offsets it by the
//! track width so the surface spans x in [0, width], y in [0, length] -
//! the frame the riser column is placed in.

use super::{Connector, TrackStandard};
use crate::ast::{Node, Vec3};
use crate::config::RenderConfig;

pub fn track_surface(
    standard: &dyn TrackStandard,
    length: f64,
    left: Connector,
    right: Connector,
    cfg: &RenderConfig,
) -> Node {
    let width = standard.width();
    let mid = width / 2.0;

    let base = Node::translate(
        Vec3::new(width, 0.0, 0.0),
        Node::rotate(
            Vec3::new(0.0, 0.0, 90.0),
            standard.straight_track(length, cfg),
        ),
    );

    let mut additions = vec![base];
    let mut cutouts = Vec::new();

    // Sides are independent; each contributes either a plug or a cutout
    match left {
        Connector::Male => additions.push(Node::translate(
            Vec3::new(mid, 0.0, 0.0),
            Node::rotate(Vec3::new(0.0, 0.0, -90.0), standard.plug(cfg)),
        )),
        Connector::Female => cutouts.push(Node::translate(
            Vec3::new(mid, 0.0, 0.0),
            Node::rotate(Vec3::new(0.0, 0.0, -90.0), standard.plug_cutout(cfg)),
        )),
    }

    match right {
        Connector::Male => additions.push(Node::translate(
            Vec3::new(mid, length, 0.0),
            Node::rotate(Vec3::new(0.0, 0.0, 90.0), standard.plug(cfg)),
        )),
        Connector::Female => cutouts.push(Node::translate(
            Vec3::new(mid, length, 0.0),
            Node::rotate(Vec3::new(0.0, 0.0, 90.0), standard.plug_cutout(cfg)),
        )),
    }

    let unioned = if additions.len() == 1 {
        additions.remove(0)
    } else {
        Node::union(additions)
    };

    // All cutouts are subtracted in one pass after the unions
    if cutouts.is_empty() {
        unioned
    } else {
        let mut children = vec![unioned];
        children.extend(cutouts);
        Node::difference(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Evaluator;
    use crate::track::WoodTrack;

    fn surface_bbox(left: Connector, right: Connector) -> crate::geometry::BoundingBox {
        let cfg = RenderConfig::default();
        let node = track_surface(&WoodTrack, 40.0, left, right, &cfg);
        Evaluator::new().evaluate(&node).unwrap().bounding_box()
    }

    #[test]
    fn test_male_ends_extend_past_segment() {
        let std = WoodTrack;
        let reach = std.plug_neck_length() + std.plug_radius();
        let bbox = surface_bbox(Connector::Male, Connector::Male);
        assert!((bbox.min.y + reach).abs() < 1e-6);
        assert!((bbox.max.y - (40.0 + reach)).abs() < 1e-6);
    }

    #[test]
    fn test_female_ends_stay_within_segment() {
        let bbox = surface_bbox(Connector::Female, Connector::Female);
        assert!(bbox.min.y > -1e-6);
        assert!(bbox.max.y < 40.0 + 1e-6);
    }

    #[test]
    fn test_mixed_ends_are_asymmetric() {
        let std = WoodTrack;
        let reach = std.plug_neck_length() + std.plug_radius();
        let bbox = surface_bbox(Connector::Female, Connector::Male);
        assert!(bbox.min.y > -1e-6);
        assert!((bbox.max.y - (40.0 + reach)).abs() < 1e-6);
    }

    #[test]
    fn test_surface_spans_track_width() {
        let bbox = surface_bbox(Connector::Male, Connector::Female);
        assert!((bbox.min.x - 0.0).abs() < 1e-6);
        assert!((bbox.max.x - 40.0).abs() < 1e-6);
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! Track primitive providers
//!
//! A `TrackStandard` supplies the per-standard dimensions and connector
//! solids the composers assemble. All methods are pure functions of their
//! parameters.
//!
//! Provider-local frame: the straight segment spans x in [0, length],
//! y in [0, width], z in [0, thickness]; `plug` protrudes along +x from
//! the origin at the rail centerline; `plug_cutout` recesses along -x.

use crate::ast::{Node, Vec3};
use crate::config::RenderConfig;

pub trait TrackStandard {
    /// Track width across the running surface
    fn width(&self) -> f64;

    /// Track slab thickness
    fn thickness(&self) -> f64;

    /// Length of the plug neck, from segment end face to knob center
    fn plug_neck_length(&self) -> f64;

    /// Radius of the plug knob
    fn plug_radius(&self) -> f64;

    /// Straight track segment solid
    fn straight_track(&self, length: f64, cfg: &RenderConfig) -> Node;

    /// Protruding male connector solid
    fn plug(&self, cfg: &RenderConfig) -> Node;

    /// Recess volume for a female connector, inflated by the standard's
    /// clearance
    fn plug_cutout(&self, cfg: &RenderConfig) -> Node;
}

/// Classic wooden track: 40 mm wide grooved slab with a round-knob plug
pub struct WoodTrack;

impl WoodTrack {
    const WIDTH: f64 = 40.0;
    const THICKNESS: f64 = 12.0;
    const PLUG_RADIUS: f64 = 6.0;
    const PLUG_NECK_LENGTH: f64 = 6.0;
    const PLUG_NECK_WIDTH: f64 = 6.4;
    const CLEARANCE: f64 = 0.4;
    const GROOVE_WIDTH: f64 = 5.75;
    const GROOVE_DEPTH: f64 = 3.0;
    /// Groove center offset from the track centerline
    const GROOVE_OFFSET: f64 = 12.5;
}

impl TrackStandard for WoodTrack {
    fn width(&self) -> f64 {
        Self::WIDTH
    }

    fn thickness(&self) -> f64 {
        Self::THICKNESS
    }

    fn plug_neck_length(&self) -> f64 {
        Self::PLUG_NECK_LENGTH
    }

    fn plug_radius(&self) -> f64 {
        Self::PLUG_RADIUS
    }

    fn straight_track(&self, length: f64, cfg: &RenderConfig) -> Node {
        let ov = cfg.overlap;
        let slab = Node::cube(Vec3::new(length, Self::WIDTH, Self::THICKNESS), false);

        let groove = |center_y: f64| {
            Node::translate(
                Vec3::new(
                    -ov,
                    center_y - Self::GROOVE_WIDTH / 2.0,
                    Self::THICKNESS - Self::GROOVE_DEPTH,
                ),
                Node::cube(
                    Vec3::new(length + 2.0 * ov, Self::GROOVE_WIDTH, Self::GROOVE_DEPTH + ov),
                    false,
                ),
            )
        };

        let mid = Self::WIDTH / 2.0;
        Node::difference(vec![
            slab,
            groove(mid - Self::GROOVE_OFFSET),
            groove(mid + Self::GROOVE_OFFSET),
        ])
    }

    fn plug(&self, cfg: &RenderConfig) -> Node {
        let ov = cfg.overlap;
        let neck = Node::translate(
            Vec3::new(-ov, -Self::PLUG_NECK_WIDTH / 2.0, 0.0),
            Node::cube(
                Vec3::new(
                    Self::PLUG_NECK_LENGTH + ov,
                    Self::PLUG_NECK_WIDTH,
                    Self::THICKNESS,
                ),
                false,
            ),
        );
        let knob = Node::translate(
            Vec3::new(Self::PLUG_NECK_LENGTH, 0.0, 0.0),
            Node::cylinder(Self::THICKNESS, Self::PLUG_RADIUS, cfg.segments),
        );
        Node::union(vec![neck, knob])
    }

    fn plug_cutout(&self, cfg: &RenderConfig) -> Node {
        let ov = cfg.overlap;
        let c = Self::CLEARANCE;
        let slot = Node::translate(
            Vec3::new(
                -(Self::PLUG_NECK_LENGTH + c),
                -(Self::PLUG_NECK_WIDTH / 2.0 + c),
                -ov,
            ),
            Node::cube(
                Vec3::new(
                    Self::PLUG_NECK_LENGTH + c + ov,
                    Self::PLUG_NECK_WIDTH + 2.0 * c,
                    Self::THICKNESS + 2.0 * ov,
                ),
                false,
            ),
        );
        let hole = Node::translate(
            Vec3::new(-Self::PLUG_NECK_LENGTH, 0.0, -ov),
            Node::cylinder(
                Self::THICKNESS + 2.0 * ov,
                Self::PLUG_RADIUS + c,
                cfg.segments,
            ),
        );
        Node::union(vec![slot, hole])
    }
}

/// Battery-powered plastic track: wider slab, smaller knob on a longer neck
pub struct Trackmaster;

impl Trackmaster {
    const WIDTH: f64 = 41.0;
    const THICKNESS: f64 = 12.5;
    const PLUG_RADIUS: f64 = 5.0;
    const PLUG_NECK_LENGTH: f64 = 7.5;
    const PLUG_NECK_WIDTH: f64 = 5.0;
    const CLEARANCE: f64 = 0.5;
}

impl TrackStandard for Trackmaster {
    fn width(&self) -> f64 {
        Self::WIDTH
    }

    fn thickness(&self) -> f64 {
        Self::THICKNESS
    }

    fn plug_neck_length(&self) -> f64 {
        Self::PLUG_NECK_LENGTH
    }

    fn plug_radius(&self) -> f64 {
        Self::PLUG_RADIUS
    }

    fn straight_track(&self, length: f64, _cfg: &RenderConfig) -> Node {
        // Plastic track rides on raised rails, not grooves; the riser only
        // needs the plain slab
        Node::cube(Vec3::new(length, Self::WIDTH, Self::THICKNESS), false)
    }

    fn plug(&self, cfg: &RenderConfig) -> Node {
        let ov = cfg.overlap;
        let neck = Node::translate(
            Vec3::new(-ov, -Self::PLUG_NECK_WIDTH / 2.0, 0.0),
            Node::cube(
                Vec3::new(
                    Self::PLUG_NECK_LENGTH + ov,
                    Self::PLUG_NECK_WIDTH,
                    Self::THICKNESS,
                ),
                false,
            ),
        );
        let knob = Node::translate(
            Vec3::new(Self::PLUG_NECK_LENGTH, 0.0, 0.0),
            Node::cylinder(Self::THICKNESS, Self::PLUG_RADIUS, cfg.segments),
        );
        Node::union(vec![neck, knob])
    }

    fn plug_cutout(&self, cfg: &RenderConfig) -> Node {
        let ov = cfg.overlap;
        let c = Self::CLEARANCE;
        let slot = Node::translate(
            Vec3::new(
                -(Self::PLUG_NECK_LENGTH + c),
                -(Self::PLUG_NECK_WIDTH / 2.0 + c),
                -ov,
            ),
            Node::cube(
                Vec3::new(
                    Self::PLUG_NECK_LENGTH + c + ov,
                    Self::PLUG_NECK_WIDTH + 2.0 * c,
                    Self::THICKNESS + 2.0 * ov,
                ),
                false,
            ),
        );
        let hole = Node::translate(
            Vec3::new(-Self::PLUG_NECK_LENGTH, 0.0, -ov),
            Node::cylinder(
                Self::THICKNESS + 2.0 * ov,
                Self::PLUG_RADIUS + c,
                cfg.segments,
            ),
        );
        Node::union(vec![slot, hole])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Evaluator;

    #[test]
    fn test_wood_track_slab_bounds() {
        let cfg = RenderConfig::default();
        let mesh = Evaluator::new()
            .evaluate(&WoodTrack.straight_track(40.0, &cfg))
            .unwrap();
        let bbox = mesh.bounding_box();
        assert!((bbox.max.x - 40.0).abs() < 1e-6);
        assert!((bbox.max.y - 40.0).abs() < 1e-6);
        assert!((bbox.max.z - 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_plug_protrusion_is_neck_plus_radius() {
        let cfg = RenderConfig::default();
        let std = WoodTrack;
        let mesh = Evaluator::new().evaluate(&std.plug(&cfg)).unwrap();
        let bbox = mesh.bounding_box();
        let expected = std.plug_neck_length() + std.plug_radius();
        assert!((bbox.max.x - expected).abs() < 1e-6);
    }

    #[test]
    fn test_cutout_recesses_inward() {
        let cfg = RenderConfig::default();
        let std = WoodTrack;
        let mesh = Evaluator::new().evaluate(&std.plug_cutout(&cfg)).unwrap();
        let bbox = mesh.bounding_box();
        // Deepest point is the far side of the clearance-inflated hole
        let depth = std.plug_neck_length() + std.plug_radius() + WoodTrack::CLEARANCE;
        assert!((bbox.min.x + depth).abs() < 1e-6);
        // The hole may poke past the end face by at most the clearance
        assert!(bbox.max.x <= WoodTrack::CLEARANCE + 1e-9);
    }
}

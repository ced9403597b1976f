// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! Riser-body composer
//!
//! The vertical support column: a rounded stadium cross-section (hull of
//! two scaled circles) swept upward with a per-axis taper so the footprint
//! flares wider than the track at the base in x, and grows at the top in y
//! to back the connector overhangs.

use super::{Connector, RiserParams, TrackStandard};
use crate::ast::{Node, Profile, Vec2, Vec3};
use crate::config::RenderConfig;

/// Cross-section roundness; 1 is fully round, 10+ near-rectangular
const SQUARENESS: f64 = 3.0;
/// Footprint scale across the track, percent of track width
const FOOT_X: f64 = 150.0;
/// Footprint scale along the track, percent of segment length
const FOOT_Y: f64 = 100.0;

const EXTRUDE_CONVEXITY: u32 = 10;

/// Derived quantities governing the column cross-section and taper
#[derive(Debug, Clone, Copy)]
pub struct ColumnProfile {
    /// Base radius of the rounded profile
    pub arc_h: f64,
    /// Horizontal stretch of each profile circle
    pub scale_x: f64,
    /// Longitudinal stretch, clamped so the two circle offsets never cross
    pub scale_y: f64,
    /// Circle center offset along the length axis; collapses to zero for
    /// segments shorter than the profile's natural span
    pub trans_y: f64,
    /// Flare allowance behind the left connector
    pub extra_left: f64,
    /// Flare allowance behind the right connector
    pub extra_right: f64,
    /// Per-axis scale applied at the top of the extrusion
    pub vscale: Vec2,
    /// Longitudinal placement of the column under the track
    pub offset_y: f64,
}

impl ColumnProfile {
    pub fn derive(standard: &dyn TrackStandard, params: &RiserParams) -> Self {
        let width = standard.width();
        let length = params.length;

        let arc_h = (width / 2.0) / SQUARENESS;
        let scale_x = FOOT_X / 100.0 * SQUARENESS;
        let scale_y = (length / 2.0 / arc_h).min(1.0);
        let trans_y = (length / 2.0 - arc_h).max(0.0);

        let extra_left = Self::flare(standard, params.left);
        let extra_right = Self::flare(standard, params.right);

        let vscale = Vec2::new(
            100.0 / FOOT_X,
            100.0 / FOOT_Y * (1.0 + (extra_left + extra_right) / length),
        );
        let offset_y = length / 2.0 + extra_left - extra_right;

        Self {
            arc_h,
            scale_x,
            scale_y,
            trans_y,
            extra_left,
            extra_right,
            vscale,
            offset_y,
        }
    }

    /// Room the column top must grow per side: a plug extends outward by
    /// its full reach, a cutout only needs clearance behind the end face
    fn flare(standard: &dyn TrackStandard, connector: Connector) -> f64 {
        match connector {
            Connector::Male => standard.plug_neck_length() + standard.plug_radius(),
            Connector::Female => standard.plug_neck_length() * 1.25,
        }
    }
}

/// Compose the tapered column solid
pub fn riser_body(standard: &dyn TrackStandard, params: &RiserParams, cfg: &RenderConfig) -> Node {
    let profile = ColumnProfile::derive(standard, params);

    let lobe = |offset: f64| {
        Profile::translate(
            Vec2::new(0.0, offset),
            Profile::scale(
                Vec2::new(profile.scale_x, profile.scale_y),
                Profile::circle(profile.arc_h, cfg.segments),
            ),
        )
    };

    let cross_section = Profile::hull(vec![lobe(profile.trans_y), lobe(-profile.trans_y)]);

    Node::translate(
        Vec3::new(standard.width() / 2.0, profile.offset_y, 0.0),
        Node::linear_extrude(
            cross_section,
            params.height,
            profile.vscale,
            EXTRUDE_CONVEXITY,
        ),
    )
}

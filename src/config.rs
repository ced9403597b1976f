// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! Process-wide rendering configuration
//!
//! Fixed once at startup and read by every composer: the facet count for
//! circular tessellation and the overlap epsilon used to keep boolean
//! operands from sharing coincident faces.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Facet count for circles and cylinders (OpenSCAD `$fn` analog)
    pub segments: u32,
    /// Epsilon extension applied to subtracted/intersected solids so their
    /// faces never coincide with the faces they cut
    pub overlap: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            segments: 48,
            overlap: 0.1,
        }
    }
}

impl RenderConfig {
    /// Coarse preview quality
    pub fn draft() -> Self {
        Self {
            segments: 16,
            ..Self::default()
        }
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! Trackriser
//!
//! Parametric generator for 3D-printable support risers for wooden toy
//! train track. Composers build an immutable CSG expression tree for one
//! riser variant; a separate evaluator lowers the tree to a triangle mesh
//! for STL export.

pub mod ast;
pub mod config;
pub mod geometry;
pub mod io;
pub mod track;

pub use ast::{Evaluator, Node, NodeKind, Profile, TransformOp};
pub use config::RenderConfig;
pub use geometry::{BoundingBox, Mesh};
pub use track::{
    assemble, AssemblyOptions, Connector, RiserHeight, RiserParams, SegmentLength, TrackStandard,
    Trackmaster, WoodTrack,
};

use anyhow::Result;

/// Compose and evaluate one riser part
pub fn render(
    standard: &dyn TrackStandard,
    params: &RiserParams,
    options: &AssemblyOptions,
    cfg: &RenderConfig,
) -> Result<Mesh> {
    let tree = assemble(standard, params, options, cfg);
    let evaluator = Evaluator::new();
    evaluator.evaluate(&tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_render() {
        let params =
            RiserParams::new(40.0, 63.5, Connector::Female, Connector::Male).unwrap();
        let result = render(
            &WoodTrack,
            &params,
            &AssemblyOptions::default(),
            &RenderConfig::draft(),
        );
        assert!(result.is_ok());
        assert!(result.unwrap().triangle_count() > 0);
    }
}

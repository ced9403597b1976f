// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! CSG expression tree
//!
//! The part composers build an immutable `Node` tree; a separate
//! `Evaluator` lowers it to a mesh. No solid is mutated after creation.

mod evaluator;
mod node;

pub use evaluator::Evaluator;
pub use node::{Node, NodeKind, Profile, TransformOp, Vec2, Vec3};

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! I/O module - mesh export and tree dumps

mod exporter;

pub use exporter::{export_stl, export_tree_json};

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! Track riser composition
//!
//! The composers in this module build the CSG tree for one riser part:
//! the horizontal track surface with its connectors, the tapered support
//! column beneath it, optional connector support wedges, and the final
//! assembly that stacks them.

mod assembly;
mod params;
mod riser;
mod standard;
mod support;
mod surface;

pub use assembly::{assemble, AssemblyOptions};
pub use params::{Connector, ParamError, RiserHeight, RiserParams, SegmentLength};
pub use riser::{riser_body, ColumnProfile};
pub use standard::{TrackStandard, Trackmaster, WoodTrack};
pub use support::connector_support;
pub use surface::track_surface;

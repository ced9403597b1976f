// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Trackriser Contributors

//! User-facing options and the parameter-resolution boundary
//!
//! Options carry the enumerated values exposed to the user; `RiserParams`
//! is the validated numeric form the composers consume. Validation happens
//! here and nowhere else - the composers assume well-formed inputs.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Connector gender at one end of the track segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Connector {
    /// Protruding plug, unioned onto the segment end
    Male,
    /// Recessed cutout, subtracted from the segment end
    Female,
}

/// Standard track segment lengths in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum SegmentLength {
    #[value(name = "25")]
    Short,
    #[value(name = "40")]
    Standard,
    #[value(name = "51")]
    Long,
    /// Resolved to the standard length
    Auto,
}

impl SegmentLength {
    pub fn resolve(self) -> f64 {
        match self {
            SegmentLength::Short => 25.0,
            SegmentLength::Standard | SegmentLength::Auto => 40.0,
            SegmentLength::Long => 51.0,
        }
    }
}

/// Standard riser column heights in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum RiserHeight {
    /// One inch
    #[value(name = "25.4")]
    Low,
    /// Two and a half inches, one standard support-block unit
    #[value(name = "63.5")]
    Unit,
    /// Five inches, two units
    #[value(name = "127")]
    Double,
    /// Resolved to one unit
    Auto,
}

impl RiserHeight {
    pub fn resolve(self) -> f64 {
        match self {
            RiserHeight::Low => 25.4,
            RiserHeight::Unit | RiserHeight::Auto => 63.5,
            RiserHeight::Double => 127.0,
        }
    }
}

/// Configuration errors caught at the resolution boundary, before any
/// composition begins
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("track segment length must be positive, got {0}")]
    NonPositiveLength(f64),
    #[error("riser height must be positive, got {0}")]
    NonPositiveHeight(f64),
}

/// Validated parameters governing one rendering pass
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiserParams {
    pub length: f64,
    pub height: f64,
    pub left: Connector,
    pub right: Connector,
}

impl RiserParams {
    pub fn new(length: f64, height: f64, left: Connector, right: Connector) -> Result<Self, ParamError> {
        if length <= 0.0 {
            return Err(ParamError::NonPositiveLength(length));
        }
        if height <= 0.0 {
            return Err(ParamError::NonPositiveHeight(height));
        }
        Ok(Self {
            length,
            height,
            left,
            right,
        })
    }

    /// Resolve enumerated options into validated parameters
    pub fn from_options(
        length: SegmentLength,
        height: RiserHeight,
        left: Connector,
        right: Connector,
    ) -> Self {
        // Enumerated values are positive by construction
        Self {
            length: length.resolve(),
            height: height.resolve(),
            left,
            right,
        }
    }
}

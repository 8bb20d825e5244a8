//! Downstream collaborators of the encoder
//!
//! This module provides helpers that consume a finished symbol:
//! - Rendering (module grid to an RGBA raster, PNG output)
//! - Sizing (minimum and preferred pixel dimensions)

/// RGBA rendering, PNG output and pixel sizing
pub mod render;

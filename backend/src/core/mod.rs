//! Core simulation primitives
//!
//! - **time**: Day clock bounding the simulated horizon

pub mod time;

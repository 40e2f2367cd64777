//! Deterministic random number generation
//!
//! Uses xorshift64* for fast, seedable generation.
//! All randomness in the simulator goes through an explicitly passed
//! `RngManager`; there is no process-wide generator.

mod xorshift;

pub use xorshift::RngManager;

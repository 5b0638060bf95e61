//! Keystream subsystem for the shuffle-block cipher.
//!
//! Provides the deterministic byte generator that drives chaining,
//! shuffling, and masking, plus the password hash that seeds it.

pub mod lcgen;
pub mod password_seed;

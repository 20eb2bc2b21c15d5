//! Test support for the wireforge codec.
//!
//! Deterministic data generation and wire-tampering helpers shared by the
//! workspace's integration tests. Everything is seeded: the same seed
//! always produces the same packets, so failures reproduce exactly.

pub mod corrupt;
pub mod payloads;
pub mod roundtrip;

pub use corrupt::{flip_byte, truncated};
pub use payloads::PayloadGen;
pub use roundtrip::wire_roundtrip;

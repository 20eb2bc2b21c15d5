//! Transform layer over the wireforge codec.
//!
//! Sits between the codec and the transport: before a packet goes out, its
//! whole payload is passed through a forward transform (compression); after
//! a packet comes in, the reverse transform restores it. The codec never
//! sees transformed bytes.
//!
//! # Components
//!
//! - [`transform`]: the [`Transform`] capability seam and the zlib backend
//! - [`pipeline`]: [`TransformPipeline`], the apply/reverse driver with the
//!   preserve-on-failure contract
//! - [`metrics`]: per-command size accounting and reporting
//!
//! Everything here is synchronous and CPU-bound; packets are owned by one
//! logical flow at a time and handed off by move.

pub mod metrics;
pub mod pipeline;
pub mod transform;

pub use metrics::{ReportEntry, SizeCounters, TransformMetrics, TransformReport};
pub use pipeline::TransformPipeline;
pub use transform::{IdentityTransform, Transform, TransformError, ZlibTransform};

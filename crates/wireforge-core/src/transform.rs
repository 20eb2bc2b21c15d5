//! The payload transform seam.
//!
//! [`Transform`] abstracts whatever is applied to a whole payload before
//! transmission. Today that is zlib compression; a cipher step would
//! compose here as its own implementation with its own keying and failure
//! model rather than being conflated with compression.
//!
//! The contract is asymmetric: the forward direction is total (any byte
//! sequence can be compressed), while the reverse direction is fallible
//! because it parses untrusted bytes off the wire.

use std::io::{Read, Write};

use flate2::{Compression, read::ZlibDecoder, write::ZlibEncoder};
use thiserror::Error;

/// Error from the reverse transform on a received payload.
///
/// Recoverable: the caller drops the offending packet and carries on; the
/// session is not affected.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The payload is not valid output of the forward transform.
    #[error("payload decode failed: {0}")]
    Decode(#[source] std::io::Error),
}

/// Whole-payload transform applied around wire transmission.
pub trait Transform {
    /// Forward transform. Total: every input encodes.
    fn compress(&self, data: &[u8]) -> Vec<u8>;

    /// Reverse transform. Fails on input the forward direction did not
    /// produce (corruption, truncation, or a peer speaking something else).
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, TransformError>;
}

/// Zlib at maximum compression, matching the level the peer expects.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZlibTransform;

impl Transform for ZlibTransform {
    fn compress(&self, data: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len()), Compression::best());
        // A Vec-backed encoder cannot fail on write or finish.
        encoder
            .write_all(data)
            .and_then(|()| encoder.finish())
            .unwrap_or_default()
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, TransformError> {
        let mut decoder = ZlibDecoder::new(data);
        let mut out = Vec::new();
        decoder.read_to_end(&mut out).map_err(TransformError::Decode)?;
        Ok(out)
    }
}

/// Pass-through transform for tests and for channels where compression is
/// disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransform;

impl Transform for IdentityTransform {
    fn compress(&self, data: &[u8]) -> Vec<u8> {
        data.to_vec()
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, TransformError> {
        Ok(data.to_vec())
    }
}

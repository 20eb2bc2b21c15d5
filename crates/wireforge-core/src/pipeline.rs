//! Apply/reverse driver for whole-payload transforms.
//!
//! A pipeline is constructed once per endpoint with the transform backend
//! and the direction its outbound traffic flows. [`TransformPipeline::apply`]
//! rewrites a packet in place before export; [`TransformPipeline::reverse`]
//! restores a received packet after import, and on failure leaves the packet
//! byte-identical so the caller can log or dump it before dropping it.

use bytes::Bytes;
use wireforge_proto::{Direction, Packet, command_name};

use crate::{
    metrics::TransformMetrics,
    transform::{Transform, TransformError},
};

/// Runs a packet's payload through the transform in either direction.
#[derive(Debug, Clone)]
pub struct TransformPipeline<T> {
    transform: T,
    outbound: Direction,
}

impl<T: Transform> TransformPipeline<T> {
    /// Pipeline for an endpoint whose outbound packets flow in `outbound`.
    ///
    /// A client passes [`Direction::ToServer`], a server
    /// [`Direction::ToClient`]; received traffic is accounted under the
    /// opposite direction automatically.
    pub fn new(transform: T, outbound: Direction) -> Self {
        Self { transform, outbound }
    }

    /// Replace the payload with its forward-transformed bytes.
    ///
    /// Cannot fail: the forward transform is total. Sizes are added to the
    /// outbound table under the packet's command.
    pub fn apply(&self, packet: &mut Packet, metrics: &mut TransformMetrics) {
        let raw_len = packet.len() as u64;
        let transformed = self.transform.compress(packet.payload());

        metrics.record(self.outbound, packet.command(), raw_len, transformed.len() as u64);
        tracing::debug!(
            direction = self.outbound.label(),
            command = packet.command(),
            name = command_name(self.outbound, packet.command()),
            raw = raw_len,
            transformed = transformed.len(),
            "payload transformed"
        );

        packet.set_payload(Bytes::from(transformed));
    }

    /// Replace the payload with its reverse-transformed bytes.
    ///
    /// On failure the packet is untouched and the error propagates; the
    /// expected caller response is to drop the packet, not the session.
    /// Sizes are added to the inbound table only on success.
    pub fn reverse(
        &self,
        packet: &mut Packet,
        metrics: &mut TransformMetrics,
    ) -> Result<(), TransformError> {
        let inbound = self.outbound.opposite();
        let received_len = packet.len() as u64;

        let restored = self.transform.decompress(packet.payload()).map_err(|e| {
            tracing::warn!(
                direction = inbound.label(),
                command = packet.command(),
                name = command_name(inbound, packet.command()),
                received = received_len,
                error = %e,
                "payload decode failed, dropping packet"
            );
            e
        })?;

        metrics.record(inbound, packet.command(), restored.len() as u64, received_len);
        tracing::debug!(
            direction = inbound.label(),
            command = packet.command(),
            name = command_name(inbound, packet.command()),
            raw = restored.len(),
            transformed = received_len,
            "payload restored"
        );

        packet.set_payload(Bytes::from(restored));
        Ok(())
    }
}

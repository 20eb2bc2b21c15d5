//! Packet: command id, peer id, and payload bytes.
//!
//! [`Packet`] is the handoff unit between the codec roles and the layers
//! around them: a [`crate::PacketWriter`] seals into one, the transform
//! pipeline swaps its payload wholesale, the transport moves its wire form,
//! and a [`crate::PacketReader`] decodes it. The wire form is the 2-byte
//! big-endian command id followed by the payload.

use bytes::{BufMut, Bytes, BytesMut};

use crate::{
    errors::{Result, WireError},
    reader::PacketReader,
};

/// Peer session identifier; 0 means unset.
pub type PeerId = u16;

/// Length of the command header on an exported wire frame.
pub const HEADER_LEN: usize = 2;

/// One protocol packet: command id, optional peer id, payload bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Packet {
    command: u16,
    peer: PeerId,
    payload: Bytes,
}

impl Packet {
    /// An empty packet for the given command.
    pub fn new(command: u16) -> Self {
        Self { command, peer: 0, payload: Bytes::new() }
    }

    /// An empty packet tagged with a peer session id.
    pub fn with_peer(command: u16, peer: PeerId) -> Self {
        Self { command, peer, payload: Bytes::new() }
    }

    /// Assemble a packet from its parts.
    pub fn from_parts(command: u16, peer: PeerId, payload: Bytes) -> Self {
        Self { command, peer, payload }
    }

    /// Split a received wire frame into command and payload.
    ///
    /// The first two bytes are the big-endian command id; the rest is the
    /// payload. A frame shorter than the header is rejected.
    pub fn from_wire(wire: &[u8], peer: PeerId) -> Result<Self> {
        let mut packet = Self::default();
        packet.import(wire, peer)?;
        Ok(packet)
    }

    /// In-place variant of [`Packet::from_wire`] for reuse after
    /// [`Packet::clear`].
    ///
    /// # Panics
    ///
    /// Importing over a packet whose command is already set is a contract
    /// violation by the caller, not a data error, and asserts loudly.
    pub fn import(&mut self, wire: &[u8], peer: PeerId) -> Result<()> {
        assert!(self.command == 0, "import into a packet that already has a command");
        if wire.len() < HEADER_LEN {
            return Err(WireError::TruncatedFrame { len: wire.len() });
        }
        self.command = u16::from_be_bytes([wire[0], wire[1]]);
        self.peer = peer;
        self.payload = Bytes::copy_from_slice(&wire[HEADER_LEN..]);
        Ok(())
    }

    /// Command id.
    pub fn command(&self) -> u16 {
        self.command
    }

    /// Peer session id; 0 when unset.
    pub fn peer(&self) -> PeerId {
        self.peer
    }

    /// Payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// True for an empty payload.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Start a fresh decode pass over the payload, cursor at 0.
    pub fn reader(&self) -> PacketReader<'_> {
        PacketReader::new(&self.payload)
    }

    /// Replace the payload wholesale.
    ///
    /// This is the transform pipeline's splice point; any reader must be
    /// re-created afterwards, which restarts the cursor at 0.
    pub fn set_payload(&mut self, payload: Bytes) {
        self.payload = payload;
    }

    /// Export the wire frame: command header followed by the payload.
    pub fn to_wire(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(HEADER_LEN + self.payload.len());
        buf.put_u16(self.command);
        buf.put_slice(&self.payload);
        buf.freeze()
    }

    /// Reset to a fully empty, reusable state: size 0, command 0, peer 0.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use hex_literal::hex;

    use super::Packet;
    use crate::errors::WireError;

    #[test]
    fn wire_export_prepends_command() {
        let p = Packet::from_parts(0x0102, 0, Bytes::from_static(&[0xAA, 0xBB]));
        assert_eq!(&p.to_wire()[..], hex!("0102 AABB"));
    }

    #[test]
    fn wire_import_export_inverse() {
        let p = Packet::from_parts(42, 7, Bytes::from_static(b"payload"));
        let restored = Packet::from_wire(&p.to_wire(), 7);
        assert_eq!(restored, Ok(p));
    }

    #[test]
    fn import_splits_header_and_payload() {
        let p = Packet::from_wire(&hex!("002A 0102 03"), 9);
        let p = match p {
            Ok(p) => p,
            Err(e) => unreachable!("import failed: {e}"),
        };
        assert_eq!(p.command(), 42);
        assert_eq!(p.peer(), 9);
        assert_eq!(p.payload(), [1, 2, 3]);
    }

    #[test]
    fn header_only_frame_has_empty_payload() {
        let p = Packet::from_wire(&hex!("0007"), 0);
        assert_eq!(p.map(|p| p.len()), Ok(0));
    }

    #[test]
    fn short_frame_is_rejected() {
        assert_eq!(Packet::from_wire(&[1], 0), Err(WireError::TruncatedFrame { len: 1 }));
        assert_eq!(Packet::from_wire(&[], 0), Err(WireError::TruncatedFrame { len: 0 }));
    }

    #[test]
    #[should_panic(expected = "already has a command")]
    fn double_import_asserts() {
        let mut p = Packet::new(0);
        let _ = p.import(&hex!("0001 AA"), 0);
        let _ = p.import(&hex!("0002 BB"), 0);
    }

    #[test]
    fn clear_then_import_behaves_like_fresh() {
        let mut p = Packet::from_parts(5, 3, Bytes::from_static(&[1, 2]));
        p.clear();
        assert_eq!(p, Packet::default());
        assert_eq!(p.import(&hex!("0004 0A"), 2), Ok(()));
        assert_eq!(p.command(), 4);
        assert_eq!(p.peer(), 2);
        assert_eq!(p.payload(), [0x0A]);
    }

    #[test]
    fn reader_starts_at_zero_each_time() {
        let p = Packet::from_parts(1, 0, Bytes::from_static(&[9, 8]));
        let mut r1 = p.reader();
        assert_eq!(r1.read_u8(), Ok(9));
        let mut r2 = p.reader();
        assert_eq!(r2.read_u8(), Ok(9));
    }
}

//! Producer role: sequential typed writes into a growable payload.
//!
//! A [`PacketWriter`] owns the command id and a buffer that grows as fields
//! are appended. Numeric writes cannot fail and return `&mut Self` for
//! chaining; string writes are fallible because each string shape has a hard
//! cap imposed by its length-prefix width. When the payload is complete,
//! [`PacketWriter::finish`] seals it into a [`Packet`] for the transport
//! (or the transform pipeline) to take over.

use bytes::{BufMut, BytesMut};

use crate::{
    errors::{Result, WireError},
    packet::{Packet, PeerId},
    types::{Color, Vec2f, Vec2i, Vec3f, Vec3i, Vec3s},
};

/// Maximum byte length of a narrow string (16-bit length prefix).
pub const STRING_MAX_LEN: usize = u16::MAX as usize;

/// Maximum byte length of a long string (32-bit length prefix, capped well
/// below the prefix's range to bound allocation on decode).
pub const LONG_STRING_MAX_LEN: usize = 64 * 1024 * 1024;

/// Maximum number of UTF-16 code units in a text string (16-bit prefix).
///
/// Counts code units, not code points: a surrogate pair consumes two.
pub const TEXT_MAX_UNITS: usize = u16::MAX as usize;

/// Builds a packet payload by appending typed fields in wire order.
#[derive(Debug, Default)]
pub struct PacketWriter {
    command: u16,
    peer: PeerId,
    buf: BytesMut,
}

impl PacketWriter {
    /// Start a payload for the given command.
    pub fn new(command: u16) -> Self {
        Self { command, peer: 0, buf: BytesMut::new() }
    }

    /// Start a payload with a pre-sized buffer, for producers that know the
    /// encoded size upfront.
    pub fn with_capacity(command: u16, capacity: usize) -> Self {
        Self { command, peer: 0, buf: BytesMut::with_capacity(capacity) }
    }

    /// Tag the packet with a peer session id.
    pub fn set_peer(&mut self, peer: PeerId) -> &mut Self {
        self.peer = peer;
        self
    }

    /// Command id this payload is being built for.
    pub fn command(&self) -> u16 {
        self.command
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Append an unsigned byte.
    pub fn write_u8(&mut self, v: u8) -> &mut Self {
        self.buf.put_u8(v);
        self
    }

    /// Append a big-endian unsigned 16-bit integer.
    pub fn write_u16(&mut self, v: u16) -> &mut Self {
        self.buf.put_u16(v);
        self
    }

    /// Append a big-endian unsigned 32-bit integer.
    pub fn write_u32(&mut self, v: u32) -> &mut Self {
        self.buf.put_u32(v);
        self
    }

    /// Append a big-endian unsigned 64-bit integer.
    pub fn write_u64(&mut self, v: u64) -> &mut Self {
        self.buf.put_u64(v);
        self
    }

    /// Append a signed byte (two's complement).
    pub fn write_i8(&mut self, v: i8) -> &mut Self {
        self.buf.put_i8(v);
        self
    }

    /// Append a big-endian signed 16-bit integer.
    pub fn write_i16(&mut self, v: i16) -> &mut Self {
        self.buf.put_i16(v);
        self
    }

    /// Append a big-endian signed 32-bit integer.
    pub fn write_i32(&mut self, v: i32) -> &mut Self {
        self.buf.put_i32(v);
        self
    }

    /// Append a big-endian signed 64-bit integer.
    pub fn write_i64(&mut self, v: i64) -> &mut Self {
        self.buf.put_i64(v);
        self
    }

    /// Append a bool as one byte, 0 or 1.
    pub fn write_bool(&mut self, v: bool) -> &mut Self {
        self.write_u8(u8::from(v))
    }

    /// Append an IEEE-754 float as its big-endian bit pattern.
    pub fn write_f32(&mut self, v: f32) -> &mut Self {
        self.buf.put_f32(v);
        self
    }

    /// Append a 2D float vector, X then Y.
    pub fn write_vec2f(&mut self, v: Vec2f) -> &mut Self {
        self.write_f32(v.x).write_f32(v.y)
    }

    /// Append a 3D float vector, X, Y, Z.
    pub fn write_vec3f(&mut self, v: Vec3f) -> &mut Self {
        self.write_f32(v.x).write_f32(v.y).write_f32(v.z)
    }

    /// Append a 3D short vector, X, Y, Z.
    pub fn write_vec3s(&mut self, v: Vec3s) -> &mut Self {
        self.write_i16(v.x).write_i16(v.y).write_i16(v.z)
    }

    /// Append a 2D int vector, X then Y.
    pub fn write_vec2i(&mut self, v: Vec2i) -> &mut Self {
        self.write_i32(v.x).write_i32(v.y)
    }

    /// Append a 3D int vector, X, Y, Z.
    pub fn write_vec3i(&mut self, v: Vec3i) -> &mut Self {
        self.write_i32(v.x).write_i32(v.y).write_i32(v.z)
    }

    /// Append a color as packed big-endian ARGB.
    pub fn write_color(&mut self, c: Color) -> &mut Self {
        self.write_u32(c.to_argb())
    }

    /// Append a narrow string: 16-bit byte-length prefix, then raw bytes.
    ///
    /// Rejected without committing any bytes if the string is longer than
    /// [`STRING_MAX_LEN`].
    pub fn write_str(&mut self, s: &str) -> Result<&mut Self> {
        if s.len() > STRING_MAX_LEN {
            return Err(WireError::LengthExceeded {
                what: "string",
                len: s.len(),
                max: STRING_MAX_LEN,
            });
        }
        self.buf.put_u16(s.len() as u16);
        self.buf.put_slice(s.as_bytes());
        Ok(self)
    }

    /// Append a long string: 32-bit byte-length prefix, then raw bytes.
    ///
    /// Rejected without committing any bytes if the string is longer than
    /// [`LONG_STRING_MAX_LEN`].
    pub fn write_long_str(&mut self, s: &str) -> Result<&mut Self> {
        if s.len() > LONG_STRING_MAX_LEN {
            return Err(WireError::LengthExceeded {
                what: "long string",
                len: s.len(),
                max: LONG_STRING_MAX_LEN,
            });
        }
        self.buf.put_u32(s.len() as u32);
        self.buf.put_slice(s.as_bytes());
        Ok(self)
    }

    /// Append a text string: 16-bit unit-count prefix, then UTF-16 code
    /// units, big-endian.
    ///
    /// Code points above U+FFFF are emitted as surrogate pairs and count as
    /// two units toward the prefix. The unit count is computed before
    /// emission so an oversized string is rejected without committing any
    /// bytes.
    pub fn write_text(&mut self, s: &str) -> Result<&mut Self> {
        let units = s.encode_utf16().count();
        if units > TEXT_MAX_UNITS {
            return Err(WireError::LengthExceeded {
                what: "text string",
                len: units,
                max: TEXT_MAX_UNITS,
            });
        }
        self.buf.put_u16(units as u16);
        for unit in s.encode_utf16() {
            self.buf.put_u16(unit);
        }
        Ok(self)
    }

    /// Append raw bytes with no length prefix.
    ///
    /// The field boundary is the caller's problem; the matching read is
    /// [`crate::PacketReader::bytes_at`] or a raw slice of the payload.
    pub fn write_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.put_slice(bytes);
        self
    }

    /// Discard everything written so far, keeping the command and peer.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Seal the payload into an immutable [`Packet`].
    pub fn finish(self) -> Packet {
        Packet::from_parts(self.command, self.peer, self.buf.freeze())
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::{PacketWriter, STRING_MAX_LEN, TEXT_MAX_UNITS};
    use crate::{
        errors::WireError,
        types::{Color, Vec3f, Vec3s},
    };

    #[test]
    fn numeric_fields_are_big_endian() {
        let mut w = PacketWriter::new(1);
        w.write_u16(0x1234).write_u32(0xDEAD_BEEF).write_i16(-2);
        let p = w.finish();
        assert_eq!(p.payload(), hex!("1234 DEADBEEF FFFE"));
    }

    #[test]
    fn bool_is_one_byte() {
        let mut w = PacketWriter::new(1);
        w.write_bool(true).write_bool(false);
        assert_eq!(w.finish().payload(), [1, 0]);
    }

    #[test]
    fn float_is_ieee754_bits() {
        let mut w = PacketWriter::new(1);
        w.write_f32(1.5);
        assert_eq!(w.finish().payload(), hex!("3FC00000"));
    }

    #[test]
    fn vectors_are_component_sequences() {
        let mut w = PacketWriter::new(1);
        w.write_vec3s(Vec3s::new(1, -1, 256));
        assert_eq!(w.finish().payload(), hex!("0001 FFFF 0100"));

        let mut w = PacketWriter::new(1);
        w.write_vec3f(Vec3f::new(1.0, 2.0, 3.0));
        assert_eq!(w.finish().payload(), hex!("3F800000 40000000 40400000"));
    }

    #[test]
    fn color_packs_argb() {
        let mut w = PacketWriter::new(1);
        w.write_color(Color::new(0xFF, 0x10, 0x20, 0x30));
        assert_eq!(w.finish().payload(), hex!("FF102030"));
    }

    #[test]
    fn narrow_string_layout() {
        let mut w = PacketWriter::new(1);
        assert!(w.write_str("hello").is_ok());
        assert_eq!(w.finish().payload(), hex!("0005 68656C6C6F"));
    }

    #[test]
    fn empty_string_is_prefix_only() {
        let mut w = PacketWriter::new(1);
        assert!(w.write_str("").is_ok());
        assert_eq!(w.finish().payload(), [0, 0]);
    }

    #[test]
    fn long_string_has_four_byte_prefix() {
        let mut w = PacketWriter::new(1);
        assert!(w.write_long_str("ab").is_ok());
        assert_eq!(w.finish().payload(), hex!("00000002 6162"));
    }

    #[test]
    fn text_emits_surrogate_pairs() {
        // U+1F600 GRINNING FACE: two units, D83D DE00.
        let mut w = PacketWriter::new(1);
        assert!(w.write_text("\u{1F600}").is_ok());
        assert_eq!(w.finish().payload(), hex!("0002 D83D DE00"));
    }

    #[test]
    fn text_prefix_counts_units_not_code_points() {
        // One BMP char plus one astral char: 1 + 2 = 3 units.
        let mut w = PacketWriter::new(1);
        assert!(w.write_text("a\u{1F600}").is_ok());
        assert_eq!(w.finish().payload(), hex!("0003 0061 D83D DE00"));
    }

    #[test]
    fn oversized_string_rejected_before_commit() {
        let mut w = PacketWriter::new(1);
        w.write_u8(7);
        let big = "x".repeat(STRING_MAX_LEN + 1);
        assert_eq!(
            w.write_str(&big).err(),
            Some(WireError::LengthExceeded {
                what: "string",
                len: STRING_MAX_LEN + 1,
                max: STRING_MAX_LEN,
            })
        );
        // Nothing was committed, not even the prefix.
        assert_eq!(w.len(), 1);
    }

    #[test]
    fn oversized_text_rejected_before_commit() {
        let mut w = PacketWriter::new(1);
        // 32768 astral code points = 65536 units, one over the cap.
        let big = "\u{1F600}".repeat(TEXT_MAX_UNITS / 2 + 1);
        assert_eq!(
            w.write_text(&big).err(),
            Some(WireError::LengthExceeded {
                what: "text string",
                len: TEXT_MAX_UNITS + 1,
                max: TEXT_MAX_UNITS,
            })
        );
        assert!(w.is_empty());
    }

    #[test]
    fn raw_append_has_no_prefix() {
        let mut w = PacketWriter::new(1);
        w.write_raw(&[1, 2, 3]);
        assert_eq!(w.finish().payload(), [1, 2, 3]);
    }

    #[test]
    fn clear_keeps_command_and_resets_buffer() {
        let mut w = PacketWriter::new(9);
        w.write_u32(1);
        w.clear();
        assert!(w.is_empty());
        assert_eq!(w.command(), 9);
        w.write_u8(5);
        assert_eq!(w.finish().payload(), [5]);
    }
}

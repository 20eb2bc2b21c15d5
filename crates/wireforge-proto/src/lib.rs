//! Wire codec for the wireforge protocol.
//!
//! A packet on the wire is a 16-bit command identifier followed by a flat
//! payload of typed fields. Fields carry no tags or padding; sender and
//! receiver agree on the sequence of types per command, so the payload is
//! simply each field's fixed encoding back to back.
//!
//! All multi-byte integers are big-endian. Strings come in three shapes:
//! a narrow string (16-bit byte-length prefix), a long string (32-bit
//! byte-length prefix, capped at 64 MiB), and a text string (16-bit prefix
//! counting UTF-16 code units, with code points above U+FFFF encoded as
//! surrogate pairs).
//!
//! The producer and consumer sides are separate types: [`PacketWriter`]
//! appends fields to a growable buffer, [`PacketReader`] decodes them from
//! an immutable one. The two meet only at the [`Packet`] import/export
//! boundary, so a half-written packet can never be half-read.
//!
//! # Security
//!
//! Every read checks its bounds before touching a single byte, and every
//! string write checks its length prefix cap before committing anything.
//! Malformed input produces a [`WireError`], never a truncated or
//! zero-filled value.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod command;
pub mod errors;
pub mod packet;
pub mod reader;
pub mod types;
pub mod writer;

pub use command::{Direction, command_name};
pub use errors::{Result, WireError};
pub use packet::{HEADER_LEN, Packet, PeerId};
pub use reader::PacketReader;
pub use types::{Color, Vec2f, Vec2i, Vec3f, Vec3i, Vec3s};
pub use writer::{LONG_STRING_MAX_LEN, PacketWriter, STRING_MAX_LEN, TEXT_MAX_UNITS};

//! Export/import round-trip driver.

use wireforge_proto::{Packet, Result};

/// Push a packet through the wire boundary and back, asserting the command
/// and payload survive byte for byte. Returns the re-imported packet so
/// callers can keep reading from it.
pub fn wire_roundtrip(packet: &Packet) -> Result<Packet> {
    let restored = Packet::from_wire(&packet.to_wire(), packet.peer())?;
    assert_eq!(restored.command(), packet.command(), "command id changed on the wire");
    assert_eq!(restored.payload(), packet.payload(), "payload changed on the wire");
    Ok(restored)
}

//! Arbitrary wire bytes through import and a full typed read sweep: the
//! reader must fail closed, never panic or read out of bounds.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wireforge_proto::Packet;

fuzz_target!(|data: &[u8]| {
    let Ok(packet) = Packet::from_wire(data, 1) else {
        return;
    };

    let mut r = packet.reader();
    let _ = r.read_u8();
    let _ = r.read_u16();
    let _ = r.read_u32();
    let _ = r.read_u64();
    let _ = r.read_i16();
    let _ = r.read_f32();
    let _ = r.read_vec3f();
    let _ = r.read_vec3s();
    let _ = r.read_color();
    let _ = r.read_str();
    let _ = r.read_long_str();
    let _ = r.read_text();

    // Random access anywhere near the buffer must be safe too.
    let r = packet.reader();
    for offset in 0..data.len().saturating_add(2) {
        let _ = r.u8_at(offset);
        let _ = r.u16_at(offset);
        let _ = r.remaining_from(offset);
    }

    // Export of whatever we imported reproduces the input.
    assert_eq!(&packet.to_wire()[..], data);
});

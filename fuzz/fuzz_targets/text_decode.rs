//! Arbitrary bytes as a text string body: surrogate recombination must
//! always produce valid Unicode or U+FFFD, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wireforge_proto::{PacketReader, PacketWriter};

fuzz_target!(|data: &[u8]| {
    let mut r = PacketReader::new(data);
    if let Ok(text) = r.read_text() {
        // Whatever came out is a well-formed string; re-encoding it must
        // succeed and decode back to itself.
        let mut w = PacketWriter::new(1);
        if w.write_text(&text).is_ok() {
            let p = w.finish();
            assert_eq!(p.reader().read_text().ok().as_deref(), Some(text.as_str()));
        }
    }
});

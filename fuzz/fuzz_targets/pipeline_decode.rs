//! Arbitrary bytes through the reverse transform: a failure must leave the
//! packet byte-identical, a success must re-compress losslessly.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wireforge_core::{Transform, TransformMetrics, TransformPipeline, ZlibTransform};
use wireforge_proto::{Direction, Packet};

fuzz_target!(|data: &[u8]| {
    let Ok(mut packet) = Packet::from_wire(data, 0) else {
        return;
    };
    let before = packet.clone();

    let pipeline = TransformPipeline::new(ZlibTransform, Direction::ToServer);
    let mut metrics = TransformMetrics::new();

    match pipeline.reverse(&mut packet, &mut metrics) {
        Err(_) => assert_eq!(packet, before),
        Ok(()) => {
            // Decoded fine: the restored payload must compress back to a
            // stream that decodes to the same bytes.
            let restored = packet.payload().to_vec();
            let recompressed = ZlibTransform.compress(&restored);
            assert_eq!(ZlibTransform.decompress(&recompressed).ok(), Some(restored));
        }
    }
});

//! Fuzz target: `PulseDecoder::feed`
//!
//! Interprets the input as a stream of `(level, elapsed)` samples and
//! asserts that the buffer never overruns, noise never advances it, and a
//! verdict always leaves it empty.
//!
//! cargo fuzz run fuzz_pulse_decoder

#![no_main]

use bellgate::app::decoder::{DecodeStep, PATTERN_SLOTS, PulseDecoder};
use bellgate::config::DoorConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let config = DoorConfig::default();
    let mut decoder = PulseDecoder::new(&config);

    for chunk in data.chunks_exact(5) {
        let active = chunk[0] & 1 == 1;
        let elapsed = u32::from_le_bytes([chunk[1], chunk[2], chunk[3], chunk[4]]);
        let before = decoder.len();

        match decoder.feed(active, elapsed) {
            DecodeStep::Waiting | DecodeStep::Noise => assert_eq!(decoder.len(), before),
            DecodeStep::Accepted => assert_eq!(decoder.len(), before + 1),
            DecodeStep::Complete(_) => assert!(decoder.is_empty()),
        }
        assert!(decoder.len() < PATTERN_SLOTS);
    }
});

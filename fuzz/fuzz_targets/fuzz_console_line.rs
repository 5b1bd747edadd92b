//! Fuzz target: `ConsoleInput::feed`
//!
//! Drives arbitrary received bytes through the console line reader and
//! parser, asserting that it never panics and never queues more commands
//! than there were line terminators.
//!
//! cargo fuzz run fuzz_console_line

#![no_main]

use bellgate::console::ConsoleInput;
use bellgate::events::CommandQueue;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let queue = CommandQueue::new();
    let mut console = ConsoleInput::new();

    let mut queued = 0usize;
    for &b in data {
        if console.feed(b, &queue).is_some() {
            queued += 1;
        }
        // Keep the queue from filling so every parsed line is counted.
        while queue.pop().is_some() {}
    }

    let terminators = data.iter().filter(|&&b| b == b'\r' || b == b'\n').count();
    assert!(queued <= terminators, "more commands than lines");

    // A clean line after arbitrary garbage must still parse.
    console.feed(b'\n', &queue);
    while queue.pop().is_some() {}
    console.feed_all(b"open\n", &queue);
    assert_eq!(queue.len(), 1);
});

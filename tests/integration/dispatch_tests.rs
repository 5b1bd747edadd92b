//! Dispatch loop scenarios: code entry, ring on timeout, manual open.

use bellgate::app::events::DoorEvent;
use bellgate::app::ports::{Output, OutputPort};

use crate::sim_board::{Rig, SimBoard};

/// Three 60 ms presses separated by 60 ms: the valid code.
fn valid_code(t0: u64) -> Vec<(u64, u64)> {
    SimBoard::press_train(t0, 60, 60, 3)
}

#[test]
fn boot_parks_outputs_and_announces() {
    let mut rig = Rig::new();
    rig.board.set(Output::OpenerRelay, true);
    rig.boot();

    assert_eq!(rig.sink.events, vec![DoorEvent::Boot]);
    assert_eq!(rig.sink.help_count, 1);
    assert_eq!(rig.board.now(), 500);
    for output in Output::ALL {
        assert!(!rig.board.is_on(output), "{:?} left on after boot", output);
    }
}

#[test]
fn idle_bell_never_rings() {
    let mut rig = Rig::new();
    rig.boot();
    rig.run_until(30_000);

    assert!(rig.events().is_empty());
    assert_eq!(rig.board.ring_on_ms, 0);
}

#[test]
fn valid_code_opens_door_without_ringing() {
    let mut rig = Rig::new();
    rig.boot();
    rig.board.bell = valid_code(1000);

    // Last press ends at 1300; the trailing release closes 50 ms later.
    rig.run_until(1349);
    assert!(rig.ctl.decoder_pending());
    assert!(rig.events().is_empty());

    rig.run_until(40_000);

    assert_eq!(rig.events(), &[DoorEvent::CodeGranted]);
    assert_eq!(rig.board.opener_on_ms, 3000);
    assert_eq!(rig.board.ring_on_ms, 0);
    assert!(!rig.ctl.decoder_pending());
    assert!(!rig.board.is_on(Output::OpenerRelay));
    assert!(!rig.board.is_on(Output::StatusLed));
}

#[test]
fn plain_press_rings_once_after_timeout() {
    let mut rig = Rig::new();
    rig.boot();
    rig.board.bell = vec![(1000, 1200)];

    rig.run_until(2000);
    assert!(rig.ctl.decoder_pending());
    assert!(rig.events().is_empty());

    rig.run_until(40_000);
    assert_eq!(rig.events(), &[DoorEvent::Ring]);
    assert_eq!(rig.board.ring_on_ms, 20_000);
    assert!(!rig.ctl.decoder_pending());
    assert_eq!(rig.board.opener_on_ms, 0);
}

#[test]
fn two_presses_fall_short_and_ring() {
    let mut rig = Rig::new();
    rig.boot();
    rig.board.bell = SimBoard::press_train(1000, 60, 60, 2);

    rig.run_until(2000);
    assert!(rig.ctl.decoder_pending());

    rig.run_until(40_000);
    assert_eq!(rig.events(), &[DoorEvent::Ring]);
    assert_eq!(rig.board.opener_on_ms, 0);
}

#[test]
fn fourth_press_inside_release_minimum_rejects() {
    let mut rig = Rig::new();
    rig.boot();
    // Third press ends at 1300; the next press follows 30 ms later.
    let mut bell = valid_code(1000);
    bell.push((1330, 1390));
    rig.board.bell = bell;

    rig.run_until(1331);
    assert_eq!(rig.events(), &[DoorEvent::CodeRejected]);

    rig.run_until(40_000);
    assert_eq!(rig.sink.count(DoorEvent::CodeGranted), 0);
    assert_eq!(rig.sink.count(DoorEvent::Ring), 1);
}

#[test]
fn held_press_rings_until_released() {
    let mut rig = Rig::new();
    rig.boot();
    rig.board.bell = vec![(1000, 7000)];
    rig.run_until(12_000);

    assert_eq!(rig.events(), &[DoorEvent::Ring]);
    assert!(rig.board.ring_on_ms > 0);
    assert!(rig.board.ring_on_ms < 20_000);
    assert!(!rig.ctl.decoder_pending());
    assert!(!rig.board.is_on(Output::RingRelay));
}

#[test]
fn rejected_code_rings_on_next_timeout() {
    let mut rig = Rig::new();
    rig.boot();
    // Second press is only 20 ms.
    rig.board.bell = vec![(1000, 1060), (1120, 1140), (1200, 1260)];

    rig.run_until(1400);
    assert_eq!(rig.events(), &[DoorEvent::CodeRejected]);
    assert!(rig.ctl.code_failed());
    assert!(!rig.ctl.decoder_pending());

    rig.run_until(30_000);
    assert_eq!(rig.events(), &[DoorEvent::CodeRejected, DoorEvent::Ring]);
    assert!(!rig.ctl.code_failed());
    assert_eq!(rig.board.opener_on_ms, 0);
}

#[test]
fn valid_code_after_rejection_clears_failure() {
    let mut rig = Rig::new();
    rig.boot();
    let mut bell = vec![(1000, 1060), (1120, 1140), (1200, 1260)];
    bell.extend(valid_code(2000));
    rig.board.bell = bell;
    rig.run_until(12_000);

    assert_eq!(rig.events(), &[DoorEvent::CodeRejected, DoorEvent::CodeGranted]);
    assert!(!rig.ctl.code_failed());
    assert_eq!(rig.sink.count(DoorEvent::Ring), 0);
}

#[test]
fn open_button_opens_immediately() {
    let mut rig = Rig::new();
    rig.boot();
    rig.board.open_button = vec![(2000, 2100)];
    rig.run_until(10_000);

    assert_eq!(rig.events(), &[DoorEvent::ManualOpen]);
    assert_eq!(rig.board.opener_on_ms, 3000);
}

#[test]
fn open_button_during_ring_opens_and_stops_ring() {
    let mut rig = Rig::new();
    rig.boot();
    rig.board.bell = vec![(1000, 1200)];
    rig.board.open_button = vec![(8000, 8100)];
    rig.run_until(20_000);

    assert_eq!(rig.events(), &[DoorEvent::Ring, DoorEvent::ManualOpen]);
    assert_eq!(rig.board.opener_on_ms, 3000);
    assert!(!rig.board.is_on(Output::RingRelay));
    assert_eq!(rig.sink.count(DoorEvent::Ring), 1);
}

#[test]
fn loop_counts_iterations() {
    let mut rig = Rig::new();
    rig.boot();
    rig.run_until(600);
    assert_eq!(rig.ctl.iterations(), 100);
}

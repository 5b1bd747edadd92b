//! Thursday mode through the dispatch loop.

use bellgate::app::events::DoorEvent;
use bellgate::app::ports::{Output, OutputPort};
use bellgate::config::DoorConfig;

use crate::sim_board::Rig;

#[test]
fn button_turns_mode_on_and_lights_indicator() {
    let mut rig = Rig::new();
    rig.boot();
    rig.board.thursday_button = vec![(1000, 1100)];
    rig.run_until(1200);

    assert_eq!(rig.events(), &[DoorEvent::ThursdayToggled(true)]);
    assert!(rig.ctl.thursday().enabled);
    assert!(rig.board.is_on(Output::ThursdayIndicator));
    assert!(rig.ctl.is_toggle_latched());
}

#[test]
fn second_press_in_same_window_is_ignored() {
    let mut rig = Rig::new();
    rig.boot();
    rig.board.thursday_button = vec![(1000, 1100), (1500, 1600), (6000, 6100)];

    rig.run_until(2000);
    assert_eq!(rig.events(), &[DoorEvent::ThursdayToggled(true)]);

    // The window closes 4 s after the first toggle; the latch clears there.
    rig.run_until(5900);
    assert!(!rig.ctl.is_toggle_latched());

    rig.run_until(6500);
    assert_eq!(
        rig.events(),
        &[DoorEvent::ThursdayToggled(true), DoorEvent::ThursdayToggled(false)]
    );
    assert!(!rig.board.is_on(Output::ThursdayIndicator));
}

#[test]
fn held_button_toggles_once() {
    let mut rig = Rig::new();
    rig.boot();
    // Held across two inactivity windows.
    rig.board.thursday_button = vec![(1000, 10_000)];
    rig.run_until(12_000);

    assert_eq!(rig.events(), &[DoorEvent::ThursdayToggled(true)]);
    assert!(rig.ctl.thursday().enabled);
}

#[test]
fn release_rearms_button_after_window() {
    let mut rig = Rig::new();
    rig.boot();
    rig.board.thursday_button = vec![(1000, 6000), (7000, 7100)];
    rig.run_until(8000);

    assert_eq!(
        rig.events(),
        &[DoorEvent::ThursdayToggled(true), DoorEvent::ThursdayToggled(false)]
    );
}

#[test]
fn bell_auto_opens_without_decoding() {
    let mut rig = Rig::new();
    rig.boot();
    rig.board.thursday_button = vec![(1000, 1100)];
    rig.board.bell = vec![(2000, 2050)];
    rig.run_until(8000);

    assert_eq!(
        rig.events(),
        &[DoorEvent::ThursdayToggled(true), DoorEvent::ThursdayAutoOpen]
    );
    assert_eq!(rig.board.opener_on_ms, 3000);
    assert!(!rig.ctl.decoder_pending());
    assert_eq!(rig.sink.count(DoorEvent::CodeGranted), 0);
}

#[test]
fn timeout_ring_is_muted() {
    let mut rig = Rig::new();
    rig.boot();
    // A plain press leaves a partial pattern, then the mode is switched on.
    rig.board.bell = vec![(1000, 1200)];
    rig.board.thursday_button = vec![(2000, 2100)];

    rig.run_until(2500);
    assert!(rig.ctl.decoder_pending());

    rig.run_until(10_000);
    assert_eq!(rig.events(), &[DoorEvent::ThursdayToggled(true)]);
    assert_eq!(rig.board.ring_on_ms, 0);
    assert!(!rig.ctl.decoder_pending());
}

#[test]
fn mode_switches_itself_off_at_ceiling() {
    let config = DoorConfig {
        thursday_timeout_min: 1,
        ..DoorConfig::default()
    };
    let mut rig = Rig::with_config(config);
    rig.boot();
    rig.board.thursday_button = vec![(1000, 1100)];

    rig.run_until(50_000);
    assert!(rig.ctl.thursday().enabled);
    assert!(rig.ctl.thursday().elapsed_secs > 0);

    rig.run_until(70_000);
    assert_eq!(
        rig.events(),
        &[
            DoorEvent::ThursdayToggled(true),
            DoorEvent::ThursdayTimeout,
            DoorEvent::ThursdayToggled(false),
        ]
    );
    assert!(!rig.ctl.thursday().enabled);
    assert_eq!(rig.ctl.thursday().elapsed_secs, 0);
    assert!(!rig.board.is_on(Output::ThursdayIndicator));
}

#[test]
fn elapsed_time_accrues_only_while_enabled() {
    let mut rig = Rig::new();
    rig.boot();
    rig.run_until(30_000);
    assert_eq!(rig.ctl.thursday().elapsed_secs, 0);

    rig.board.thursday_button = vec![(30_000, 30_100)];
    rig.run_until(39_000);
    assert_eq!(rig.ctl.thursday().elapsed_secs, 8);
}

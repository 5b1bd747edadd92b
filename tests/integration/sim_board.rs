//! Simulated board for integration tests.
//!
//! Time is a shared millisecond counter: every `delay_ms` on the board
//! advances it, and the clock reads ticks from it.  Inputs follow scripted
//! `[start, end)` intervals, so a test describes a scenario as "the bell is
//! held from 1000 ms to 1060 ms" and lets the real dispatch loop run.

use std::cell::Cell;
use std::rc::Rc;

use bellgate::adapters::clock::us_to_ticks;
use bellgate::app::events::DoorEvent;
use bellgate::app::ports::{ClockPort, DelayPort, EventSink, Input, LinePort, Output, OutputPort, Tick};
use bellgate::app::service::DoorController;
use bellgate::config::DoorConfig;

pub type Intervals = Vec<(u64, u64)>;

fn within(intervals: &[(u64, u64)], t: u64) -> bool {
    intervals.iter().any(|&(start, end)| start <= t && t < end)
}

// ── SimBoard ──────────────────────────────────────────────────

pub struct SimBoard {
    now_ms: Rc<Cell<u64>>,
    pub bell: Intervals,
    pub open_button: Intervals,
    pub thursday_button: Intervals,
    outputs: [bool; Output::COUNT],
    /// Total simulated ms with the opener relay energised.
    pub opener_on_ms: u64,
    /// Total simulated ms with the ring relay energised.
    pub ring_on_ms: u64,
}

#[allow(dead_code)]
impl SimBoard {
    pub fn new(now_ms: Rc<Cell<u64>>) -> Self {
        Self {
            now_ms,
            bell: Vec::new(),
            open_button: Vec::new(),
            thursday_button: Vec::new(),
            outputs: [false; Output::COUNT],
            opener_on_ms: 0,
            ring_on_ms: 0,
        }
    }

    pub fn now(&self) -> u64 {
        self.now_ms.get()
    }

    /// A train of presses starting at `t0`, each `press_ms` long and
    /// separated by `gap_ms` of release.
    pub fn press_train(t0: u64, press_ms: u64, gap_ms: u64, count: usize) -> Intervals {
        (0..count as u64)
            .map(|i| {
                let start = t0 + i * (press_ms + gap_ms);
                (start, start + press_ms)
            })
            .collect()
    }
}

impl LinePort for SimBoard {
    fn is_active(&mut self, input: Input) -> bool {
        let t = self.now();
        match input {
            Input::Doorbell => within(&self.bell, t),
            Input::OpenButton => within(&self.open_button, t),
            Input::ThursdayButton => within(&self.thursday_button, t),
        }
    }
}

impl OutputPort for SimBoard {
    fn set(&mut self, output: Output, on: bool) {
        self.outputs[output as usize] = on;
    }

    fn is_on(&self, output: Output) -> bool {
        self.outputs[output as usize]
    }
}

impl DelayPort for SimBoard {
    fn delay_ms(&mut self, ms: u32) {
        let ms = u64::from(ms);
        if self.outputs[Output::OpenerRelay as usize] {
            self.opener_on_ms += ms;
        }
        if self.outputs[Output::RingRelay as usize] {
            self.ring_on_ms += ms;
        }
        self.now_ms.set(self.now_ms.get() + ms);
    }
}

// ── SimClock ──────────────────────────────────────────────────

pub struct SimClock {
    now_ms: Rc<Cell<u64>>,
    reset_ms: u64,
    tick_hz: u32,
}

impl SimClock {
    pub fn new(now_ms: Rc<Cell<u64>>, tick_hz: u32) -> Self {
        Self {
            now_ms,
            reset_ms: 0,
            tick_hz,
        }
    }
}

impl ClockPort for SimClock {
    fn elapsed(&self) -> Tick {
        us_to_ticks((self.now_ms.get() - self.reset_ms) * 1000, self.tick_hz)
    }

    fn reset(&mut self) {
        self.reset_ms = self.now_ms.get();
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<DoorEvent>,
    pub help_count: u32,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn count(&self, event: DoorEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &DoorEvent) {
        self.events.push(*event);
    }

    fn help(&mut self) {
        self.help_count += 1;
    }
}

// ── Rig ───────────────────────────────────────────────────────

/// Controller plus its simulated surroundings, booted and ready to poll.
pub struct Rig {
    pub ctl: DoorController,
    pub board: SimBoard,
    pub clock: SimClock,
    pub sink: RecordingSink,
}

#[allow(dead_code)]
impl Rig {
    pub fn new() -> Self {
        Self::with_config(DoorConfig::default())
    }

    pub fn with_config(config: DoorConfig) -> Self {
        let now = Rc::new(Cell::new(0));
        let board = SimBoard::new(Rc::clone(&now));
        let clock = SimClock::new(now, config.tick_hz);
        Self {
            ctl: DoorController::new(config),
            board,
            clock,
            sink: RecordingSink::default(),
        }
    }

    /// Run the boot sequence (settle delay, outputs off, banner, BOOT).
    pub fn boot(&mut self) {
        self.ctl.boot(&mut self.board, &mut self.clock, &mut self.sink);
    }

    /// Poll until simulated time reaches `t_ms`.
    pub fn run_until(&mut self, t_ms: u64) {
        while self.board.now() < t_ms {
            self.ctl.poll(&mut self.board, &mut self.clock, &mut self.sink);
        }
    }

    /// Events emitted after boot.
    pub fn events(&self) -> &[DoorEvent] {
        let skip = usize::from(self.sink.events.first() == Some(&DoorEvent::Boot));
        &self.sink.events[skip..]
    }
}

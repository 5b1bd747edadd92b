//! Door controller: the dispatch loop.
//!
//! [`DoorController`] owns the decoder, Thursday mode and the loop's
//! latches.  It exposes a hardware-agnostic API: every sample, relay and
//! notification flows through port traits injected at call sites, so the
//! whole loop runs against simulated boards in tests.
//!
//! ```text
//!  LinePort ──▶ ┌───────────────────────────┐ ──▶ EventSink
//!  ClockPort ──▶│      DoorController       │
//!               │ Decoder · Thursday · Seq  │
//! OutputPort ◀──│                           │◀── CommandQueue
//!               └───────────────────────────┘
//! ```
//!
//! One clock serves both as the decoder's stopwatch and as the inactivity
//! timer.  It is reset whenever a pulse is accepted, an action completes,
//! Thursday mode is toggled from the button, or the inactivity window
//! expires.

use log::{debug, info};

use crate::config::DoorConfig;
use crate::events::CommandQueue;

use super::commands::DoorCommand;
use super::decoder::{DecodeStep, PulseDecoder, Verdict};
use super::events::DoorEvent;
use super::ports::{ClockPort, DelayPort, EventSink, Input, LinePort, OutputPort};
use super::sequencer;
use super::thursday::{ThursdayMode, ThursdayState};

// ───────────────────────────────────────────────────────────────
// DoorController
// ───────────────────────────────────────────────────────────────

/// The single owner of all door state for the device's uptime.
pub struct DoorController {
    config: DoorConfig,
    decoder: PulseDecoder,
    thursday: ThursdayMode,
    /// Set by a Thursday button press; cleared by the next timeout.
    toggle_latched: bool,
    /// Thursday button level seen by the previous poll.
    thursday_held: bool,
    /// Last completed pattern was rejected; the next timeout rings.
    code_failed: bool,
    iterations: u64,
}

impl DoorController {
    pub fn new(config: DoorConfig) -> Self {
        let decoder = PulseDecoder::new(&config);
        let thursday = ThursdayMode::new(&config);
        Self {
            config,
            decoder,
            thursday,
            toggle_latched: false,
            thursday_held: false,
            code_failed: false,
            iterations: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Settle, park every output, print the banner and announce the boot.
    pub fn boot(
        &mut self,
        hw: &mut (impl OutputPort + DelayPort),
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) {
        hw.delay_ms(self.config.boot_settle_ms);
        hw.all_off();
        sink.help();
        sink.emit(&DoorEvent::Boot);
        clock.reset();
        info!("DoorController booted");
    }

    /// Boot, then poll forever.
    pub fn run(
        &mut self,
        hw: &mut (impl LinePort + OutputPort + DelayPort),
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
        commands: &CommandQueue,
    ) -> ! {
        self.boot(hw, clock, sink);
        loop {
            self.drain_commands(commands, hw, clock, sink);
            self.poll(hw, clock, sink);
        }
    }

    // ── Per-iteration dispatch ────────────────────────────────

    /// Run one loop iteration: buttons → timeout → Thursday/decoder → delay.
    pub fn poll(
        &mut self,
        hw: &mut (impl LinePort + OutputPort + DelayPort),
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) {
        self.iterations = self.iterations.wrapping_add(1);

        // 1. Manual open, regardless of decoder state.
        if hw.is_active(Input::OpenButton) {
            sequencer::manual_open(hw, sink, &self.config);
            clock.reset();
        }

        // 2. Thursday button press edge, one toggle per inactivity window.
        let thursday_down = hw.is_active(Input::ThursdayButton);
        let pressed = thursday_down && !self.thursday_held;
        self.thursday_held = thursday_down;
        if pressed && !self.toggle_latched {
            self.thursday.toggle(hw, sink);
            self.toggle_latched = true;
            clock.reset();
        }

        // 3. Inactivity timeout ends the attempt; 4. otherwise sample the bell.
        if clock.elapsed() > self.config.timeout_ticks() {
            self.on_timeout(hw, clock, sink);
        } else {
            self.sample_doorbell(hw, clock, sink);
        }

        hw.delay_ms(self.config.poll_interval_ms);
    }

    /// Execute every queued console command, in arrival order.
    pub fn drain_commands(
        &mut self,
        commands: &CommandQueue,
        hw: &mut (impl LinePort + OutputPort + DelayPort),
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) {
        while let Some(cmd) = commands.pop() {
            self.handle_command(cmd, hw, clock, sink);
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command through the same paths as the buttons.
    pub fn handle_command(
        &mut self,
        cmd: DoorCommand,
        hw: &mut (impl OutputPort + DelayPort),
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) {
        debug!("command: {:?}", cmd);
        match cmd {
            DoorCommand::Open => {
                sequencer::manual_open(hw, sink, &self.config);
                clock.reset();
            }
            DoorCommand::Help => sink.help(),
            DoorCommand::SetThursday(on) => self.thursday.set_mode(on, hw, sink),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn thursday(&self) -> ThursdayState {
        self.thursday.state()
    }

    /// A partial pattern is buffered.
    pub fn decoder_pending(&self) -> bool {
        self.decoder.is_pending()
    }

    pub fn is_toggle_latched(&self) -> bool {
        self.toggle_latched
    }

    pub fn code_failed(&self) -> bool {
        self.code_failed
    }

    /// Loop iterations since construction.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn config(&self) -> &DoorConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn on_timeout(
        &mut self,
        hw: &mut (impl LinePort + OutputPort + DelayPort),
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) {
        if self.decoder.is_pending() || self.code_failed {
            if self.thursday.is_enabled() {
                debug!("timeout: ring muted by Thursday mode");
            } else {
                sequencer::ring(hw, sink, &self.config);
            }
        }
        self.decoder.clear();
        self.code_failed = false;
        self.toggle_latched = false;
        clock.reset();

        if self.thursday.advance(self.config.inactivity_timeout_secs) {
            sink.emit(&DoorEvent::ThursdayTimeout);
            self.thursday.set_mode(false, hw, sink);
        }
    }

    fn sample_doorbell(
        &mut self,
        hw: &mut (impl LinePort + OutputPort + DelayPort),
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) {
        let active = hw.is_active(Input::Doorbell);

        if self.thursday.is_enabled() && active {
            sink.emit(&DoorEvent::ThursdayAutoOpen);
            hw.delay_ms(self.config.thursday_open_delay_ms);
            sequencer::open(hw, &self.config);
            clock.reset();
            return;
        }

        let step = self.decoder.feed(active, clock.elapsed());
        if step.resets_clock() {
            clock.reset();
        }
        match step {
            DecodeStep::Complete(Verdict::Granted) => {
                self.code_failed = false;
                sequencer::granted(hw, sink, &self.config);
                clock.reset();
            }
            DecodeStep::Complete(Verdict::Rejected) => {
                self.code_failed = true;
                sink.emit(&DoorEvent::CodeRejected);
            }
            DecodeStep::Waiting | DecodeStep::Noise | DecodeStep::Accepted => {}
        }
    }
}

//! Bellgate Firmware: Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  GpioBoard                MonotonicClock   LineNotifier        │
//! │  (Line+Output+Delay)      (ClockPort)      + LogEventSink      │
//! │                                            (EventSink)         │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │            DoorController (pure logic)                 │    │
//! │  │  PulseDecoder · Sequencer · ThursdayMode               │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Console thread ──► COMMANDS queue ──► main loop               │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use std::io::{ErrorKind, Read};
use std::time::Duration;

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, Input, Output, PinDriver, Pull};
use log::{info, warn};

use bellgate::adapters::clock::MonotonicClock;
use bellgate::adapters::gpio_board::{GpioBoard, Polarity};
use bellgate::adapters::log_sink::LogEventSink;
use bellgate::app::service::DoorController;
use bellgate::config::DoorConfig;
use bellgate::console::notify::LineNotifier;
use bellgate::console::ConsoleInput;
use bellgate::drivers::task_pin::{self, Core};
use bellgate::drivers::watchdog::Watchdog;
use bellgate::error::{self, Error};
use bellgate::events::COMMANDS;
use bellgate::pins;

/// Console receive thread parameters.
const CONSOLE_PRIORITY: u8 = 4;
const CONSOLE_STACK_KB: usize = 4;
/// Back-off when the console has no pending bytes.
const CONSOLE_IDLE: Duration = Duration::from_millis(10);

// ── Pin bring-up ──────────────────────────────────────────────

fn input_pin(gpio: i32) -> Result<PinDriver<'static, AnyIOPin, Input>, Error> {
    // SAFETY: every GPIO number in `pins` is claimed exactly once, here.
    let pin = unsafe { AnyIOPin::new(gpio) };
    let mut driver = PinDriver::input(pin).map_err(|_| Error::Gpio(gpio))?;
    driver.set_pull(Pull::Up).map_err(|_| Error::Gpio(gpio))?;
    Ok(driver)
}

fn output_pin(gpio: i32) -> Result<PinDriver<'static, AnyIOPin, Output>, Error> {
    // SAFETY: see `input_pin`.
    let pin = unsafe { AnyIOPin::new(gpio) };
    PinDriver::output(pin).map_err(|_| Error::Gpio(gpio))
}

// ── Console receive thread ────────────────────────────────────

fn console_rx() {
    let mut console = ConsoleInput::new();
    let mut stdin = std::io::stdin();
    let mut buf = [0u8; 32];
    loop {
        match stdin.read(&mut buf) {
            Ok(0) => std::thread::sleep(CONSOLE_IDLE),
            Ok(n) => console.feed_all(&buf[..n], &COMMANDS),
            Err(e) if e.kind() == ErrorKind::WouldBlock || e.kind() == ErrorKind::Interrupted => {
                std::thread::sleep(CONSOLE_IDLE);
            }
            Err(e) => {
                warn!("console: read failed: {}", e);
                std::thread::sleep(CONSOLE_IDLE);
            }
        }
    }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Bellgate v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = DoorConfig::default();
    error::check_config(&config)?;
    info!(
        "Config: tick={}Hz timeout={}s pulse>{}ms press>={}ms release>={}ms",
        config.tick_hz,
        config.inactivity_timeout_secs,
        config.min_pulse_width_ms,
        config.pressed_min_ms,
        config.released_min_ms
    );

    // ── 3. Pins ───────────────────────────────────────────────
    let [bell, open, thursday] = pins::INPUT_GPIOS;
    let inputs = [input_pin(bell)?, input_pin(open)?, input_pin(thursday)?];
    let [opener, ring, led, thursday_led] = pins::OUTPUT_GPIOS;
    let outputs = [
        output_pin(opener)?,
        output_pin(ring)?,
        output_pin(led)?,
        output_pin(thursday_led)?,
    ];

    // ── 4. Adapters ───────────────────────────────────────────
    let mut board = GpioBoard::new(inputs, outputs, Polarity::ActiveLow, FreeRtos, Watchdog::new());
    let mut clock = MonotonicClock::new(config.tick_hz);
    let mut sink = (LineNotifier::new(std::io::stdout()), LogEventSink::new());

    // ── 5. Console thread ─────────────────────────────────────
    task_pin::spawn_on_core(
        Core::Pro,
        CONSOLE_PRIORITY,
        CONSOLE_STACK_KB,
        "console\0",
        console_rx,
    )
    .map_err(|_| Error::Init("console thread"))?;

    // ── 6. Dispatch loop (never returns) ──────────────────────
    info!("Entering dispatch loop (console {} baud)", pins::CONSOLE_BAUD);
    DoorController::new(config).run(&mut board, &mut clock, &mut sink, &COMMANDS)
}

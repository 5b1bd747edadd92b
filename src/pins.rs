//! GPIO assignments for the door controller board.
//!
//! Single source of truth: the firmware entry point builds its pin
//! drivers from these numbers.  Inputs are active-low with the internal
//! pull-up enabled; outputs drive relay transistors and LEDs active-high.

// ---------------------------------------------------------------------------
// Inputs (order matches `Input`)
// ---------------------------------------------------------------------------

/// Street bell signal, via optocoupler.  LOW while the bell is pressed.
pub const DOORBELL_GPIO: i32 = 4;
/// Local "open door" push-button.
pub const OPEN_BUTTON_GPIO: i32 = 5;
/// Local Thursday mode toggle push-button.
pub const THURSDAY_BUTTON_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// Outputs (order matches `Output`)
// ---------------------------------------------------------------------------

/// Door opener relay.
pub const OPENER_RELAY_GPIO: i32 = 10;
/// Chime relay.
pub const RING_RELAY_GPIO: i32 = 11;
/// Status LED.
pub const STATUS_LED_GPIO: i32 = 12;
/// Thursday mode indicator LED.
pub const THURSDAY_LED_GPIO: i32 = 13;

pub const INPUT_GPIOS: [i32; 3] = [DOORBELL_GPIO, OPEN_BUTTON_GPIO, THURSDAY_BUTTON_GPIO];

pub const OUTPUT_GPIOS: [i32; 4] = [
    OPENER_RELAY_GPIO,
    RING_RELAY_GPIO,
    STATUS_LED_GPIO,
    THURSDAY_LED_GPIO,
];

// ---------------------------------------------------------------------------
// Console UART
// ---------------------------------------------------------------------------

/// Console baud rate.
pub const CONSOLE_BAUD: u32 = 115_200;

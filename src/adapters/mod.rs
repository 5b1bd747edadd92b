//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter      | Implements                        | Connects to              |
//! |--------------|-----------------------------------|--------------------------|
//! | `clock`      | ClockPort                         | esp_timer / Instant      |
//! | `gpio_board` | LinePort, OutputPort, DelayPort   | embedded-hal pins, delay |
//! | `log_sink`   | EventSink                         | `log` facade             |
//!
//! The console notifier ([`crate::console::LineNotifier`]) is the other
//! [`EventSink`](crate::app::ports::EventSink).

pub mod clock;
pub mod gpio_board;
pub mod log_sink;

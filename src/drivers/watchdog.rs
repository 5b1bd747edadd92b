//! Task watchdog (TWDT) for the dispatch loop.
//!
//! The loop spends most of its time inside blocking door actions, so the
//! watchdog is fed from [`GpioBoard`](crate::adapters::gpio_board::GpioBoard)'s
//! delay rather than once per iteration.  Any stall longer than
//! [`TIMEOUT_MS`] outside a delay resets the device.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

/// Reset the device if the loop task is not fed within this window.
pub const TIMEOUT_MS: u32 = 5_000;

pub struct Watchdog {
    #[cfg(target_os = "espidf")]
    subscribed: bool,
}

impl Default for Watchdog {
    fn default() -> Self {
        Self::new()
    }
}

impl Watchdog {
    /// Subscribe the calling task to the TWDT.
    pub fn new() -> Self {
        #[cfg(target_os = "espidf")]
        {
            // SAFETY: plain FFI calls configuring the TWDT for the calling
            // task; no pointers outlive the call.
            unsafe {
                let cfg = esp_task_wdt_config_t {
                    timeout_ms: TIMEOUT_MS,
                    idle_core_mask: 0,
                    trigger_panic: true,
                };
                let ret = esp_task_wdt_reconfigure(&cfg);
                if ret != ESP_OK {
                    log::warn!("watchdog: reconfigure returned {} (already configured?)", ret);
                }

                let subscribed = esp_task_wdt_add(core::ptr::null_mut()) == ESP_OK;
                if subscribed {
                    log::info!("watchdog: loop task subscribed ({} ms)", TIMEOUT_MS);
                } else {
                    log::warn!("watchdog: subscribe failed, running unguarded");
                }
                Self { subscribed }
            }
        }

        #[cfg(not(target_os = "espidf"))]
        {
            log::debug!("watchdog(sim): no-op");
            Self {}
        }
    }

    pub fn feed(&self) {
        #[cfg(target_os = "espidf")]
        {
            if self.subscribed {
                // SAFETY: resets the TWDT entry of the subscribed calling task.
                unsafe {
                    esp_task_wdt_reset();
                }
            }
        }
    }
}

//! Piezo buzzer driven by plain on/off pulses on a digital output.
//!
//! The pin and the sleep are injected as `embedded-hal` capabilities, so the
//! same sequence runs on a GPIO, a console pin on the desktop, or a recording
//! fake in tests.

use embedded_hal::{delay::DelayNs, digital::OutputPin};

/// Timing of a beep sequence. Each pulse is preceded by a pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BeepPattern {
    pub pulse_ms: u32,
    pub pause_ms: u32,
    pub count: u32,
}

impl BeepPattern {
    pub const fn new(pulse_ms: u32, pause_ms: u32, count: u32) -> Self {
        Self {
            pulse_ms,
            pause_ms,
            count,
        }
    }

    /// How long [`beep`] blocks for this pattern.
    pub const fn total_ms(&self) -> u64 {
        self.count as u64 * (self.pause_ms as u64 + self.pulse_ms as u64)
    }
}

/// Plays `pattern` on `pin`, blocking until the last pulse has ended.
///
/// `pin` must already be configured as an output. A pin error aborts the
/// sequence and is returned as is.
pub fn beep<P, D>(pin: &mut P, delay: &mut D, pattern: BeepPattern) -> Result<(), P::Error>
where
    P: OutputPin,
    D: DelayNs,
{
    for _ in 0..pattern.count {
        delay.delay_ms(pattern.pause_ms);
        pin.set_high()?;
        delay.delay_ms(pattern.pulse_ms);
        pin.set_low()?;
    }
    Ok(())
}

/// Owns the buzzer pin together with the delay used to time it.
pub struct Buzzer<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> Buzzer<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    pub fn beep(&mut self, pattern: BeepPattern) -> Result<(), P::Error> {
        log::debug!(
            "beep x{} ({} ms on, {} ms pause)",
            pattern.count,
            pattern.pulse_ms,
            pattern.pause_ms
        );
        beep(&mut self.pin, &mut self.delay, pattern)
    }

    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

//! Single-screen dashboard: clock, WiFi state, temperature and CO2 with the
//! recent CO2 range.

use core::fmt::Write as _;

use embedded_graphics::{
    Drawable as _,
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, Point},
    text::{Baseline, Text},
};

use crate::{
    consts,
    gfx::IconSprite,
    icons,
    stats,
    time::ClockTime,
    time_sync::{TimeSource, is_time_synced},
};

/// One sensor sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    pub temperature_c: i32,
    pub co2_ppm: i32,
}

// Longest text line: "lo -2147483648 hi -2147483648" is 29 bytes.
const LINE_LEN: usize = 32;

const CO2_ICON_X: i32 = 72;

/// Fixed-capacity sample ring, oldest first.
#[derive(Debug, Default)]
struct History {
    samples: heapless::Deque<i32, { consts::HISTORY_LEN }>,
}

impl History {
    fn push(&mut self, value: i32) {
        if self.samples.is_full() {
            self.samples.pop_front();
        }
        // room was made above
        let _ = self.samples.push_back(value);
    }

    fn latest(&self) -> Option<i32> {
        self.samples.back().copied()
    }

    fn range(&self) -> Option<(i32, i32)> {
        let (front, back) = self.samples.as_slices();
        let mut range: Option<(i32, i32)> = None;
        for part in [front, back] {
            if part.is_empty() {
                continue;
            }
            let (low, high) = (stats::minimum(part), stats::maximum(part));
            range = Some(match range {
                Some((l, h)) => (l.min(low), h.max(high)),
                None => (low, high),
            });
        }
        range
    }
}

fn range_line(low: i32, high: i32) -> heapless::String<LINE_LEN> {
    let mut line = heapless::String::new();
    // fits any pair of i32, see LINE_LEN
    let _ = write!(line, "lo {} hi {}", low, high);
    line
}

pub struct Dashboard {
    temperature: History,
    co2: History,
    clock: Option<ClockTime>,
    wifi_connected: bool,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            temperature: History::default(),
            co2: History::default(),
            clock: None,
            wifi_connected: false,
        }
    }

    /// Stores `reading`, dropping the oldest one once the history is full.
    ///
    /// Returns `true` when this reading trips the CO2 alarm, i.e. the alarm
    /// was clear before it.
    pub fn record(&mut self, reading: Reading) -> bool {
        let was_alarm = self.co2_alarm();
        self.temperature.push(reading.temperature_c);
        self.co2.push(reading.co2_ppm);

        let tripped = !was_alarm && self.co2_alarm();
        if tripped {
            log::warn!("CO2 at {} ppm", reading.co2_ppm);
        }
        tripped
    }

    pub fn update_clock<T: TimeSource + ?Sized>(&mut self, source: &T) {
        // one read, so the sync check and the shown time agree
        let now = source.epoch_seconds();
        if !is_time_synced(&now) {
            self.clock = None;
            return;
        }
        if self.clock.is_none() {
            log::info!("clock synced");
        }
        self.clock = Some(ClockTime::from_epoch(now));
    }

    pub fn clock(&self) -> Option<ClockTime> {
        self.clock
    }

    pub fn set_wifi_connected(&mut self, connected: bool) {
        self.wifi_connected = connected;
    }

    pub fn latest(&self) -> Option<Reading> {
        Some(Reading {
            temperature_c: self.temperature.latest()?,
            co2_ppm: self.co2.latest()?,
        })
    }

    pub fn co2_range(&self) -> Option<(i32, i32)> {
        self.co2.range()
    }

    pub fn temperature_range(&self) -> Option<(i32, i32)> {
        self.temperature.range()
    }

    pub fn co2_alarm(&self) -> bool {
        self.co2
            .latest()
            .is_some_and(|ppm| ppm >= consts::CO2_ALARM_PPM)
    }

    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = consts::ColorType>,
    {
        target.clear(BinaryColor::Off)?;

        let small = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let large = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
        let mut line: heapless::String<LINE_LEN> = heapless::String::new();

        // status row
        if self.wifi_connected {
            IconSprite::new(&icons::WIFI, Point::zero(), BinaryColor::On).draw(target)?;
        }
        match self.clock {
            Some(clock) => {
                let _ = write!(line, "{}", clock);
            }
            None => {
                let _ = line.push_str("--:--");
            }
        }
        Text::with_baseline(&line, Point::new(consts::WIDTH as i32 - 30, 0), small, Baseline::Top)
            .draw(target)?;

        let latest = self.latest();

        // temperature
        let too_hot = latest.is_some_and(|r| r.temperature_c >= consts::HEAT_WARN_C);
        let thermo_icon = if too_hot { &icons::HEAT } else { &icons::THERMOMETER };
        IconSprite::new(thermo_icon, Point::new(0, 12), BinaryColor::On).draw(target)?;

        line.clear();
        match latest {
            Some(r) => {
                let _ = write!(line, "{}", r.temperature_c);
            }
            None => {
                let _ = line.push_str("--");
            }
        }
        let end = Text::with_baseline(&line, Point::new(33, 18), large, Baseline::Top).draw(target)?;
        // long readings overlap the digits rather than the CO2 icon
        let celsius_x = (end.x + 1).min(CO2_ICON_X - icons::CELSIUS.width() as i32);
        IconSprite::new(&icons::CELSIUS, Point::new(celsius_x, 16), BinaryColor::On).draw(target)?;

        // co2
        IconSprite::new(&icons::CO2, Point::new(CO2_ICON_X, 12), BinaryColor::On).draw(target)?;
        line.clear();
        match latest {
            Some(r) => {
                let _ = write!(line, "{}", r.co2_ppm);
            }
            None => {
                let _ = line.push_str("--");
            }
        }
        Text::with_baseline(&line, Point::new(104, 18), small, Baseline::Top).draw(target)?;
        Text::with_baseline("ppm", Point::new(104, 30), small, Baseline::Top).draw(target)?;

        if let Some((low, high)) = self.co2_range() {
            let line = range_line(low, high);
            Text::with_baseline(&line, Point::new(0, 54), small, Baseline::Top).draw(target)?;
        }

        Ok(())
    }
}

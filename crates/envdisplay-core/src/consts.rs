use embedded_graphics::pixelcolor::BinaryColor;

use crate::buzzer::BeepPattern;

pub type ColorType = BinaryColor;

// 0.96" SSD1306-class panel
pub const WIDTH: u32 = 128;
pub const HEIGHT: u32 = 64;

/// Number of readings the dashboard keeps for its min/max line.
pub const HISTORY_LEN: usize = 32;

pub const CO2_ALARM_PPM: i32 = 1400;
pub const HEAT_WARN_C: i32 = 28;

/// Three short chirps, played once when the CO2 alarm trips.
pub const ALARM_BEEP: BeepPattern = BeepPattern::new(80, 120, 3);

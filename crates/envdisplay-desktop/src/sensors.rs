use envdisplay_core::dashboard::Reading;

/// Synthetic sensor readings for the simulator.
///
/// Temperature walks a slow triangle between 21 and 29 C and CO2 ramps
/// between 500 and 1599 ppm, so a short run exercises both the heat icon and
/// the CO2 alarm. The sequence is the same on every run.
#[derive(Debug, Default)]
pub struct SensorFeed {
    tick: u32,
}

impl SensorFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_reading(&mut self) -> Reading {
        let phase = (self.tick % 16) as i32;
        let offset = if phase < 8 { phase } else { 16 - phase };
        let reading = Reading {
            temperature_c: 21 + offset,
            co2_ppm: 500 + (self.tick.wrapping_mul(53) % 1100) as i32,
        };
        self.tick = self.tick.wrapping_add(1);
        reading
    }
}

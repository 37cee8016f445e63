use anyhow::Context as _;
use embedded_graphics::prelude::Size;
use embedded_graphics_simulator::{
    BinaryColorTheme, OutputSettings, OutputSettingsBuilder, SimulatorDisplay,
};
use envdisplay_core::buzzer::Buzzer;
use envdisplay_core::consts;
use envdisplay_core::dashboard::Dashboard;

use crate::clock::SystemClock;
use crate::delay::StdDelay;
use crate::sensors::SensorFeed;

mod clock;
mod delay;
mod log_capture;
mod pins;
mod sensors;

#[cfg(not(feature = "window"))]
const DEFAULT_FRAMES: u32 = 24;
#[cfg(not(feature = "window"))]
const DEFAULT_OUTPUT: &str = "dashboard.png";

#[cfg(feature = "audio")]
type BuzzerPin = pins::TonePin;
#[cfg(not(feature = "audio"))]
type BuzzerPin = pins::ConsolePin;

#[cfg(feature = "audio")]
fn buzzer_pin() -> anyhow::Result<BuzzerPin> {
    pins::TonePin::new(2700).context("opening audio output")
}

#[cfg(not(feature = "audio"))]
fn buzzer_pin() -> anyhow::Result<BuzzerPin> {
    Ok(pins::ConsolePin::new("buzzer"))
}

struct Simulator {
    dashboard: Dashboard,
    feed: SensorFeed,
    buzzer: Buzzer<BuzzerPin, StdDelay>,
}

impl Simulator {
    fn new() -> anyhow::Result<Self> {
        let mut dashboard = Dashboard::new();
        dashboard.set_wifi_connected(true);

        Ok(Self {
            dashboard,
            feed: SensorFeed::new(),
            buzzer: Buzzer::new(buzzer_pin()?, StdDelay),
        })
    }

    /// One display refresh: clock, new reading, alarm beep.
    fn step(&mut self) -> anyhow::Result<()> {
        self.dashboard.update_clock(&SystemClock);

        let reading = self.feed.next_reading();
        log::debug!("{:?}", reading);
        if self.dashboard.record(reading) {
            self.buzzer.beep(consts::ALARM_BEEP)?;
        }
        Ok(())
    }
}

#[cfg(not(feature = "window"))]
fn frame_count() -> anyhow::Result<u32> {
    std::env::var("ENVDISPLAY_FRAMES")
        .ok()
        .map(|v| {
            v.parse::<u32>()
                .with_context(|| format!("ENVDISPLAY_FRAMES={v} is not a frame count"))
        })
        .transpose()
        .map(|frames| frames.unwrap_or(DEFAULT_FRAMES))
}

fn output_settings() -> OutputSettings {
    OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::OledBlue)
        .scale(2)
        .pixel_spacing(0)
        .build()
}

#[cfg(not(feature = "window"))]
fn present(
    sim: &mut Simulator,
    display: &mut SimulatorDisplay<consts::ColorType>,
) -> anyhow::Result<()> {
    use std::path::PathBuf;

    let output = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let frames = frame_count()?;
    for _ in 0..frames {
        sim.step()?;
    }
    sim.dashboard.draw(display)?;

    display
        .to_rgb_output_image(&output_settings())
        .save_png(&output)
        .with_context(|| format!("writing {}", output.display()))?;
    log::info!("{} frames, last one written to {}", frames, output.display());
    Ok(())
}

#[cfg(feature = "window")]
fn present(
    sim: &mut Simulator,
    display: &mut SimulatorDisplay<consts::ColorType>,
) -> anyhow::Result<()> {
    use embedded_graphics_simulator::{SimulatorEvent, Window};

    let mut window = Window::new("envdisplay", &output_settings());
    window.set_max_fps(2);

    'running: loop {
        sim.step()?;
        sim.dashboard.draw(display)?;
        window.update(display);

        for event in window.events() {
            if let SimulatorEvent::Quit = event {
                break 'running;
            }
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    log_capture::init(log::LevelFilter::Info);

    let mut display =
        SimulatorDisplay::<consts::ColorType>::new(Size::new(consts::WIDTH, consts::HEIGHT));
    let mut sim = Simulator::new()?;

    present(&mut sim, &mut display)
}

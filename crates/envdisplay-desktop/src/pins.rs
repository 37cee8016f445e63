//! Host stand-ins for the buzzer GPIO.

use std::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

/// Output pin that logs its level changes instead of driving hardware.
#[derive(Debug)]
pub struct ConsolePin {
    name: &'static str,
    high: bool,
    pulses: u32,
}

impl ConsolePin {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            high: false,
            pulses: 0,
        }
    }

    /// Number of low-to-high transitions seen so far.
    pub fn pulses(&self) -> u32 {
        self.pulses
    }
}

impl ErrorType for ConsolePin {
    type Error = Infallible;
}

impl OutputPin for ConsolePin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        if !self.high {
            self.pulses += 1;
            log::debug!("{} high", self.name);
        }
        self.high = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.high {
            log::debug!("{} low", self.name);
        }
        self.high = false;
        Ok(())
    }
}

impl StatefulOutputPin for ConsolePin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

#[cfg(feature = "audio")]
pub use tone::TonePin;

#[cfg(feature = "audio")]
mod tone {
    use std::convert::Infallible;
    use std::time::Duration;

    use embedded_hal::digital::{ErrorType, OutputPin};
    use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

    const SAMPLE_RATE: u32 = 48000;
    const AMPLITUDE: f32 = 0.15;

    /// Endless square wave; the sink is dropped to silence it.
    struct SquareWave {
        frequency: f32,
        current_sample: u64,
    }

    impl SquareWave {
        fn new(frequency: f32) -> Self {
            Self {
                frequency,
                current_sample: 0,
            }
        }
    }

    impl Iterator for SquareWave {
        type Item = f32;

        fn next(&mut self) -> Option<Self::Item> {
            let position = self.current_sample as f32 / SAMPLE_RATE as f32;
            let cycle_position = (position * self.frequency) % 1.0;
            self.current_sample += 1;

            if cycle_position < 0.5 {
                Some(AMPLITUDE)
            } else {
                Some(-AMPLITUDE)
            }
        }
    }

    impl Source for SquareWave {
        fn current_frame_len(&self) -> Option<usize> {
            None
        }

        fn channels(&self) -> u16 {
            1
        }

        fn sample_rate(&self) -> u32 {
            SAMPLE_RATE
        }

        fn total_duration(&self) -> Option<Duration> {
            None
        }
    }

    /// Output pin wired to the sound card: a tone plays while the pin is high,
    /// like a self-oscillating piezo on a GPIO.
    pub struct TonePin {
        frequency_hz: u32,
        _stream: OutputStream,
        handle: OutputStreamHandle,
        sink: Option<Sink>,
    }

    impl TonePin {
        pub fn new(frequency_hz: u32) -> anyhow::Result<Self> {
            let (stream, handle) = OutputStream::try_default()?;
            Ok(Self {
                frequency_hz,
                _stream: stream,
                handle,
                sink: None,
            })
        }
    }

    impl ErrorType for TonePin {
        type Error = Infallible;
    }

    impl OutputPin for TonePin {
        fn set_high(&mut self) -> Result<(), Self::Error> {
            if self.sink.is_some() {
                return Ok(());
            }
            match Sink::try_new(&self.handle) {
                Ok(sink) => {
                    sink.append(SquareWave::new(self.frequency_hz as f32));
                    self.sink = Some(sink);
                }
                // a silent buzzer is not worth stopping the simulator for
                Err(e) => log::warn!("buzzer tone unavailable: {}", e),
            }
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Self::Error> {
            if let Some(sink) = self.sink.take() {
                sink.stop();
            }
            Ok(())
        }
    }
}

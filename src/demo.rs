//! The scripted run the binary performs: attach the displays, report some weather, then detach the
//! displays one at a time

use super::*;

/// Reported one at a time (with a pause before each) after the configured sequence
const FINALE: [&str; 2] = ["rainy", "snowy"];

pub struct Demo<'a> {
    conf: &'a MasterConfig,
    station: SharedWeatherStation,
    displays: Vec<Arc<dyn Observer>>,
}

impl<'a> Demo<'a> {
    pub fn new(conf: &'a MasterConfig, output: &Output) -> Self {
        Self {
            conf,
            station: SharedWeatherStation::new(),
            displays: conf.displays.iter().map(|kind| kind.build(output)).collect(),
        }
    }

    /// Runs to completion, returning the (now empty) station. Stops at the first failed
    /// notification.
    pub fn run(self) -> NotifyResult<WeatherStation> {
        for display in &self.displays {
            self.station.add_observer(display.clone())?;
        }
        self.pause();
        self.list()?;
        self.pause();

        for round in 0..self.conf.repeat {
            debug!("weather round {} of {}", round + 1, self.conf.repeat);
            for weather in &self.conf.weather_sequence {
                self.station.set_weather(weather)?;
            }
        }
        for weather in &FINALE {
            self.pause();
            self.station.set_weather(weather)?;
        }
        self.pause();

        for (i, display) in self.displays.iter().enumerate() {
            self.station.remove_observer(display)?;
            if i + 1 < self.displays.len() {
                self.list()?;
            }
        }
        self.pause();
        self.list()?;
        self.station.into_inner()
    }

    fn pause(&self) {
        let delay = self.conf.step_delay;
        if delay > Duration::from_secs(0) {
            warn!("Waiting for {:?} before continuing", delay);
            std::thread::sleep(delay);
        }
    }

    fn list(&self) -> NotifyResult<()> {
        if self.conf.list_observers {
            self.station.list_observers()?;
        }
        Ok(())
    }
}

use super::*;

/// Configuration for the whole weather-station program
#[derive(Debug)]
pub struct MasterConfig {
    /// If to exit with success without running (for example, after showing --help)
    pub happy_exit: bool,
    /// How long the demo waits between steps
    pub step_delay: Duration,
    /// Weather the station reports, in order
    pub weather_sequence: Vec<String>,
    /// How many times to go through weather_sequence
    pub repeat: u32,
    /// Displays to attach, in the order they are added to the station
    pub displays: Vec<DisplayKind>,
    /// If the demo logs the observer list after adding and removing displays
    pub list_observers: bool,
    /// Used when RUST_LOG is not set
    pub log_level: LevelFilter,
}

impl Default for MasterConfig {
    /// NOTE: the true default configuration you get when you run weather-station is determined by
    /// config_entries(), this is just an empty struct
    fn default() -> Self {
        Self {
            happy_exit: false,
            step_delay: Duration::from_secs(0),
            weather_sequence: Vec::new(),
            repeat: 1,
            displays: Vec::new(),
            list_observers: false,
            log_level: LevelFilter::Info,
        }
    }
}

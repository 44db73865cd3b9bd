use super::*;
use std::marker::PhantomData;

/// Compile-time name of a kind of display
pub trait DisplayLabel: Send + Sync + 'static {
    /// Shown at the start of every line the display prints
    const LABEL: &'static str;
    /// How the display identifies itself in diagnostics
    const NAME: &'static str;
}

#[derive(Debug)]
pub struct Phone;

#[derive(Debug)]
pub struct Tv;

#[derive(Debug)]
pub struct Watch;

impl DisplayLabel for Phone {
    const LABEL: &'static str = "Phone";
    const NAME: &'static str = "Phone Display";
}

impl DisplayLabel for Tv {
    const LABEL: &'static str = "TV";
    const NAME: &'static str = "TV Display";
}

impl DisplayLabel for Watch {
    const LABEL: &'static str = "Watch";
    const NAME: &'static str = "Watch Display";
}

/// Shows the most recent weather it was given. The different displays only differ in label, so
/// they share this one implementation.
#[derive(derivative::Derivative)]
#[derivative(Debug(bound = ""))]
pub struct WeatherDisplay<L: DisplayLabel> {
    weather: Mutex<String>,
    #[derivative(Debug = "ignore")]
    output: Output,
    #[derivative(Debug = "ignore")]
    label: PhantomData<L>,
}

pub type PhoneDisplay = WeatherDisplay<Phone>;
pub type TvDisplay = WeatherDisplay<Tv>;
pub type WatchDisplay = WeatherDisplay<Watch>;

impl<L: DisplayLabel> WeatherDisplay<L> {
    pub fn new(output: &Output) -> Self {
        Self {
            weather: Mutex::new(String::new()),
            output: output.clone(),
            label: PhantomData,
        }
    }

    /// The last weather received, or empty if there has not been any
    pub fn weather(&self) -> String {
        self.lock_weather().clone()
    }

    /// Prints the current weather
    pub fn display(&self) {
        self.show(&self.lock_weather());
    }

    // Callers hold the weather lock, so the printed line is always the weather that was stored
    fn show(&self, weather: &str) {
        let line = format!("{} display weather updated: {}", L::LABEL, weather);
        self.output.write_line(&line);
    }

    // The lock only guards a String, so a panic while it was held can't leave it half-written
    fn lock_weather(&self) -> MutexGuard<String> {
        self.weather.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<L: DisplayLabel> Observer for WeatherDisplay<L> {
    fn update(&self, weather: &str) -> NotifyResult<()> {
        let mut current = self.lock_weather();
        *current = weather.to_string();
        self.show(&current);
        Ok(())
    }

    fn info(&self) -> ObserverInfo {
        ObserverInfo::new(L::NAME, &self.weather())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_no_weather() {
        let output = MockOutput::new();
        let display = PhoneDisplay::new(&output.get());
        assert_eq!(display.weather(), "");
        assert!(output.lines().is_empty());
    }

    #[test]
    fn update_stores_and_prints_weather() {
        let output = MockOutput::new();
        let display = PhoneDisplay::new(&output.get());
        display.update("sunny").expect("update failed");
        assert_eq!(display.weather(), "sunny");
        assert_eq!(
            output.lines(),
            vec!["Phone display weather updated: sunny".to_string()]
        );
    }

    #[test]
    fn each_display_uses_its_own_label() {
        let output = MockOutput::new();
        TvDisplay::new(&output.get())
            .update("rainy")
            .expect("update failed");
        WatchDisplay::new(&output.get())
            .update("snowy")
            .expect("update failed");
        assert_eq!(
            output.lines(),
            vec![
                "TV display weather updated: rainy".to_string(),
                "Watch display weather updated: snowy".to_string(),
            ]
        );
    }

    #[test]
    fn empty_weather_is_fine() {
        let output = MockOutput::new();
        let display = WatchDisplay::new(&output.get());
        display.update("sunny").expect("update failed");
        display.update("").expect("update failed");
        assert_eq!(display.weather(), "");
        assert_eq!(output.lines()[1], "Watch display weather updated: ");
    }

    #[test]
    fn display_repeats_current_weather() {
        let output = MockOutput::new();
        let display = TvDisplay::new(&output.get());
        display.update("foggy").expect("update failed");
        display.display();
        assert_eq!(output.lines().len(), 2);
        assert_eq!(output.lines()[0], output.lines()[1]);
    }

    #[test]
    fn info_reports_name_and_latest_weather() {
        let output = MockOutput::new();
        let display = TvDisplay::new(&output.get());
        assert_eq!(display.info(), ObserverInfo::new("TV Display", ""));
        display.update("hail").expect("update failed");
        assert_eq!(display.info(), ObserverInfo::new("TV Display", "hail"));
    }

    #[test]
    fn concurrent_updates_print_what_they_stored() {
        let output = MockOutput::new();
        let display = Arc::new(PhoneDisplay::new(&output.get()));
        let threads: Vec<_> = (0..16)
            .map(|i| {
                let display = display.clone();
                std::thread::spawn(move || {
                    for j in 0..50 {
                        display
                            .update(&format!("w{}-{}", i, j))
                            .expect("update failed");
                    }
                })
            })
            .collect();
        for thread in threads {
            thread.join().expect("update thread panicked");
        }
        let mut lines = output.lines();
        lines.sort();
        let mut expected: Vec<String> = (0..16)
            .flat_map(|i| {
                (0..50).map(move |j| format!("Phone display weather updated: w{}-{}", i, j))
            })
            .collect();
        expected.sort();
        assert_eq!(lines, expected);
        let last = output.lines().pop().expect("no lines printed");
        assert_eq!(
            last,
            format!("Phone display weather updated: {}", display.weather())
        );
    }

    #[test]
    fn debug_shows_weather() {
        let output = MockOutput::new();
        let display = PhoneDisplay::new(&output.get());
        display.update("windy").expect("update failed");
        assert!(format!("{:?}", display).contains("windy"));
    }
}

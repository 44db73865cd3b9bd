use super::*;

/// Holds the current weather and the observers that want to know about it. Not thread safe on its
/// own, see SharedWeatherStation for that.
#[derive(Default)]
pub struct WeatherStation {
    observers: ObserverList,
    weather: String,
}

impl WeatherStation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weather, then notifies everyone. If an observer fails the weather stays set and
    /// the observers after the failing one are skipped.
    pub fn set_weather(&mut self, weather: &str) -> NotifyResult<()> {
        self.store_weather(weather);
        self.notify_observers()
    }

    /// Describes every observer in the order they were added, and logs the list
    pub fn list_observers(&self) -> Vec<ObserverInfo> {
        let infos = self.observers.infos();
        log_observers(&infos);
        infos
    }

    pub fn weather(&self) -> &str {
        &self.weather
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub(super) fn store_weather(&mut self, weather: &str) {
        debug!("weather changed from {:?} to {:?}", self.weather, weather);
        self.weather = weather.to_string();
    }

    pub(super) fn observers(&self) -> &ObserverList {
        &self.observers
    }

    /// Changes the list without logging, for callers that describe the observer themselves
    pub(super) fn observers_mut(&mut self) -> &mut ObserverList {
        &mut self.observers
    }
}

pub(super) fn log_observers(infos: &[ObserverInfo]) {
    match serde_json::to_string_pretty(infos) {
        Ok(json) => info!("observers: {}", json),
        Err(e) => warn!("failed to describe observers: {}", e),
    }
}

pub(super) fn log_added(info: &ObserverInfo) {
    info!("observer added: {}", info);
}

pub(super) fn log_removed(info: &ObserverInfo, report: &RemoveReport) {
    if report.removed > 0 {
        info!("observer removed: {}", info);
        if report.is_now_empty {
            debug!("no observers left");
        }
    } else {
        debug!("{} was not an observer", info.name);
    }
}

impl Subject for WeatherStation {
    fn add_observer(&mut self, observer: Arc<dyn Observer>) {
        log_added(&observer.info());
        self.observers.add(observer);
    }

    fn remove_observer(&mut self, observer: &Arc<dyn Observer>) -> usize {
        let report = self.observers.remove(observer);
        log_removed(&observer.info(), &report);
        report.removed
    }

    fn notify_observers(&self) -> NotifyResult<()> {
        notify_all(self.observers.iter(), &self.weather)
    }
}

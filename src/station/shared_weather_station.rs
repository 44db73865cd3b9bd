use super::*;

/// A WeatherStation that can be shared between threads.
///
/// Adding and removing observers happens under the lock. Notifying copies the weather and the
/// observer list while locked, then calls the observers after the lock is released. This means an
/// observer can add or remove observers (or even set the weather) from inside update() without
/// deadlocking, and such changes only take effect for later notifications. Observers are also
/// described with info() outside the lock, so info() may read the station too.
#[derive(Default)]
pub struct SharedWeatherStation {
    lock: Mutex<WeatherStation>,
}

impl SharedWeatherStation {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> NotifyResult<MutexGuard<WeatherStation>> {
        Ok(self.lock.lock()?)
    }

    pub fn add_observer(&self, observer: Arc<dyn Observer>) -> NotifyResult<()> {
        let info = observer.info();
        self.lock()?.observers_mut().add(observer);
        log_added(&info);
        Ok(())
    }

    /// Returns how many registrations were removed
    pub fn remove_observer(&self, observer: &Arc<dyn Observer>) -> NotifyResult<usize> {
        let info = observer.info();
        let report = self.lock()?.observers_mut().remove(observer);
        log_removed(&info, &report);
        Ok(report.removed)
    }

    pub fn list_observers(&self) -> NotifyResult<Vec<ObserverInfo>> {
        let observers = self.lock()?.observers().snapshot();
        let infos: Vec<ObserverInfo> = observers.iter().map(|observer| observer.info()).collect();
        log_observers(&infos);
        Ok(infos)
    }

    pub fn weather(&self) -> NotifyResult<String> {
        Ok(self.lock()?.weather().to_string())
    }

    pub fn len(&self) -> NotifyResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Sets the weather and notifies the observers that were registered at the time it was set
    pub fn set_weather(&self, weather: &str) -> NotifyResult<()> {
        let observers = {
            let mut station = self.lock()?;
            station.store_weather(weather);
            station.observers().snapshot()
        };
        notify_all(&observers, weather)
    }

    pub fn notify_observers(&self) -> NotifyResult<()> {
        let (weather, observers) = {
            let station = self.lock()?;
            (station.weather().to_string(), station.observers().snapshot())
        };
        notify_all(&observers, &weather)
    }

    pub fn into_inner(self) -> NotifyResult<WeatherStation> {
        Ok(self.lock.into_inner()?)
    }
}

impl From<WeatherStation> for SharedWeatherStation {
    fn from(station: WeatherStation) -> Self {
        Self {
            lock: Mutex::new(station),
        }
    }
}

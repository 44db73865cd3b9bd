use super::*;

type UpdateFn = Box<dyn Fn(&str) -> NotifyResult<()> + Send + Sync>;

struct MockObserverInner {
    name: String,
    received: Mutex<Vec<String>>,
    f: UpdateFn,
}

/// Records every update it gets. Keep this around to inspect, and register get() with a station.
pub struct MockObserver(Arc<MockObserverInner>);

impl MockObserver {
    pub fn new(name: &str) -> Self {
        Self::new_with_fn(name, |_| Ok(()))
    }

    /// Panics if notified
    pub fn new_terrified(name: &str) -> Self {
        Self::new_with_fn(name, |_| panic!("mock observer should not have been notified"))
    }

    /// Fails every update with the given reason
    pub fn new_failing(name: &str, reason: &str) -> Self {
        let (owned_name, reason) = (name.to_string(), reason.to_string());
        Self::new_with_fn(name, move |_| {
            Err(NotifyError::observer_failed(&owned_name, reason.clone()))
        })
    }

    /// Writes "name=weather" to the shared log on each update, to check order across observers
    pub fn new_logging(name: &str, log: &CallLog) -> Self {
        let (owned_name, log) = (name.to_string(), log.clone());
        Self::new_with_fn(name, move |weather| {
            log.push(&owned_name, weather);
            Ok(())
        })
    }

    pub fn new_with_fn<F>(name: &str, f: F) -> Self
    where
        F: Fn(&str) -> NotifyResult<()> + Send + Sync + 'static,
    {
        Self(Arc::new(MockObserverInner {
            name: name.to_string(),
            received: Mutex::new(Vec::new()),
            f: Box::new(f),
        }))
    }

    pub fn get(&self) -> Arc<dyn Observer> {
        self.0.clone()
    }

    pub fn received(&self) -> Vec<String> {
        self.0.received.lock().unwrap().clone()
    }

    pub fn update_count(&self) -> usize {
        self.0.received.lock().unwrap().len()
    }
}

impl Observer for MockObserverInner {
    fn update(&self, weather: &str) -> NotifyResult<()> {
        self.received.lock().unwrap().push(weather.to_string());
        (self.f)(weather)
    }

    fn info(&self) -> ObserverInfo {
        let received = self.received.lock().unwrap();
        ObserverInfo::new(&self.name, received.last().map_or("", |w| w.as_str()))
    }
}

/// Updates from many observers in the order they happened
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, name: &str, weather: &str) {
        self.0.lock().unwrap().push(format!("{}={}", name, weather));
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

use super::*;

/// An object that is told every time the weather changes. Observers are shared with Arc, and two
/// observers are the same observer only if they are the same allocation.
pub trait Observer: Send + Sync {
    /// Called by a subject with the new weather. Returning an error stops the subject from
    /// notifying anyone after this observer.
    fn update(&self, weather: &str) -> NotifyResult<()>;

    /// Describes the observer for diagnostics, must not change anything. A SharedWeatherStation
    /// calls this outside its lock, so reading the station from here is fine.
    fn info(&self) -> ObserverInfo;
}

use super::*;

/// Something that keeps a list of observers and tells them about changes
pub trait Subject {
    /// Appends the observer. Adding the same observer twice means it is notified twice.
    fn add_observer(&mut self, observer: Arc<dyn Observer>);
    /// Removes every registration of the observer, returns how many there were
    fn remove_observer(&mut self, observer: &Arc<dyn Observer>) -> usize;
    /// Sends the current state to every observer, in the order they were added
    fn notify_observers(&self) -> NotifyResult<()>;
}

use super::*;

/// Returned by ObserverList::remove(), used instead of a raw count for code readablity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveReport {
    /// How many entries were removed. 0 if the observer was not in the list, more than 1 if it
    /// had been added multiple times.
    pub removed: usize,
    pub is_now_empty: bool,
}

/// An ordered list of observers. Unlike a set the same observer can be in here more than once, and
/// it is notified once per entry.
///
/// Observers are compared by the address of their allocation (see ThinPtr), which is stored next
/// to each observer so removal doesn't need to recompute it for every entry.
#[derive(Clone, Default)]
pub struct ObserverList(Vec<(usize, Arc<dyn Observer>)>);

impl ObserverList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends to the end, duplicates are allowed
    pub fn add(&mut self, observer: Arc<dyn Observer>) {
        let observer_ptr = observer.thin_addr();
        self.0.push((observer_ptr, observer));
    }

    /// Removes every entry for this observer, keeping the rest in order. Not an error if the
    /// observer was never added.
    pub fn remove<T: ?Sized>(&mut self, observer: &Arc<T>) -> RemoveReport {
        let observer_ptr = observer.thin_addr();
        let len_before = self.0.len();
        self.0.retain(|(ptr, _observer)| *ptr != observer_ptr);
        RemoveReport {
            removed: len_before - self.0.len(),
            is_now_empty: self.0.is_empty(),
        }
    }

    pub fn contains<T: ?Sized>(&self, observer: &Arc<T>) -> bool {
        let observer_ptr = observer.thin_addr();
        self.0.iter().any(|(ptr, _observer)| *ptr == observer_ptr)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Observer>> {
        self.0.iter().map(|(_ptr, observer)| observer)
    }

    /// Copies out the observers in order, so they can be notified without holding whatever guards
    /// this list
    pub fn snapshot(&self) -> Vec<Arc<dyn Observer>> {
        self.iter().cloned().collect()
    }

    pub fn infos(&self) -> Vec<ObserverInfo> {
        self.iter().map(|observer| observer.info()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Sends the weather to each observer in order. Stops at and returns the first error.
pub fn notify_all<'a, I>(observers: I, weather: &str) -> NotifyResult<()>
where
    I: IntoIterator<Item = &'a Arc<dyn Observer>>,
{
    for observer in observers {
        trace!("notifying {} of {:?}", observer.info().name, weather);
        if let Err(e) = observer.update(weather) {
            warn!("notification aborted: {}", e);
            return Err(e);
        }
    }
    Ok(())
}

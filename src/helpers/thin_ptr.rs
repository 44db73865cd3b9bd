use std::sync::Arc;

/// Identity of whatever an Arc points to, ignoring any vtable. Arc::ptr_eq() compares fat pointers
/// so it can say two Arc<dyn Trait>s to the same object differ (see
/// https://github.com/rust-lang/rust/issues/46139). Use this instead.
pub trait ThinPtr {
    fn thin_ptr(&self) -> *const ();

    /// Raw pointers aren't Send or Sync, so store this instead
    fn thin_addr(&self) -> usize {
        self.thin_ptr() as usize
    }
}

impl<T: ?Sized> ThinPtr for Arc<T> {
    fn thin_ptr(&self) -> *const () {
        Arc::as_ptr(self) as *const ()
    }
}

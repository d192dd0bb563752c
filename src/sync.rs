//! A lock that hands out exclusive access for the span of a closure.

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;

pub struct Lock<T>(Inner<T>);

impl<T> Lock<T> {
    pub const fn new(value: T) -> Self {
        Self(Inner::new(value))
    }

    /// Runs `f` with the value locked. A poisoned lock is recovered.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        #[cfg(feature = "std")]
        let mut guard = self
            .0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        #[cfg(all(not(feature = "std"), feature = "alloc"))]
        let mut guard = self.0.lock();

        f(&mut *guard)
    }
}

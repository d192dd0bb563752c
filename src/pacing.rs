//! Presentation pacing between the steps of a round.

use core::time::Duration;

/// Waits between the steps of a round so a viewer can follow along.
///
/// The game never sleeps on its own: callers that drive rounds through
/// [`Game::play_round`](crate::Game::play_round) choose how the pause happens.
pub trait Pacer {
    /// Pauses for `delay`.
    fn pause(&self, delay: Duration);
}

/// Does not wait at all. Suitable for tests and headless simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Immediate;

impl Pacer for Immediate {
    fn pause(&self, _delay: Duration) {}
}

/// Blocks the current thread for the delay.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sleep;

#[cfg(feature = "std")]
impl Pacer for Sleep {
    fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

impl<F: Fn(Duration)> Pacer for F {
    fn pause(&self, delay: Duration) {
        self(delay);
    }
}

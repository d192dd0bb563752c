//! Game configuration options.

use core::time::Duration;

/// Pacing delay used when no other value is configured, in milliseconds.
pub const DEFAULT_PACING_MS: u64 = 1000;

/// Configuration options for a game of War.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warrs::GameOptions;
///
/// let options = GameOptions::default().with_pacing_ms(250);
/// assert_eq!(options.pacing_ms, 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Delay between drawing, comparing, and clearing the table, in milliseconds.
    /// 0 disables pacing.
    pub pacing_ms: u64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            pacing_ms: DEFAULT_PACING_MS,
        }
    }
}

impl GameOptions {
    /// Sets the pacing delay in milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_pacing_ms(0);
    /// assert_eq!(options.pacing_ms, 0);
    /// ```
    #[must_use]
    pub const fn with_pacing_ms(mut self, pacing_ms: u64) -> Self {
        self.pacing_ms = pacing_ms;
        self
    }

    /// Returns the pacing delay.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_pacing_ms(1500);
    /// assert_eq!(options.pacing(), Duration::from_millis(1500));
    /// ```
    #[must_use]
    pub const fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }
}

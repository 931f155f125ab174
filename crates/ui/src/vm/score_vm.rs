/// Cosmetic count-up toward the final score.
///
/// Purely presentational: it decorates the already-final percent for the
/// score panel and never writes back into the session. The view drives it
/// with a timer; dropping it mid-count loses nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountUp {
    target: u8,
    shown: u8,
}

impl CountUp {
    #[must_use]
    pub fn new(target: u8) -> Self {
        Self { target, shown: 0 }
    }

    /// The value to display right now.
    #[must_use]
    pub fn shown(&self) -> u8 {
        self.shown
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.shown >= self.target
    }

    /// Advance one step toward the target; returns true once it is reached.
    pub fn tick(&mut self) -> bool {
        if self.shown < self.target {
            self.shown += 1;
        }
        self.is_done()
    }
}

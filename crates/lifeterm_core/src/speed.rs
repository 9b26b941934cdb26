use std::time::Duration;

/// Pause between automatic generations.
///
/// Adjusted in fixed increments and always kept inside `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDelay {
    current: Duration,
    increment: Duration,
    min: Duration,
    max: Duration,
}

impl StepDelay {
    /// `min` is raised to 1ms and `max` to `min` if they are out of order.
    pub fn new(initial: Duration, increment: Duration, min: Duration, max: Duration) -> Self {
        let min = min.max(Duration::from_millis(1));
        let max = max.max(min);
        Self {
            current: initial.clamp(min, max),
            increment,
            min,
            max,
        }
    }

    pub fn current(&self) -> Duration {
        self.current
    }

    /// Shortens the delay, i.e. runs faster.
    pub fn speed_up(&mut self) -> Duration {
        self.current = self.current.saturating_sub(self.increment).max(self.min);
        self.current
    }

    /// Lengthens the delay, i.e. runs slower.
    pub fn slow_down(&mut self) -> Duration {
        self.current = self.current.saturating_add(self.increment).min(self.max);
        self.current
    }
}

use crate::visibility::GateTransition;
use std::ops::Sub;
use std::time::Duration;

/// Wall time between frames. Generic over the timestamp type so the browser
/// side can use `instant::Instant` and tests can use plain durations.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock<T> {
    last: T,
}

impl<T> FrameClock<T>
where
    T: Copy + Sub<Output = Duration>,
{
    pub fn new(now: T) -> Self {
        Self { last: now }
    }

    /// Forget the time spent paused; the next lap starts from `now`.
    pub fn restart(&mut self, now: T) {
        self.last = now;
    }

    /// Time since the previous lap (or restart).
    pub fn lap(&mut self, now: T) -> Duration {
        let dt = now - self.last;
        self.last = now;
        dt
    }

    /// Restart only when the gate actually resumed the loop. Redundant
    /// visibility signals leave the running frame delta alone.
    pub fn on_gate(&mut self, transition: GateTransition, now: T) {
        if transition == GateTransition::Resume {
            self.restart(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn lap_measures_since_previous_lap() {
        let mut clock = FrameClock::new(ms(0));
        assert_eq!(clock.lap(ms(16)), ms(16));
        assert_eq!(clock.lap(ms(40)), ms(24));
    }

    #[test]
    fn restart_drops_paused_time() {
        let mut clock = FrameClock::new(ms(0));
        clock.lap(ms(16));
        clock.restart(ms(5000));
        assert_eq!(clock.lap(ms(5016)), ms(16));
    }
}

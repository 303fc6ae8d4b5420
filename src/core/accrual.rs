use std::time::Duration;

use bevy::time::{Timer, TimerMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopTick {
    pub index: u64,
    pub autosave: bool,
}

/// Repeating timer that drives coin accrual. Ticks are numbered from 0 and
/// every `autosave_every`-th tick (including tick 0) asks for a save.
#[derive(Debug, Clone, PartialEq)]
pub struct AccrualLoop {
    timer: Timer,
    autosave_every: u64,
    ticks: u64,
}

impl AccrualLoop {
    pub fn new(period: Duration, autosave_every: u64) -> Self {
        Self {
            timer: Timer::new(period.max(Duration::from_millis(1)), TimerMode::Repeating),
            autosave_every: autosave_every.max(1),
            ticks: 0,
        }
    }

    pub fn ticks_fired(&self) -> u64 {
        self.ticks
    }

    /// Fires the next tick immediately.
    pub fn fire(&mut self) -> LoopTick {
        let index = self.ticks;
        self.ticks += 1;
        LoopTick {
            index,
            autosave: index % self.autosave_every == 0,
        }
    }

    /// Feeds wall time in and returns every tick whose period completed.
    pub fn advance(&mut self, delta: Duration) -> Vec<LoopTick> {
        let steps = self.timer.tick(delta).times_finished_this_tick();
        (0..steps).map(|_| self.fire()).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::AccrualLoop;

    #[test]
    fn ticks_fire_once_per_full_period() {
        let mut accrual = AccrualLoop::new(Duration::from_secs(1), 60);

        assert!(accrual.advance(Duration::from_millis(999)).is_empty());
        let fired = accrual.advance(Duration::from_millis(1));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].index, 0);

        let fired = accrual.advance(Duration::from_millis(2500));
        assert_eq!(fired.iter().map(|tick| tick.index).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(accrual.ticks_fired(), 3);
    }

    #[test]
    fn autosave_lands_on_multiples_of_the_interval() {
        let mut accrual = AccrualLoop::new(Duration::from_secs(1), 60);
        let saved = (0..181)
            .map(|_| accrual.fire())
            .filter(|tick| tick.autosave)
            .map(|tick| tick.index)
            .collect::<Vec<_>>();

        assert_eq!(saved, vec![0, 60, 120, 180]);
    }

    #[test]
    fn chunked_and_single_advances_agree() {
        let mut a = AccrualLoop::new(Duration::from_millis(250), 4);
        let mut b = a.clone();

        let from_a = a.advance(Duration::from_millis(2_000));
        let mut from_b = Vec::new();
        for _ in 0..40 {
            from_b.extend(b.advance(Duration::from_millis(50)));
        }

        assert_eq!(from_a, from_b);
        assert_eq!(a.ticks_fired(), b.ticks_fired());
        assert_eq!(a.ticks_fired(), 8);
    }
}

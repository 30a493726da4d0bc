use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::debug;

/// Anything driven by the clock.
pub trait ClockListener {
    fn pulse(&mut self);

    /// The listener asked the clock to stop.
    fn is_stopped(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Shutdown,
    PulseLimit,
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub pulses: u64,
    pub reason: StopReason,
}

#[derive(Debug, Clone)]
pub struct Clock {
    interval: Duration,
    max_pulses: Option<u64>,
    interrupted: Arc<AtomicBool>,
}

impl Clock {
    pub fn new(interval: Duration, max_pulses: Option<u64>) -> Self {
        Self {
            interval,
            max_pulses,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag raised from outside (CTRL-C) to stop the clock.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    pub fn run(&self, listener: &mut dyn ClockListener) -> RunSummary {
        let mut pulses: u64 = 0;

        let reason = loop {
            if listener.is_stopped() {
                break StopReason::Shutdown;
            }
            if self.interrupted.load(Ordering::Relaxed) {
                break StopReason::Interrupted;
            }
            if self.max_pulses.map_or(false, |max| pulses >= max) {
                break StopReason::PulseLimit;
            }

            listener.pulse();
            pulses += 1;

            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
        };
        debug!("clock stopped after {} pulses: {:?}", pulses, reason);

        RunSummary { pulses, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        pulses: u64,
        stop_at: Option<u64>,
    }

    impl ClockListener for Counter {
        fn pulse(&mut self) {
            self.pulses += 1;
        }

        fn is_stopped(&self) -> bool {
            self.stop_at == Some(self.pulses)
        }
    }

    #[test]
    fn test_stop_on_shutdown() {
        let clock = Clock::new(Duration::ZERO, None);
        let mut counter = Counter {
            pulses: 0,
            stop_at: Some(7),
        };
        let summary = clock.run(&mut counter);
        assert_eq!(7, summary.pulses);
        assert_eq!(StopReason::Shutdown, summary.reason);
    }

    #[test]
    fn test_pulse_limit() {
        let clock = Clock::new(Duration::ZERO, Some(3));
        let mut counter = Counter::default();
        let summary = clock.run(&mut counter);
        assert_eq!(3, counter.pulses);
        assert_eq!(StopReason::PulseLimit, summary.reason);
    }

    #[test]
    fn test_interrupted() {
        let clock = Clock::new(Duration::ZERO, None);
        clock.interrupt_handle().store(true, Ordering::SeqCst);
        let mut counter = Counter::default();
        let summary = clock.run(&mut counter);
        assert_eq!(0, summary.pulses);
        assert_eq!(StopReason::Interrupted, summary.reason);
    }
}

use std::time::{Duration, Instant};

/// A cancelable periodic deadline.
///
/// The timer never reads the clock itself: every operation takes the current
/// instant, so schedules can be driven with synthetic time in tests.
///
/// Starting a running timer replaces its schedule. A period that was replaced
/// or canceled can never fire afterwards, which is what lets gravity switch
/// between its normal and fast periods without double steps.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
///
/// use blockfall_runtime::PeriodicTimer;
///
/// let start = Instant::now();
/// let mut timer = PeriodicTimer::new();
/// timer.start(Duration::from_millis(100), start);
///
/// assert!(!timer.poll(start + Duration::from_millis(99)));
/// assert!(timer.poll(start + Duration::from_millis(100)));
/// assert_eq!(timer.deadline(), Some(start + Duration::from_millis(200)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodicTimer {
    schedule: Option<Schedule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Schedule {
    interval: Duration,
    deadline: Instant,
}

impl PeriodicTimer {
    /// Creates a stopped timer.
    #[must_use]
    pub const fn new() -> Self {
        Self { schedule: None }
    }

    /// (Re)starts the timer so that it first fires at `now + interval`.
    pub fn start(&mut self, interval: Duration, now: Instant) {
        self.schedule = Some(Schedule {
            interval,
            deadline: now + interval,
        });
    }

    /// Stops the timer. Does nothing if it is not running.
    pub fn cancel(&mut self) {
        self.schedule = None;
    }

    /// Starts the timer with `interval`, or cancels it for `None`.
    pub fn set(&mut self, interval: Option<Duration>, now: Instant) {
        match interval {
            Some(interval) => self.start(interval, now),
            None => self.cancel(),
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.schedule.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Option<Duration> {
        self.schedule.map(|s| s.interval)
    }

    /// Returns when the timer fires next, if it is running.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.schedule.map(|s| s.deadline)
    }

    /// Returns whether the timer is due at `now`, re-arming it if so.
    ///
    /// A due timer is re-armed at `now + interval`. Periods missed while the
    /// caller was busy are dropped, not replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match &mut self.schedule {
            Some(schedule) if schedule.deadline <= now => {
                schedule.deadline = now + schedule.interval;
                true
            }
            _ => false,
        }
    }
}

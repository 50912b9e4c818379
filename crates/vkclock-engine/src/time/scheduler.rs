use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Why a widget is being asked to resynchronize with the wall clock.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TickTrigger {
    /// Periodic timer fired.
    Interval,
    /// OS minute tick.
    TimeTick,
    /// The user or network time changed the system clock.
    TimeSet,
    /// The local timezone changed.
    TimezoneChanged,
}

impl TickTrigger {
    pub fn as_str(self) -> &'static str {
        match self {
            TickTrigger::Interval => "interval",
            TickTrigger::TimeTick => "time-tick",
            TickTrigger::TimeSet => "time-set",
            TickTrigger::TimezoneChanged => "timezone-changed",
        }
    }
}

/// Error returned by [`TickScheduler::register`].
#[derive(Debug, Clone)]
pub struct SchedulerError(pub String);

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick scheduler error: {}", self.0)
    }
}

impl std::error::Error for SchedulerError {}

/// Delivers tick triggers to a host while registered.
///
/// Callers keep `register` / `unregister` balanced; the widget guards this with
/// its own attach flag, so implementations need not tolerate double calls.
pub trait TickScheduler {
    /// Starts periodic delivery with the given period and subscribes to
    /// time-change notifications.
    fn register(&mut self, period: Duration) -> Result<(), SchedulerError>;

    /// Stops periodic delivery and drops time-change subscriptions.
    fn unregister(&mut self);
}

// ── IntervalScheduler ─────────────────────────────────────────────────────

/// Longest accepted timer period.
pub const MAX_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

/// Wall-clock drift against the monotonic clock beyond which the system clock
/// is considered to have been set.
const JUMP_TOLERANCE_MS: i64 = 2_000;

struct Worker {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

/// Handle for posting time-change triggers from platform glue.
///
/// Sends only go through while the owning [`IntervalScheduler`] is
/// registered; after `unregister` they fail and nothing reaches the channel.
#[derive(Debug, Clone)]
pub struct TimeChangeSender {
    tx: Sender<TickTrigger>,
    subscribed: Arc<AtomicBool>,
}

impl TimeChangeSender {
    pub fn send(&self, trigger: TickTrigger) -> Result<(), SchedulerError> {
        if !self.is_subscribed() {
            return Err(SchedulerError(format!("{} dropped: not subscribed", trigger.as_str())));
        }
        self.tx
            .send(trigger)
            .map_err(|_| SchedulerError("tick receiver dropped".to_string()))
    }

    #[inline]
    pub fn is_subscribed(&self) -> bool {
        self.subscribed.load(Ordering::Acquire)
    }
}

/// Fixed-rate background timer posting [`TickTrigger::Interval`] to a channel.
///
/// The first trigger is sent immediately on `register`. The worker thread only
/// sends; the receiving thread does all widget work.
///
/// While registered the worker also watches the wall clock and posts
/// `TimeTick` when the local minute rolls over, `TimeSet` when the system
/// clock jumps, and `TimezoneChanged` when the UTC offset changes. External
/// notifications go through [`sender`](Self::sender); both paths are
/// released by `unregister`.
pub struct IntervalScheduler {
    tx: Sender<TickTrigger>,
    subscribed: Arc<AtomicBool>,
    worker: Option<Worker>,
}

impl IntervalScheduler {
    pub fn new(tx: Sender<TickTrigger>) -> Self {
        Self { tx, subscribed: Arc::new(AtomicBool::new(false)), worker: None }
    }

    /// Subscription handle for out-of-band triggers (time set, timezone
    /// changed). Live only while the scheduler is registered.
    pub fn sender(&self) -> TimeChangeSender {
        TimeChangeSender { tx: self.tx.clone(), subscribed: Arc::clone(&self.subscribed) }
    }

    /// True while the worker thread is alive.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.handle.is_finished())
    }
}

impl TickScheduler for IntervalScheduler {
    fn register(&mut self, period: Duration) -> Result<(), SchedulerError> {
        if self.worker.is_some() {
            log::debug!("interval scheduler already running");
            return Ok(());
        }
        if period.is_zero() {
            return Err(SchedulerError("period must be non-zero".to_string()));
        }
        if period > MAX_PERIOD {
            return Err(SchedulerError(format!("period {period:?} exceeds {MAX_PERIOD:?}")));
        }

        let stop = Arc::new(AtomicBool::new(false));
        let tx = self.tx.clone();
        let flag = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("vkclock-ticker".to_string())
            .spawn(move || run_ticker(tx, flag, period))
            .map_err(|e| SchedulerError(e.to_string()))?;

        self.subscribed.store(true, Ordering::Release);
        log::debug!("interval scheduler started: period={period:?}");
        self.worker = Some(Worker { stop, handle });
        Ok(())
    }

    fn unregister(&mut self) {
        self.subscribed.store(false, Ordering::Release);
        let Some(worker) = self.worker.take() else {
            return;
        };
        worker.stop.store(true, Ordering::Release);
        worker.handle.thread().unpark();
        if worker.handle.join().is_err() {
            log::error!("interval scheduler thread panicked");
        }
        log::debug!("interval scheduler stopped");
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        self.unregister();
    }
}

fn run_ticker(tx: Sender<TickTrigger>, stop: Arc<AtomicBool>, period: Duration) {
    let mut watch = WallClockWatch::new(WallSample::now());
    let mut deadline = Instant::now();
    loop {
        // Spurious wakeups and unpark() both land here.
        let now = Instant::now();
        if stop.load(Ordering::Acquire) {
            return;
        }
        if now < deadline {
            thread::park_timeout(deadline - now);
            continue;
        }
        if tx.send(TickTrigger::Interval).is_err() {
            log::debug!("tick receiver dropped; ticker exiting");
            return;
        }
        if let Some(change) = watch.observe(WallSample::now()) {
            log::debug!("wall clock: {}", change.as_str());
            if tx.send(change).is_err() {
                return;
            }
        }
        // Fixed rate: schedule from the previous deadline, but never try to
        // catch up on ticks missed during a stall.
        deadline = match deadline.checked_add(period) {
            Some(next) if next >= now => next,
            _ => match now.checked_add(period) {
                Some(next) => next,
                None => {
                    log::error!("tick deadline overflow; ticker exiting");
                    return;
                }
            },
        };
    }
}

/// One reading of both clocks.
#[derive(Debug, Copy, Clone)]
struct WallSample {
    mono: Instant,
    utc_ms: i64,
    offset_secs: i32,
}

impl WallSample {
    fn now() -> Self {
        let local = chrono::Local::now();
        Self {
            mono: Instant::now(),
            utc_ms: local.timestamp_millis(),
            offset_secs: local.offset().local_minus_utc(),
        }
    }

    fn local_minute(&self) -> i64 {
        (self.utc_ms.div_euclid(1000) + i64::from(self.offset_secs)).div_euclid(60)
    }
}

/// Turns successive clock readings into time-change triggers.
#[derive(Debug)]
struct WallClockWatch {
    anchor: WallSample,
    last: WallSample,
}

impl WallClockWatch {
    fn new(sample: WallSample) -> Self {
        Self { anchor: sample, last: sample }
    }

    fn observe(&mut self, sample: WallSample) -> Option<TickTrigger> {
        let last = std::mem::replace(&mut self.last, sample);

        if sample.offset_secs != last.offset_secs {
            self.anchor = sample;
            return Some(TickTrigger::TimezoneChanged);
        }

        let mono_ms = sample.mono.saturating_duration_since(self.anchor.mono).as_millis();
        let mono_ms = i64::try_from(mono_ms).unwrap_or(i64::MAX);
        let wall_ms = sample.utc_ms.saturating_sub(self.anchor.utc_ms);
        if wall_ms.saturating_sub(mono_ms).saturating_abs() > JUMP_TOLERANCE_MS {
            self.anchor = sample;
            return Some(TickTrigger::TimeSet);
        }

        (sample.local_minute() != last.local_minute()).then_some(TickTrigger::TimeTick)
    }
}

// ── ManualScheduler ───────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct ManualState {
    active: Cell<usize>,
    register_calls: Cell<usize>,
    unregister_calls: Cell<usize>,
    period: Cell<Option<Duration>>,
}

/// Scheduler that never fires on its own; it only records registrations.
///
/// Clones share state, so a test can hand one clone to a widget and inspect
/// the other. Triggers are delivered by calling the widget directly.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    state: Rc<ManualState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently active registrations.
    pub fn active(&self) -> usize {
        self.state.active.get()
    }

    pub fn register_calls(&self) -> usize {
        self.state.register_calls.get()
    }

    pub fn unregister_calls(&self) -> usize {
        self.state.unregister_calls.get()
    }

    /// Period passed to the most recent `register`.
    pub fn period(&self) -> Option<Duration> {
        self.state.period.get()
    }
}

impl TickScheduler for ManualScheduler {
    fn register(&mut self, period: Duration) -> Result<(), SchedulerError> {
        let s = &self.state;
        s.register_calls.set(s.register_calls.get() + 1);
        s.active.set(s.active.get() + 1);
        s.period.set(Some(period));
        Ok(())
    }

    fn unregister(&mut self) {
        let s = &self.state;
        s.unregister_calls.set(s.unregister_calls.get() + 1);
        s.active.set(s.active.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn interval_first_tick_is_immediate() {
        let (tx, rx) = mpsc::channel();
        let mut sched = IntervalScheduler::new(tx);
        sched.register(Duration::from_secs(60)).unwrap();
        let first = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(first, TickTrigger::Interval);
        sched.unregister();
        assert!(!sched.is_running());
    }

    #[test]
    fn interval_fires_repeatedly() {
        let (tx, rx) = mpsc::channel();
        let mut sched = IntervalScheduler::new(tx);
        sched.register(Duration::from_millis(10)).unwrap();
        for _ in 0..3 {
            rx.recv_timeout(Duration::from_secs(5)).unwrap();
        }
        sched.unregister();
    }

    #[test]
    fn interval_stops_after_unregister() {
        let (tx, rx) = mpsc::channel();
        let mut sched = IntervalScheduler::new(tx);
        sched.register(Duration::from_millis(5)).unwrap();
        sched.unregister();
        // Drain whatever was sent before the stop flag was observed.
        while rx.try_recv().is_ok() {}
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn interval_rejects_zero_period() {
        let (tx, _rx) = mpsc::channel();
        let mut sched = IntervalScheduler::new(tx);
        assert!(sched.register(Duration::ZERO).is_err());
        assert!(!sched.is_running());
    }

    #[test]
    fn interval_rejects_period_beyond_max() {
        let (tx, rx) = mpsc::channel();
        let mut sched = IntervalScheduler::new(tx);
        assert!(sched.register(Duration::MAX).is_err());
        assert!(sched.register(MAX_PERIOD + Duration::from_secs(1)).is_err());
        assert!(!sched.is_running());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn sender_is_live_only_while_registered() {
        let (tx, rx) = mpsc::channel();
        let mut sched = IntervalScheduler::new(tx);
        let notifier = sched.sender();
        assert!(notifier.send(TickTrigger::TimezoneChanged).is_err());

        sched.register(Duration::from_secs(60)).unwrap();
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), TickTrigger::Interval);
        notifier.send(TickTrigger::TimezoneChanged).unwrap();
        // The worker may slip in a wall-clock trigger of its own first.
        let delivered = (0..3).any(|_| {
            rx.recv_timeout(Duration::from_secs(5)) == Ok(TickTrigger::TimezoneChanged)
        });
        assert!(delivered);

        sched.unregister();
        while rx.try_recv().is_ok() {}
        assert!(!notifier.is_subscribed());
        assert!(notifier.send(TickTrigger::TimeSet).is_err());
        assert!(rx.try_recv().is_err());
    }

    fn sample(base: Instant, mono_ms: u64, utc_ms: i64, offset_secs: i32) -> WallSample {
        WallSample { mono: base + Duration::from_millis(mono_ms), utc_ms, offset_secs }
    }

    #[test]
    fn watch_is_quiet_while_clocks_agree() {
        let base = Instant::now();
        let mut watch = WallClockWatch::new(sample(base, 0, 10_000, 0));
        assert_eq!(watch.observe(sample(base, 1_000, 11_000, 0)), None);
        // Small scheduling jitter is not a jump.
        assert_eq!(watch.observe(sample(base, 2_000, 12_500, 0)), None);
    }

    #[test]
    fn watch_reports_minute_rollover() {
        let base = Instant::now();
        let mut watch = WallClockWatch::new(sample(base, 0, 59_500, 0));
        assert_eq!(watch.observe(sample(base, 1_000, 60_500, 0)), Some(TickTrigger::TimeTick));
        assert_eq!(watch.observe(sample(base, 2_000, 61_500, 0)), None);
    }

    #[test]
    fn watch_reports_clock_jump_once() {
        let base = Instant::now();
        let mut watch = WallClockWatch::new(sample(base, 0, 10_000, 0));
        assert_eq!(watch.observe(sample(base, 1_000, 3_611_000, 0)), Some(TickTrigger::TimeSet));
        // Rebased on the new wall time.
        assert_eq!(watch.observe(sample(base, 2_000, 3_612_000, 0)), None);
        // Backwards too.
        assert_eq!(watch.observe(sample(base, 3_000, 13_000, 0)), Some(TickTrigger::TimeSet));
    }

    #[test]
    fn watch_reports_offset_change() {
        let base = Instant::now();
        let mut watch = WallClockWatch::new(sample(base, 0, 10_000, 3_600));
        assert_eq!(watch.observe(sample(base, 1_000, 11_000, 7_200)), Some(TickTrigger::TimezoneChanged));
        assert_eq!(watch.observe(sample(base, 2_000, 12_000, 7_200)), None);
    }

    #[test]
    fn manual_counts_registrations() {
        let observer = ManualScheduler::new();
        let mut sched = observer.clone();
        sched.register(Duration::from_secs(1)).unwrap();
        assert_eq!(observer.active(), 1);
        assert_eq!(observer.period(), Some(Duration::from_secs(1)));
        sched.unregister();
        assert_eq!(observer.active(), 0);
        assert_eq!(observer.register_calls(), 1);
        assert_eq!(observer.unregister_calls(), 1);
    }
}

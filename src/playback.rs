//! Timed playback of a finished step trace.
//!
//! Playback is cooperative and single-threaded. A [`Player`] owns at most one
//! active run; the host drives it either by calling [`Player::tick`] with the
//! time elapsed since the run started (a UI frame loop or a test clock), or by
//! handing control to [`Player::play_blocking`], which sleeps between steps.
//!
//! Timing model: step `i` fires at `i * step_delay` for every engine. A
//! Sudoku trace records placements and retractions as separate steps, so dead
//! ends are replayed at the same cadence as progress.
//!
//! Invariants:
//! - steps are presented in trace order, each exactly once,
//! - fire-time offsets never decrease along the trace,
//! - a second run cannot interleave with one that has not finished: it is
//!   either rejected or replaces the old run after cancelling it, per
//!   [`BusyPolicy`]. A run finishes on the tick that presents its last step,
//!   so a run over an empty trace stays active until its first tick.

use std::time::{Duration, Instant};

use crate::error::PlaybackError;
use crate::trace::{Step, StepTrace};

/// Default per-step delay in milliseconds.
pub const DEFAULT_SPEED_MS: u64 = 100;

/// What to do when a run is started while another has not finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BusyPolicy {
    /// Refuse the new run with [`PlaybackError::Busy`].
    #[default]
    Reject,
    /// Cancel every pending step of the old run, then start the new one.
    Replace,
}

/// Playback configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Delay between consecutive steps ("speed").
    pub step_delay: Duration,
    pub busy_policy: BusyPolicy,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(DEFAULT_SPEED_MS),
            busy_policy: BusyPolicy::default(),
        }
    }
}

/// Mapping from trace index to fire-time offset: `offset(i) = i * delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    len: usize,
    delay: Duration,
}

impl Schedule {
    pub fn new(len: usize, delay: Duration) -> Self {
        Self { len, delay }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fire-time offset of step `index`, or `None` past the end.
    pub fn offset(&self, index: usize) -> Option<Duration> {
        (index < self.len).then(|| scale(self.delay, index))
    }

    /// Offset of the last step; zero for an empty schedule.
    pub fn total(&self) -> Duration {
        self.len
            .checked_sub(1)
            .map_or(Duration::ZERO, |last| scale(self.delay, last))
    }

    /// `(index, offset)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Duration)> + '_ {
        (0..self.len).map(move |i| (i, scale(self.delay, i)))
    }
}

/// `delay * index`, saturating at `Duration::MAX`.
fn scale(delay: Duration, index: usize) -> Duration {
    u32::try_from(index)
        .ok()
        .and_then(|i| delay.checked_mul(i))
        .unwrap_or(if delay.is_zero() {
            Duration::ZERO
        } else {
            Duration::MAX
        })
}

/// Identifies one playback run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(u64);

impl RunId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A step delivered to the presenter.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledStep<'a> {
    pub run: RunId,
    /// Position in the trace.
    pub index: usize,
    /// Fire-time offset from run start.
    pub offset: Duration,
    pub step: &'a Step,
}

/// Receives steps as they become due.
///
/// Closures taking a [`ScheduledStep`] implement this trait directly.
pub trait Presenter {
    fn present(&mut self, scheduled: ScheduledStep<'_>);

    /// Called once after the last step of a run has been presented.
    /// Not called for cancelled runs.
    fn finished(&mut self, _run: RunId) {}
}

impl<F> Presenter for F
where
    F: FnMut(ScheduledStep<'_>),
{
    fn present(&mut self, scheduled: ScheduledStep<'_>) {
        self(scheduled)
    }
}

#[derive(Debug)]
struct ActiveRun {
    id: RunId,
    trace: StepTrace,
    schedule: Schedule,
    cursor: usize,
}

impl ActiveRun {
    fn pending(&self) -> usize {
        self.trace.len() - self.cursor
    }
}

/// Playback state machine enforcing a single active run.
#[derive(Debug)]
pub struct Player {
    config: PlaybackConfig,
    active: Option<ActiveRun>,
    next_id: u64,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl Player {
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            config,
            active: None,
            next_id: 0,
        }
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Begin playing `trace`. Offsets are measured from this call.
    pub fn start(&mut self, trace: StepTrace) -> Result<RunId, PlaybackError> {
        if self.active.is_some() {
            let pending = self.pending();
            match self.config.busy_policy {
                BusyPolicy::Reject => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(pending, "rejecting playback: run in flight");
                    return Err(PlaybackError::Busy { pending });
                }
                BusyPolicy::Replace => {
                    self.cancel();
                }
            }
        }

        let id = RunId(self.next_id);
        self.next_id += 1;
        let schedule = Schedule::new(trace.len(), self.config.step_delay);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            run = id.0,
            steps = trace.len(),
            total_ms = schedule.total().as_millis() as u64,
            "playback started"
        );

        self.active = Some(ActiveRun {
            id,
            trace,
            schedule,
            cursor: 0,
        });
        Ok(id)
    }

    /// Drop every pending step of the active run. Returns how many were dropped.
    pub fn cancel(&mut self) -> usize {
        let dropped = self.active.take().map_or(0, |run| run.pending());
        #[cfg(feature = "tracing")]
        tracing::debug!(dropped, "playback cancelled");
        dropped
    }

    /// Steps of the active run not yet presented.
    pub fn pending(&self) -> usize {
        self.active.as_ref().map_or(0, ActiveRun::pending)
    }

    /// True when a new run can start without hitting the busy policy.
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    pub fn current_run(&self) -> Option<RunId> {
        self.active.as_ref().map(|run| run.id)
    }

    /// Offset of the next pending step of the active run.
    pub fn next_due(&self) -> Option<Duration> {
        self.active
            .as_ref()
            .and_then(|run| run.schedule.offset(run.cursor))
    }

    /// Present every step whose offset is `<= elapsed`, in order.
    ///
    /// `elapsed` is measured from the start of the active run. Returns the
    /// number of steps presented by this call.
    pub fn tick<P: Presenter + ?Sized>(&mut self, elapsed: Duration, presenter: &mut P) -> usize {
        let Some(run) = self.active.as_mut() else {
            return 0;
        };

        let mut fired = 0;
        while let Some(offset) = run.schedule.offset(run.cursor) {
            if offset > elapsed {
                break;
            }
            presenter.present(ScheduledStep {
                run: run.id,
                index: run.cursor,
                offset,
                step: &run.trace[run.cursor],
            });
            run.cursor += 1;
            fired += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(run = run.id.0, fired, cursor = run.cursor, "playback tick");

        if run.pending() == 0 {
            let id = run.id;
            self.active = None;
            presenter.finished(id);
        }
        fired
    }

    /// Play the active run to completion in real time, sleeping between steps.
    ///
    /// Returns the number of steps presented.
    pub fn play_blocking<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> usize {
        let started = Instant::now();
        let mut fired = 0;
        while self.active.is_some() {
            if let Some(due) = self.next_due() {
                let now = started.elapsed();
                if due > now {
                    std::thread::sleep(due - now);
                }
            }
            fired += self.tick(started.elapsed(), presenter);
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::lcs::LcsProblem;
    use crate::TraceEngine;

    fn trace_of(len: usize) -> StepTrace {
        // LCS of "A" x len against "A" yields len steps
        let s = vec![b'A'; len];
        TraceEngine::new(LcsProblem::new(&s[..1.min(len)], &s)).run().trace
    }

    fn config(ms: u64, policy: BusyPolicy) -> PlaybackConfig {
        PlaybackConfig {
            step_delay: Duration::from_millis(ms),
            busy_policy: policy,
        }
    }

    #[test]
    fn schedule_offsets_are_index_times_delay() {
        let s = Schedule::new(4, Duration::from_millis(25));
        let offsets: Vec<u128> = s.iter().map(|(_, o)| o.as_millis()).collect();
        assert_eq!(offsets, vec![0, 25, 50, 75]);
        assert_eq!(s.offset(4), None);
        assert_eq!(s.total(), Duration::from_millis(75));
        assert_eq!(Schedule::new(0, Duration::from_millis(5)).total(), Duration::ZERO);
    }

    #[test]
    fn zero_delay_fires_everything_at_once() {
        let mut player = Player::new(config(0, BusyPolicy::Reject));
        player.start(trace_of(5)).unwrap();
        let mut seen = Vec::new();
        let fired = player.tick(Duration::ZERO, &mut |s: ScheduledStep<'_>| seen.push(s.index));
        assert_eq!(fired, 5);
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert!(player.is_idle());
    }

    #[test]
    fn tick_releases_due_steps_in_order() {
        let mut player = Player::new(config(10, BusyPolicy::Reject));
        player.start(trace_of(4)).unwrap();
        let mut seen = Vec::new();
        let mut present = |s: ScheduledStep<'_>| seen.push((s.index, s.offset.as_millis()));

        assert_eq!(player.tick(Duration::from_millis(0), &mut present), 1);
        assert_eq!(player.tick(Duration::from_millis(9), &mut present), 0);
        assert_eq!(player.tick(Duration::from_millis(25), &mut present), 2);
        assert_eq!(player.next_due(), Some(Duration::from_millis(30)));
        assert_eq!(player.tick(Duration::from_millis(1000), &mut present), 1);
        assert_eq!(player.tick(Duration::from_millis(2000), &mut present), 0);
        assert_eq!(seen, vec![(0, 0), (1, 10), (2, 20), (3, 30)]);
        assert!(player.current_run().is_none());
    }

    #[test]
    fn overlapping_start_is_rejected() {
        let mut player = Player::new(config(10, BusyPolicy::Reject));
        let first = player.start(trace_of(3)).unwrap();
        assert_eq!(
            player.start(trace_of(2)),
            Err(PlaybackError::Busy { pending: 3 })
        );
        assert_eq!(player.current_run(), Some(first));

        player.tick(Duration::from_secs(1), &mut |_: ScheduledStep<'_>| {});
        let second = player.start(trace_of(2)).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn replace_policy_cancels_old_run() {
        struct Recorder {
            runs: Vec<RunId>,
            finished: Vec<RunId>,
        }
        impl Presenter for Recorder {
            fn present(&mut self, s: ScheduledStep<'_>) {
                self.runs.push(s.run);
            }
            fn finished(&mut self, run: RunId) {
                self.finished.push(run);
            }
        }

        let mut player = Player::new(config(10, BusyPolicy::Replace));
        let mut rec = Recorder {
            runs: Vec::new(),
            finished: Vec::new(),
        };
        let first = player.start(trace_of(3)).unwrap();
        player.tick(Duration::from_millis(5), &mut rec);
        let second = player.start(trace_of(2)).unwrap();
        player.tick(Duration::from_secs(1), &mut rec);

        assert_eq!(rec.runs, vec![first, second, second]);
        assert_eq!(rec.finished, vec![second]);
    }

    #[test]
    fn cancel_reports_dropped_steps() {
        let mut player = Player::default();
        assert_eq!(player.cancel(), 0);
        player.start(trace_of(6)).unwrap();
        player.tick(Duration::from_millis(DEFAULT_SPEED_MS), &mut |_: ScheduledStep<'_>| {});
        assert_eq!(player.cancel(), 4);
        assert!(player.is_idle());
        assert_eq!(player.next_due(), None);
    }

    #[test]
    fn play_blocking_presents_all_steps() {
        let mut player = Player::new(config(1, BusyPolicy::Reject));
        player.start(trace_of(5)).unwrap();
        let mut count = 0;
        let fired = player.play_blocking(&mut |_: ScheduledStep<'_>| count += 1);
        assert_eq!(fired, 5);
        assert_eq!(count, 5);
        assert!(player.current_run().is_none());
    }

    #[test]
    fn empty_trace_finishes_on_first_tick() {
        let mut player = Player::default();
        let id = player.start(StepTrace::new()).unwrap();
        assert!(!player.is_idle());
        assert_eq!(player.pending(), 0);
        let mut done = Vec::new();
        struct Done<'a>(&'a mut Vec<RunId>);
        impl Presenter for Done<'_> {
            fn present(&mut self, _s: ScheduledStep<'_>) {}
            fn finished(&mut self, run: RunId) {
                self.0.push(run);
            }
        }
        assert_eq!(player.tick(Duration::ZERO, &mut Done(&mut done)), 0);
        assert_eq!(done, vec![id]);
        assert!(player.is_idle());
    }

    #[test]
    fn unticked_empty_run_still_blocks_next_start() {
        let mut player = Player::new(config(10, BusyPolicy::Reject));
        let empty = player.start(StepTrace::new()).unwrap();
        assert_eq!(
            player.start(trace_of(2)),
            Err(PlaybackError::Busy { pending: 0 })
        );
        assert_eq!(player.current_run(), Some(empty));

        let mut seen = Vec::new();
        player.tick(Duration::ZERO, &mut |s: ScheduledStep<'_>| seen.push(s.index));
        assert!(seen.is_empty());
        assert!(player.current_run().is_none());
        assert!(player.start(trace_of(2)).is_ok());
    }

    #[test]
    fn replacing_unticked_empty_run_is_allowed() {
        let mut player = Player::new(config(10, BusyPolicy::Replace));
        let empty = player.start(StepTrace::new()).unwrap();
        let next = player.start(trace_of(2)).unwrap();
        assert_ne!(empty, next);
        assert_eq!(player.current_run(), Some(next));
        assert_eq!(player.pending(), 2);
    }
}

//! Time-based numeric tweens and a cooperative per-frame tween scheduler.

use web_time::{Duration, Instant};

use crate::util::easing::EasingFunction;

/// Drives a value from `from` to `to` over `duration`.
///
/// A tween holds no callbacks; it is sampled with the frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    ease: EasingFunction,
    start_time: Instant,
}

/// One sample of a [`Tween`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSample {
    /// Eased value between `from` and `to`.
    pub value: f32,
    /// Raw progress in [0, 1].
    pub alpha: f32,
}

impl TweenSample {
    /// Whether this sample is the final one.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.alpha >= 1.0
    }
}

impl Tween {
    /// Tween starting at `start_time`.
    #[must_use]
    pub fn new(
        from: f32,
        to: f32,
        duration: Duration,
        ease: EasingFunction,
        start_time: Instant,
    ) -> Self {
        Self {
            from,
            to,
            duration,
            ease,
            start_time,
        }
    }

    /// Tween over [0, 1].
    #[must_use]
    pub fn unit(duration: Duration, ease: EasingFunction, start: Instant) -> Self {
        Self::new(0.0, 1.0, duration, ease, start)
    }

    /// Total duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Calculate normalized progress (0.0 to 1.0).
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start_time);

        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Eased value at `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> TweenSample {
        let alpha = self.progress(now);
        let eased = self.ease.evaluate(alpha);
        TweenSample {
            value: self.from + (self.to - self.from) * eased,
            alpha,
        }
    }
}

/// Handle to a tween scheduled on a [`Tweener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(u64);

type UpdateFn<C> = Box<dyn FnMut(&mut C, f32)>;
type CompleteFn<C> = Box<dyn FnOnce(&mut C)>;

struct ScheduledTween<C> {
    id: TweenId,
    tween: Tween,
    on_update: UpdateFn<C>,
    on_complete: Option<CompleteFn<C>>,
}

/// Runs any number of tweens cooperatively, one step per display frame.
///
/// Callbacks receive the shared context `C` passed to [`tick`](Self::tick),
/// so they can mutate state owned by the caller without shared ownership.
/// On each tick every tween reports its eased value; a tween whose progress
/// reached 1 fires its completion callback exactly once and is dropped.
pub struct Tweener<C> {
    active: Vec<ScheduledTween<C>>,
    next_id: u64,
}

impl<C> Tweener<C> {
    /// Scheduler with nothing running.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `tween`. The first update happens on the next tick.
    pub fn run(
        &mut self,
        tween: Tween,
        on_update: impl FnMut(&mut C, f32) + 'static,
        on_complete: impl FnOnce(&mut C) + 'static,
    ) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.active.push(ScheduledTween {
            id,
            tween,
            on_update: Box::new(on_update),
            on_complete: Some(Box::new(on_complete)),
        });
        id
    }

    /// Advance every tween to `now`. Returns how many are still running.
    pub fn tick(&mut self, ctx: &mut C, now: Instant) -> usize {
        self.active.retain_mut(|scheduled| {
            let sample = scheduled.tween.sample(now);
            (scheduled.on_update)(ctx, sample.value);
            if !sample.is_finished() {
                return true;
            }
            if let Some(on_complete) = scheduled.on_complete.take() {
                on_complete(ctx);
            }
            false
        });
        self.active.len()
    }

    /// Whether the tween is still scheduled.
    #[must_use]
    pub fn is_running(&self, id: TweenId) -> bool {
        self.active.iter().any(|scheduled| scheduled.id == id)
    }

    /// Number of running tweens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether nothing is running.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl<C> Default for Tweener<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for Tweener<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tweener")
            .field("active", &self.active.len())
            .finish_non_exhaustive()
    }
}

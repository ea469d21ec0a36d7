//! Ghost-based swap animations with per-bar reference counting.
//!
//! A swap request exchanges two bars in the [`BarSet`] immediately, so later
//! requests address post-swap indices even while the motion is still on
//! screen. The motion itself is carried by two ghosts on the overlay; the
//! real bars stay hidden until every animation holding them has settled.
//!
//! Lifecycle of one animated swap:
//!
//! 1. `submit`: take a hold on both bars (hiding them), spawn ghosts at their
//!    current slots, exchange the bars, schedule the tween.
//! 2. Each `tick`: the tween moves the ghosts.
//! 3. The tick on which the tween reaches 1 draws the final frame and marks
//!    the swap as settling.
//! 4. The following `tick`: destroy the ghosts and release the holds. A bar
//!    reappears only when its own hold count drops to zero.

use std::f32::consts::PI;

use glam::Vec2;
use rustc_hash::FxHashMap;
use web_time::{Duration, Instant};

use super::ghost::{Ghost, GhostId};
use super::tween::{Tween, Tweener};
use crate::chart::bars::{BarAttributes, BarSet};
use crate::error::ChartError;
use crate::layout::BarGeometry;
use crate::options::AnimationOptions;
use crate::surface::{BarSurface, OverlaySurface};
use crate::util::easing::EasingFunction;

/// Identifier of one swap animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SwapId(u64);

/// Exchange the bars at `a` and `b` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapRequest {
    /// First index.
    pub a: usize,
    /// Second index.
    pub b: usize,
    /// How long the motion takes.
    pub duration: Duration,
    /// Motion curve; the animator's default ease when `None`.
    pub ease: Option<EasingFunction>,
}

impl SwapRequest {
    /// Request a swap of `a` and `b` with the default ease.
    #[must_use]
    pub fn new(a: usize, b: usize, duration: Duration) -> Self {
        Self {
            a,
            b,
            duration,
            ease: None,
        }
    }

    /// Move the ghosts along `ease` instead of the default.
    #[must_use]
    pub fn with_ease(mut self, ease: EasingFunction) -> Self {
        self.ease = Some(ease);
        self
    }
}

/// What [`SwapAnimator::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Both indices were the same; nothing happened.
    Noop,
    /// Duration below the threshold: exchanged without animation.
    Immediate,
    /// Exchanged, with an animation in flight.
    Animated(SwapId),
}

/// Everything a swap touches, borrowed for one call.
pub struct SwapScene<'a> {
    /// The ordered bars.
    pub bars: &'a mut BarSet,
    /// Surface holding the bars.
    pub surface: &'a mut dyn BarSurface,
    /// Surface holding the ghosts.
    pub overlay: &'a mut dyn OverlaySurface,
    /// Current bar geometry, used to place ghosts.
    pub geometry: BarGeometry,
    /// Width the bar row is centred in.
    pub total_width: u32,
}

#[derive(Debug)]
struct InFlight {
    ghosts: [Ghost; 2],
    travel: f32,
}

/// State the swap tweens write into.
#[derive(Debug, Default)]
struct GhostStage {
    in_flight: FxHashMap<SwapId, InFlight>,
    finished: Vec<SwapId>,
    arc_factor: f32,
}

impl GhostStage {
    fn advance(&mut self, id: SwapId, t: f32) {
        let arc_factor = self.arc_factor;
        let Some(swap) = self.in_flight.get_mut(&id) else {
            return;
        };
        let dx = swap.travel * t;
        let lift = arc_factor * swap.travel.abs() * (PI * t).sin();
        swap.ghosts[0].offset = Vec2::new(dx, lift);
        swap.ghosts[1].offset = Vec2::new(-dx, -lift);
    }
}

/// Runs every in-flight swap animation.
#[derive(Debug)]
pub struct SwapAnimator {
    min_duration: Duration,
    default_ease: EasingFunction,
    swap_ease: EasingFunction,
    tweener: Tweener<GhostStage>,
    stage: GhostStage,
    settling: Vec<SwapId>,
    next_swap: u64,
    next_ghost: u64,
}

impl SwapAnimator {
    /// Animator with the given timing options.
    #[must_use]
    pub fn new(options: &AnimationOptions) -> Self {
        Self {
            min_duration: options.min_swap_duration(),
            default_ease: options.default_ease,
            swap_ease: options.swap_ease,
            tweener: Tweener::new(),
            stage: GhostStage {
                arc_factor: options.arc_factor.max(0.0),
                ..GhostStage::default()
            },
            settling: Vec::new(),
            next_swap: 0,
            next_ghost: 0,
        }
    }

    /// Swap two bars, animating if the duration is long enough.
    ///
    /// The bars are exchanged in `scene.bars` before this returns, whatever
    /// the outcome.
    ///
    /// # Errors
    ///
    /// [`ChartError::Lookup`] if either index is out of range. Nothing is
    /// changed and other animations are unaffected.
    pub fn submit(
        &mut self,
        request: SwapRequest,
        now: Instant,
        scene: &mut SwapScene<'_>,
    ) -> Result<SwapOutcome, ChartError> {
        let SwapRequest {
            a,
            b,
            duration,
            ease,
        } = request;
        let first = *scene.bars.checked(a)?.attributes();
        let second = *scene.bars.checked(b)?.attributes();
        if a == b {
            return Ok(SwapOutcome::Noop);
        }

        if duration < self.min_duration {
            scene.bars.swap(a, b)?;
            scene.surface.swap_bars(a, b);
            return Ok(SwapOutcome::Immediate);
        }

        let count = scene.bars.len();
        let origin_a = Vec2::new(
            scene.geometry.slot_x(a, count, scene.total_width),
            0.0,
        );
        let origin_b = Vec2::new(
            scene.geometry.slot_x(b, count, scene.total_width),
            0.0,
        );

        let ghosts = [
            self.spawn_ghost(scene, a, first, origin_a)?,
            self.spawn_ghost(scene, b, second, origin_b)?,
        ];

        scene.bars.swap(a, b)?;
        scene.surface.swap_bars(a, b);

        let id = SwapId(self.next_swap);
        self.next_swap += 1;
        let _ = self.stage.in_flight.insert(
            id,
            InFlight {
                ghosts,
                travel: origin_b.x - origin_a.x,
            },
        );
        let _ = self.tweener.run(
            Tween::unit(duration, ease.unwrap_or(self.default_ease), now),
            move |stage: &mut GhostStage, t| stage.advance(id, t),
            move |stage: &mut GhostStage| stage.finished.push(id),
        );
        log::trace!("swap {a} <-> {b} animating over {duration:?}");
        Ok(SwapOutcome::Animated(id))
    }

    /// Put a ghost over bar `index` and take a hold on the bar.
    fn spawn_ghost(
        &mut self,
        scene: &mut SwapScene<'_>,
        index: usize,
        attributes: BarAttributes,
        origin: Vec2,
    ) -> Result<Ghost, ChartError> {
        let bar = scene.bars.checked_mut(index)?;
        let ghost = Ghost {
            id: GhostId(self.next_ghost),
            bar: bar.id(),
            attributes,
            origin,
            offset: Vec2::ZERO,
        };
        self.next_ghost += 1;
        scene
            .overlay
            .spawn_ghost(ghost.id, &ghost.attributes, ghost.position());
        if bar.begin_animation() {
            scene.surface.set_bar_visible(index, false);
        }
        Ok(ghost)
    }

    /// Submit each pair independently with a shared duration, moving along
    /// the swap ease.
    ///
    /// A failing pair does not stop the others.
    pub fn submit_bulk(
        &mut self,
        pairs: &[(usize, usize)],
        duration: Duration,
        now: Instant,
        scene: &mut SwapScene<'_>,
    ) -> Vec<Result<SwapOutcome, ChartError>> {
        pairs
            .iter()
            .map(|&(a, b)| {
                let request =
                    SwapRequest::new(a, b, duration).with_ease(self.swap_ease);
                self.submit(request, now, scene)
            })
            .collect()
    }

    /// Advance all animations to `now`.
    ///
    /// Returns the swaps that settled on this tick (ghosts destroyed, holds
    /// released).
    pub fn tick(
        &mut self,
        now: Instant,
        bars: &mut BarSet,
        surface: &mut dyn BarSurface,
        overlay: &mut dyn OverlaySurface,
    ) -> Vec<SwapId> {
        let settled = std::mem::take(&mut self.settling);
        for &id in &settled {
            self.settle(id, bars, surface, overlay);
        }

        let _ = self.tweener.tick(&mut self.stage, now);
        for swap in self.stage.in_flight.values() {
            for ghost in &swap.ghosts {
                overlay.move_ghost(ghost.id, ghost.offset);
            }
        }
        self.settling.append(&mut self.stage.finished);
        settled
    }

    fn settle(
        &mut self,
        id: SwapId,
        bars: &mut BarSet,
        surface: &mut dyn BarSurface,
        overlay: &mut dyn OverlaySurface,
    ) {
        let Some(swap) = self.stage.in_flight.remove(&id) else {
            return;
        };
        for ghost in &swap.ghosts {
            overlay.destroy_ghost(ghost.id);
            let Some(index) = bars.position_of(ghost.bar) else {
                log::debug!("bar of ghost {:?} removed mid-swap", ghost.id);
                continue;
            };
            if let Ok(bar) = bars.checked_mut(index) {
                if bar.end_animation() {
                    surface.set_bar_visible(index, true);
                }
            }
        }
        log::debug!("swap {id:?} settled");
    }

    /// Ghosts of an in-flight swap.
    #[must_use]
    pub fn ghosts(&self, id: SwapId) -> Option<&[Ghost; 2]> {
        self.stage.in_flight.get(&id).map(|swap| &swap.ghosts)
    }

    /// Whether the swap has not settled yet.
    #[must_use]
    pub fn is_in_flight(&self, id: SwapId) -> bool {
        self.stage.in_flight.contains_key(&id)
    }

    /// Number of swaps that have not settled.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.stage.in_flight.len()
    }

    /// Whether nothing is animating.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.stage.in_flight.is_empty()
    }
}

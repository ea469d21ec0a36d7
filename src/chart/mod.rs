//! The bar chart: snapshot queue, renderer, and swap animator wired to a
//! once-per-frame pump.
//!
//! Snapshots are [`push`](BarChart::push)ed whenever the producer has one.
//! The host calls [`frame`](BarChart::frame) once per display frame; each
//! call advances running swap animations and applies at most one queued
//! snapshot. Once the queue drains the pump goes idle until the next push.

pub mod bars;
pub mod queue;
pub mod renderer;
pub mod snapshot;

use web_time::Instant;

use self::bars::BarSet;
use self::queue::SnapshotQueue;
use self::renderer::BarRenderer;
use self::snapshot::Snapshot;
use crate::animation::{SwapAnimator, SwapOutcome, SwapScene};
use crate::error::ChartError;
use crate::layout::{BarGeometry, LayoutEngine};
use crate::options::ChartOptions;
use crate::surface::{BarSurface, OverlaySurface};

/// Result of applying one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// Geometry the snapshot was drawn with.
    pub geometry: BarGeometry,
    /// Swaps exchanged (animated or immediately).
    pub swaps_started: usize,
    /// Swap requests rejected with a lookup error.
    pub swaps_failed: usize,
}

/// What one call to [`BarChart::frame`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Whether a snapshot was applied.
    pub applied: bool,
    /// Swaps exchanged by the applied snapshot.
    pub swaps_started: usize,
    /// Swap requests of the applied snapshot that failed.
    pub swaps_failed: usize,
    /// Swap animations that settled this frame.
    pub swaps_settled: usize,
    /// Snapshots still queued afterwards.
    pub pending: usize,
}

/// An animated bar chart drawing to a bar surface `S` and a ghost overlay
/// `O`.
///
/// Surfaces are attached after construction; operations that need one fail
/// with [`ChartError::Precondition`] until it is.
#[derive(Debug)]
pub struct BarChart<S, O> {
    renderer: BarRenderer,
    layout: LayoutEngine,
    bars: BarSet,
    queue: SnapshotQueue,
    animator: SwapAnimator,
    surface: Option<S>,
    overlay: Option<O>,
    pumping: bool,
    geometry: Option<BarGeometry>,
}

impl<S: BarSurface, O: OverlaySurface> BarChart<S, O> {
    /// Chart with no surfaces attached and nothing queued.
    #[must_use]
    pub fn new(options: &ChartOptions) -> Self {
        Self {
            renderer: BarRenderer::new(&options.colors, &options.layout),
            layout: LayoutEngine::new(&options.layout),
            bars: BarSet::new(),
            queue: SnapshotQueue::new(),
            animator: SwapAnimator::new(&options.animation),
            surface: None,
            overlay: None,
            pumping: false,
            geometry: None,
        }
    }

    /// Attach the bar surface, sizing it to the layout height. Returns the
    /// previous one.
    pub fn attach_surface(&mut self, mut surface: S) -> Option<S> {
        surface.set_height(self.layout.total_height());
        self.surface.replace(surface)
    }

    /// Attach the ghost overlay, returning the previous one.
    pub fn attach_overlay(&mut self, overlay: O) -> Option<O> {
        self.overlay.replace(overlay)
    }

    /// Whether both surfaces are attached.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.surface.is_some() && self.overlay.is_some()
    }

    /// Queue a snapshot. Returns how many pending snapshots it superseded.
    ///
    /// The first snapshot pushed into an empty, idle chart arms the pump.
    pub fn push(&mut self, snapshot: Snapshot) -> usize {
        let was_empty = self.queue.is_empty();
        let dropped = self.queue.push(snapshot);
        if was_empty && !self.pumping {
            self.pumping = true;
            log::trace!("pump armed");
        }
        dropped
    }

    /// Run one display frame.
    ///
    /// Running swap animations advance first, so a swap started by this
    /// frame's snapshot first moves on the next frame. Then, if the pump is
    /// armed, one snapshot is dequeued and applied. Per-swap lookup failures
    /// are counted in the report and do not stop the pump.
    ///
    /// # Errors
    ///
    /// [`ChartError::Precondition`] if a snapshot is due but a surface it
    /// needs is missing. The snapshot stays queued.
    pub fn frame(&mut self, now: Instant) -> Result<FrameReport, ChartError> {
        let mut report = FrameReport::default();
        if let (Some(surface), Some(overlay)) =
            (self.surface.as_mut(), self.overlay.as_mut())
        {
            report.swaps_settled = self
                .animator
                .tick(now, &mut self.bars, surface, overlay)
                .len();
        }

        if self.pumping {
            if let Some(snapshot) = self.queue.peek() {
                self.check_ready(snapshot)?;
            }
            if let Some(snapshot) = self.queue.pop() {
                let applied = self.apply(&snapshot, now)?;
                report.applied = true;
                report.swaps_started = applied.swaps_started;
                report.swaps_failed = applied.swaps_failed;
            }
            if self.queue.is_empty() {
                self.pumping = false;
                log::trace!("pump drained");
            }
        }

        report.pending = self.queue.len();
        Ok(report)
    }

    fn check_ready(&self, snapshot: &Snapshot) -> Result<(), ChartError> {
        let missing = if self.surface.is_none() {
            ChartError::missing_bar_surface()
        } else if Self::wants_swaps(snapshot) && self.overlay.is_none() {
            ChartError::missing_overlay()
        } else {
            return Ok(());
        };
        log::error!("snapshot not applied: {missing}");
        Err(missing)
    }

    fn wants_swaps(snapshot: &Snapshot) -> bool {
        snapshot.animate_swaps
            && (snapshot.focused_swap().is_some()
                || !snapshot.bulk_swaps.is_empty())
    }

    /// Render `snapshot` and start the swaps it requests.
    ///
    /// Swaps are only submitted when `animate_swaps` is set: the focused
    /// pair (if `swapping`) followed by every bulk pair, all lasting the
    /// snapshot's step duration.
    ///
    /// # Errors
    ///
    /// [`ChartError::Precondition`] if the bar surface is missing, or the
    /// overlay is missing and the snapshot requests swaps. Nothing is drawn
    /// in that case.
    pub fn apply(
        &mut self,
        snapshot: &Snapshot,
        now: Instant,
    ) -> Result<Applied, ChartError> {
        self.check_ready(snapshot)?;
        let surface = self
            .surface
            .as_mut()
            .ok_or_else(ChartError::missing_bar_surface)?;

        let geometry = self.renderer.render(
            snapshot,
            &mut self.layout,
            &mut self.bars,
            surface,
        );
        self.geometry = Some(geometry);
        let mut applied = Applied {
            geometry,
            swaps_started: 0,
            swaps_failed: 0,
        };
        if !Self::wants_swaps(snapshot) {
            return Ok(applied);
        }

        let overlay =
            self.overlay.as_mut().ok_or_else(ChartError::missing_overlay)?;
        let pairs: Vec<(usize, usize)> = snapshot
            .focused_swap()
            .into_iter()
            .chain(snapshot.bulk_swaps.iter().copied())
            .collect();
        let mut scene = SwapScene {
            bars: &mut self.bars,
            surface,
            overlay,
            geometry,
            total_width: self.layout.total_width(),
        };
        let results = self.animator.submit_bulk(
            &pairs,
            snapshot.step_duration(),
            now,
            &mut scene,
        );
        for (result, (a, b)) in results.into_iter().zip(pairs) {
            match result {
                Ok(SwapOutcome::Noop) => {}
                Ok(_) => applied.swaps_started += 1,
                Err(e) => {
                    log::warn!("swap {a} <-> {b} rejected: {e}");
                    applied.swaps_failed += 1;
                }
            }
        }
        Ok(applied)
    }

    /// Bars in display order.
    #[must_use]
    pub fn bars(&self) -> &BarSet {
        &self.bars
    }

    /// Geometry of the last applied snapshot.
    #[must_use]
    pub fn geometry(&self) -> Option<BarGeometry> {
        self.geometry
    }

    /// Layout engine and its cache.
    #[must_use]
    pub fn layout(&self) -> &LayoutEngine {
        &self.layout
    }

    /// Attached bar surface.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Attached ghost overlay.
    #[must_use]
    pub fn overlay(&self) -> Option<&O> {
        self.overlay.as_ref()
    }

    /// Number of queued snapshots.
    #[must_use]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Snapshots dropped by coalescing so far.
    #[must_use]
    pub fn dropped_total(&self) -> u64 {
        self.queue.dropped_total()
    }

    /// Whether the pump will apply a snapshot on the next frame.
    #[must_use]
    pub fn is_pumping(&self) -> bool {
        self.pumping
    }

    /// Whether any swap animation is still in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.animator.is_idle()
    }

    /// Whether there is nothing queued and nothing animating.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty() && self.animator.is_idle()
    }
}

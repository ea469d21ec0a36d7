//! Snapshot delivery from a producer to the chart.
//!
//! The producer side ([`SnapshotSender`]) may live on any thread; the
//! consumer side ([`SnapshotFeed`]) is drained on the frame thread and
//! forwards everything it received into a [`BarChart`]. [`spawn_reader`]
//! turns a stream of JSON lines into snapshots on a background thread.

pub mod demo;

use std::io::BufRead;
use std::sync::mpsc;
use std::thread::JoinHandle;

use crate::chart::snapshot::Snapshot;
use crate::chart::BarChart;
use crate::error::ChartError;
use crate::surface::{BarSurface, OverlaySurface};

/// Create a connected sender / feed pair.
#[must_use]
pub fn channel() -> (SnapshotSender, SnapshotFeed) {
    let (tx, rx) = mpsc::channel();
    (
        SnapshotSender { tx },
        SnapshotFeed {
            rx,
            disconnected: false,
        },
    )
}

/// Producer half of a snapshot feed.
#[derive(Debug, Clone)]
pub struct SnapshotSender {
    tx: mpsc::Sender<Snapshot>,
}

impl SnapshotSender {
    /// Deliver a snapshot. Returns `false` once the feed has been dropped.
    pub fn send(&self, snapshot: Snapshot) -> bool {
        self.tx.send(snapshot).is_ok()
    }
}

/// Consumer half of a snapshot feed.
#[derive(Debug)]
pub struct SnapshotFeed {
    rx: mpsc::Receiver<Snapshot>,
    disconnected: bool,
}

impl SnapshotFeed {
    /// Next delivered snapshot, without blocking.
    pub fn try_recv(&mut self) -> Option<Snapshot> {
        match self.rx.try_recv() {
            Ok(snapshot) => Some(snapshot),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.disconnected = true;
                None
            }
        }
    }

    /// Push everything delivered since the last call into `chart`.
    /// Returns how many snapshots were forwarded.
    pub fn drain_into<S: BarSurface, O: OverlaySurface>(
        &mut self,
        chart: &mut BarChart<S, O>,
    ) -> usize {
        let mut forwarded = 0;
        while let Some(snapshot) = self.try_recv() {
            let _ = chart.push(snapshot);
            forwarded += 1;
        }
        forwarded
    }

    /// Whether every sender is gone and nothing more will arrive.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.disconnected
    }
}

/// Parse one feed line. Blank lines yield `None`.
///
/// # Errors
///
/// [`ChartError::Format`] if the line is not a valid snapshot.
pub fn parse_line(line: &str) -> Result<Option<Snapshot>, ChartError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    Snapshot::from_json(line).map(Some)
}

/// Counts reported by a finished reader thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderStats {
    /// Snapshots parsed and sent.
    pub accepted: u64,
    /// Lines skipped as malformed.
    pub rejected: u64,
}

/// Read JSON snapshot lines from `reader` on a background thread and send
/// them to `sender`.
///
/// Malformed lines are logged and skipped. The thread ends at end of input,
/// on a read error, or when the feed is dropped.
///
/// # Errors
///
/// Returns [`std::io::Error`] if the thread fails to spawn.
pub fn spawn_reader<R>(
    reader: R,
    sender: SnapshotSender,
) -> std::io::Result<JoinHandle<ReaderStats>>
where
    R: BufRead + Send + 'static,
{
    std::thread::Builder::new()
        .name("snapshot-reader".into())
        .spawn(move || read_lines(reader, &sender))
}

fn read_lines<R: BufRead>(reader: R, sender: &SnapshotSender) -> ReaderStats {
    let mut stats = ReaderStats::default();
    for (number, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("snapshot feed read failed: {e}");
                break;
            }
        };
        match parse_line(&line) {
            Ok(Some(snapshot)) => {
                if !sender.send(snapshot) {
                    log::debug!("snapshot feed closed, reader stopping");
                    break;
                }
                stats.accepted += 1;
            }
            Ok(None) => {}
            Err(e) => {
                log::warn!("skipping feed line {}: {e}", number + 1);
                stats.rejected += 1;
            }
        }
    }
    log::info!(
        "snapshot reader done: {} accepted, {} rejected",
        stats.accepted,
        stats.rejected
    );
    stats
}

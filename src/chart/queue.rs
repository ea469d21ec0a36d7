//! Pending-snapshot buffer with a "latest wins" coalescing policy.
//!
//! The frame pump takes at most one snapshot per display frame. When
//! snapshots arrive faster than that, superseded coalescible snapshots are
//! dropped so memory stays bounded and the newest state is always shown.
//! Snapshots marked non-coalescible (see [`Snapshot::preserved`]) are never
//! dropped, so every one of them is rendered individually.

use std::collections::VecDeque;

use super::snapshot::Snapshot;

/// FIFO of snapshots waiting for a frame.
#[derive(Debug, Clone, Default)]
pub struct SnapshotQueue {
    pending: VecDeque<Snapshot>,
    dropped_total: u64,
}

impl SnapshotQueue {
    /// Empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `snapshot`, coalescing if it allows it. Returns how many
    /// pending snapshots were dropped.
    ///
    /// Only coalescible snapshots queued before it are dropped; the relative
    /// order of everything kept is unchanged.
    pub fn push(&mut self, snapshot: Snapshot) -> usize {
        let coalesce = snapshot.allow_coalesce;
        self.pending.push_back(snapshot);
        if !coalesce || self.pending.len() <= 1 {
            return 0;
        }

        let before = self.pending.len();
        let newest = self.pending.pop_back();
        self.pending.retain(|pending| !pending.allow_coalesce);
        self.pending.extend(newest);

        let dropped = before - self.pending.len();
        if dropped > 0 {
            self.dropped_total += dropped as u64;
            log::debug!(
                "coalesced {dropped} snapshot(s), {} pending",
                self.pending.len()
            );
        }
        dropped
    }

    /// Remove and return the oldest pending snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.pending.pop_front()
    }

    /// Oldest pending snapshot.
    #[must_use]
    pub fn peek(&self) -> Option<&Snapshot> {
        self.pending.front()
    }

    /// Number of pending snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Snapshots dropped by coalescing since creation.
    #[must_use]
    pub fn dropped_total(&self) -> u64 {
        self.dropped_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(tag: f64) -> Snapshot {
        Snapshot::new(vec![tag])
    }

    fn tags(queue: &SnapshotQueue) -> Vec<f64> {
        queue.pending.iter().map(|s| s.values[0]).collect()
    }

    #[test]
    fn burst_of_coalescible_keeps_only_the_latest() {
        let mut queue = SnapshotQueue::new();
        assert_eq!(queue.push(snap(1.0)), 0);
        for tag in 2..=5 {
            assert_eq!(queue.push(snap(f64::from(tag))), 1);
        }
        assert_eq!(tags(&queue), vec![5.0]);
        assert_eq!(queue.dropped_total(), 4);
        assert_eq!(queue.pop().unwrap().values, vec![5.0]);
        assert!(queue.pop().is_none());
    }

    #[test]
    fn non_coalescible_arrival_drops_nothing() {
        let mut queue = SnapshotQueue::new();
        let _ = queue.push(snap(1.0));
        let _ = queue.push(snap(2.0));
        assert_eq!(queue.push(snap(3.0).preserved()), 0);
        assert_eq!(tags(&queue), vec![2.0, 3.0]);
    }

    #[test]
    fn preserved_snapshots_survive_later_coalescing() {
        let mut queue = SnapshotQueue::new();
        let _ = queue.push(snap(1.0));
        let _ = queue.push(snap(2.0).preserved());
        let _ = queue.push(snap(3.0));
        let _ = queue.push(snap(4.0).preserved());
        assert_eq!(queue.push(snap(5.0)), 1);
        assert_eq!(tags(&queue), vec![2.0, 4.0, 5.0]);
    }

    #[test]
    fn fifo_order() {
        let mut queue = SnapshotQueue::new();
        let _ = queue.push(snap(1.0).preserved());
        let _ = queue.push(snap(2.0).preserved());
        assert_eq!(queue.peek().unwrap().values, vec![1.0]);
        assert_eq!(queue.pop().unwrap().values, vec![1.0]);
        assert_eq!(queue.pop().unwrap().values, vec![2.0]);
        assert!(queue.is_empty());
    }
}

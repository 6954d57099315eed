//! Step observers: how a solve reports its merges to the outside.
//!
//! The solver calls [`StepObserver::on_step`] synchronously once per
//! merge, after the group list has been updated, and never waits on the
//! observer for anything else. An observer that needs to hand state to
//! another thread should copy what it needs and return, as
//! [`ChannelObserver`] does.

use crossbeam_channel::{Receiver, Sender, TrySendError};
use gridlink_core::Group;

use crate::metrics::MergeRecord;

/// Receives the group list after every merge.
pub trait StepObserver {
    /// Called once per merge with the merge's record and the groups that
    /// remain after it.
    fn on_step(&mut self, record: &MergeRecord, groups: &[Group]);
}

impl<F> StepObserver for F
where
    F: FnMut(&MergeRecord, &[Group]),
{
    fn on_step(&mut self, record: &MergeRecord, groups: &[Group]) {
        self(record, groups)
    }
}

/// Observer that ignores every step.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _record: &MergeRecord, _groups: &[Group]) {}
}

/// An owned copy of the solver state after one merge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepSnapshot {
    /// The merge that produced this state.
    pub record: MergeRecord,
    /// Groups remaining after the merge.
    pub groups: Vec<Group>,
}

/// Forwards a [`StepSnapshot`] per merge over a crossbeam channel.
///
/// Sending uses `try_send`: when a bounded channel is full, or the
/// receiver has been dropped, the snapshot is discarded and counted in
/// [`dropped`](ChannelObserver::dropped). The solver is never blocked.
#[derive(Debug)]
pub struct ChannelObserver {
    tx: Sender<StepSnapshot>,
    dropped: u64,
}

impl ChannelObserver {
    /// Wrap an existing sender.
    pub fn new(tx: Sender<StepSnapshot>) -> Self {
        Self { tx, dropped: 0 }
    }

    /// An observer over a fresh bounded channel of `capacity` snapshots.
    pub fn bounded(capacity: usize) -> (Self, Receiver<StepSnapshot>) {
        let (tx, rx) = crossbeam_channel::bounded(capacity);
        (Self::new(tx), rx)
    }

    /// An observer over a fresh unbounded channel.
    pub fn unbounded() -> (Self, Receiver<StepSnapshot>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self::new(tx), rx)
    }

    /// Snapshots discarded because the channel was full or closed.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl StepObserver for ChannelObserver {
    fn on_step(&mut self, record: &MergeRecord, groups: &[Group]) {
        let snapshot = StepSnapshot {
            record: record.clone(),
            groups: groups.to_vec(),
        };
        match self.tx.try_send(snapshot) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => {
                self.dropped += 1;
            }
        }
    }
}

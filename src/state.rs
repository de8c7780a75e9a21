use std::collections::VecDeque;
use std::time::Instant;
use tokio::sync::Mutex;

pub(crate) const MIN_SPEED: i32 = -255;
pub(crate) const MAX_SPEED: i32 = 255;

const HISTORY_CAPACITY: usize = 100;

/// One recorded motion update, stamped with seconds since server start.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Sample {
    pub(crate) elapsed: f64,
    pub(crate) left: i32,
    pub(crate) right: i32,
}

/// Consistent read-only view handed to observers.
#[derive(Debug, Clone)]
pub(crate) struct Snapshot {
    pub(crate) left: i32,
    pub(crate) right: i32,
    pub(crate) history: Vec<Sample>,
}

/// Simulated wheel state, shared by every connection handler and observer.
/// All access goes through the mutex; the critical section is in-memory only.
pub(crate) struct DeviceState {
    started: Instant,
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    left: i32,
    right: i32,
    history: VecDeque<Sample>,
}

impl DeviceState {
    pub(crate) fn new() -> Self {
        Self {
            started: Instant::now(),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Sets both wheel speeds, clamped to [-255, 255], and records a history
    /// sample, evicting the oldest once 100 are held.
    pub(crate) async fn apply_motion(&self, left: i32, right: i32) {
        let left = left.clamp(MIN_SPEED, MAX_SPEED);
        let right = right.clamp(MIN_SPEED, MAX_SPEED);
        let elapsed = self.started.elapsed().as_secs_f64();

        let mut inner = self.inner.lock().await;
        inner.left = left;
        inner.right = right;
        if inner.history.len() == HISTORY_CAPACITY {
            inner.history.pop_front();
        }
        inner.history.push_back(Sample {
            elapsed,
            left,
            right,
        });
    }

    pub(crate) async fn snapshot(&self) -> Snapshot {
        let inner = self.inner.lock().await;
        Snapshot {
            left: inner.left,
            right: inner.right,
            history: inner.history.iter().cloned().collect(),
        }
    }
}

//! A thread-safe toast queue with per-entry expiry.
//!
//! Toasts are kept in insertion order. Every `push` spawns a Tokio timer that
//! removes the toast once its time-to-live elapses; `remove` cancels that timer.
//! Timers only hold a weak reference to the queue, so dropping the last handle
//! cancels everything still pending.

use super::types::{Toast, ToastKind};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use uuid::Uuid;

struct Inner {
    toasts: RwLock<Vec<Toast>>,
    timers: Mutex<HashMap<String, JoinHandle<()>>>,
    ttl: Duration,
}

impl Drop for Inner {
    fn drop(&mut self) {
        for (_, handle) in self.timers.get_mut().drain() {
            handle.abort();
        }
    }
}

/// Cloneable handle to a shared toast queue.
#[derive(Clone)]
pub struct NotificationQueue {
    inner: Arc<Inner>,
}

impl NotificationQueue {
    /// Creates an empty queue whose toasts expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                toasts: RwLock::new(Vec::new()),
                timers: Mutex::new(HashMap::new()),
                ttl,
            }),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.inner.ttl
    }

    /// Appends a toast and schedules its expiry.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn push(&self, message: impl Into<String>, kind: ToastKind) -> Toast {
        let toast = Toast {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            kind,
            created_at: Utc::now(),
        };

        self.inner.toasts.write().await.push(toast.clone());

        // Held across the spawn so the timer cannot run `expire` before its
        // handle is registered.
        let mut timers = self.inner.timers.lock().await;
        let weak = Arc::downgrade(&self.inner);
        let id = toast.id.clone();
        let ttl = self.inner.ttl;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            expire(weak, &id).await;
        });
        timers.insert(toast.id.clone(), handle);
        drop(timers);

        tracing::debug!(id = %toast.id, kind = %toast.kind, "Toast queued");
        toast
    }

    /// Dismisses a toast before it expires.
    ///
    /// Returns `false` if no toast with that id is visible.
    pub async fn remove(&self, id: &str) -> bool {
        if let Some(handle) = self.inner.timers.lock().await.remove(id) {
            handle.abort();
        }

        let mut toasts = self.inner.toasts.write().await;
        let before = toasts.len();
        toasts.retain(|t| t.id != id);
        before != toasts.len()
    }

    /// Snapshot of the visible toasts, oldest first.
    pub async fn list(&self) -> Vec<Toast> {
        self.inner.toasts.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.toasts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.toasts.read().await.is_empty()
    }

    /// Drops every toast and cancels all pending timers.
    pub async fn clear(&self) {
        for (_, handle) in self.inner.timers.lock().await.drain() {
            handle.abort();
        }
        self.inner.toasts.write().await.clear();
    }
}

async fn expire(weak: Weak<Inner>, id: &str) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    // The running task owns this handle; just forget it.
    inner.timers.lock().await.remove(id);
    inner.toasts.write().await.retain(|t| t.id != id);
    tracing::debug!(id, "Toast expired");
}

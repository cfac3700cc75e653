//! In-process toast notifications.
//!
//! A [`NotificationQueue`] holds the toasts currently visible to the user.
//! Each toast carries its own expiry timer; dismissing a toast cancels it.

pub mod queue;
pub mod types;

pub use queue::NotificationQueue;
pub use types::{Toast, ToastKind};

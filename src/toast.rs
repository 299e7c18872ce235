use std::time::{Duration, Instant};

const TOAST_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Danger,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    deadline: Instant,
}

/// Single-slot transient notification channel.
///
/// At most one toast is ever visible. `notify` replaces the current toast and
/// its pending expiry wholesale, so two calls in quick succession leave one
/// toast showing the second message, expiring once, measured from the second
/// call. No queueing, no stacking.
#[derive(Debug)]
pub struct Toasts {
    current: Option<Toast>,
    ttl: Duration,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            current: None,
            ttl: TOAST_TTL,
        }
    }

    #[cfg(test)]
    fn with_ttl(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    /// Show a toast, replacing any currently visible one and restarting the
    /// expiry timer from now.
    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.current = Some(Toast {
            kind,
            message: message.into(),
            deadline: Instant::now() + self.ttl,
        });
    }

    /// Dismiss early, cancelling the pending auto-hide.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Expire the toast once its deadline passes. Called every UI frame.
    pub fn tick(&mut self, now: Instant) {
        if let Some(toast) = &self.current {
            if now >= toast.deadline {
                self.current = None;
            }
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_makes_toast_visible_immediately() {
        let mut toasts = Toasts::new();
        assert!(toasts.current().is_none());
        toasts.notify(ToastKind::Success, "Link copiado!");
        let toast = toasts.current().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Link copiado!");
    }

    #[test]
    fn second_notify_replaces_and_restarts_timer() {
        let mut toasts = Toasts::new();
        toasts.notify(ToastKind::Success, "first");
        let first_deadline = toasts.current().unwrap().deadline;

        std::thread::sleep(Duration::from_millis(5));
        toasts.notify(ToastKind::Warning, "second");

        let toast = toasts.current().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, ToastKind::Warning);
        // Expiry is measured from the second call, not the first.
        assert!(toast.deadline > first_deadline);
    }

    #[test]
    fn toast_expires_exactly_once_at_deadline() {
        let mut toasts = Toasts::with_ttl(Duration::from_millis(10));
        toasts.notify(ToastKind::Success, "hello");
        let deadline = toasts.current().unwrap().deadline;

        toasts.tick(deadline - Duration::from_millis(1));
        assert!(toasts.current().is_some());

        toasts.tick(deadline);
        assert!(toasts.current().is_none());

        // Further ticks are no-ops; there is no second expiry to observe.
        toasts.tick(deadline + Duration::from_secs(1));
        assert!(toasts.current().is_none());
    }

    #[test]
    fn dismiss_cancels_pending_expiry() {
        let mut toasts = Toasts::with_ttl(Duration::from_secs(60));
        toasts.notify(ToastKind::Danger, "oops");
        toasts.dismiss();
        assert!(toasts.current().is_none());

        // A toast shown after the dismissal is unaffected by the old timer.
        toasts.notify(ToastKind::Success, "again");
        toasts.tick(Instant::now());
        assert_eq!(toasts.current().unwrap().message, "again");
    }
}

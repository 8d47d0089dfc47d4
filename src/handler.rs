//! Toast callback surface and completion signalling

use std::sync::mpsc;

/// Why the platform reported a toast as gone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// User closed the toast
    UserCanceled,
    /// Owning application hid the toast
    ApplicationHidden,
    /// Toast aged out into the action center
    TimedOut,
}

impl DismissReason {
    /// Map the platform's raw dismissal code
    #[cfg_attr(not(windows), allow(dead_code))]
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::UserCanceled),
            1 => Some(Self::ApplicationHidden),
            2 => Some(Self::TimedOut),
            _ => None,
        }
    }
}

/// Terminal events a displayed toast can report back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(windows), allow(dead_code))]
pub enum ToastEvent {
    /// Toast body was activated
    Activated,
    /// An action button was activated, carrying its index
    ActivatedAction(i32),
    /// Toast went away
    Dismissed(DismissReason),
    /// Platform could not keep the toast up
    Failed,
}

/// Receiver of toast callbacks. Calls arrive on platform callback
/// threads, after the show call has already returned.
pub trait ToastHandler: Send + Sync {
    #[cfg_attr(not(windows), allow(dead_code))]
    fn handle(&self, event: ToastEvent);
}

/// Handler that forwards the first event into a channel, letting the
/// delivery wait stop as soon as the toast settles.
pub struct CompletionRelay {
    tx: mpsc::Sender<ToastEvent>,
}

impl CompletionRelay {
    /// Create the relay and the receiving half for the waiter
    pub fn channel() -> (Self, mpsc::Receiver<ToastEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }
}

impl ToastHandler for CompletionRelay {
    fn handle(&self, event: ToastEvent) {
        // The waiter may have timed out and dropped the receiver
        let _ = self.tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Dismiss Reason Tests ==========

    #[test]
    fn test_from_raw_known_codes() {
        assert_eq!(DismissReason::from_raw(0), Some(DismissReason::UserCanceled));
        assert_eq!(DismissReason::from_raw(1), Some(DismissReason::ApplicationHidden));
        assert_eq!(DismissReason::from_raw(2), Some(DismissReason::TimedOut));
    }

    #[test]
    fn test_from_raw_unknown_codes() {
        assert_eq!(DismissReason::from_raw(3), None);
        assert_eq!(DismissReason::from_raw(-1), None);
    }

    // ========== Completion Relay Tests ==========

    #[test]
    fn test_relay_forwards_events() {
        let (relay, rx) = CompletionRelay::channel();
        relay.handle(ToastEvent::Activated);
        assert_eq!(rx.try_recv(), Ok(ToastEvent::Activated));
    }

    #[test]
    fn test_relay_forwards_from_another_thread() {
        let (relay, rx) = CompletionRelay::channel();
        std::thread::spawn(move || relay.handle(ToastEvent::Dismissed(DismissReason::TimedOut)))
            .join()
            .unwrap();
        assert_eq!(rx.try_recv(), Ok(ToastEvent::Dismissed(DismissReason::TimedOut)));
    }

    #[test]
    fn test_relay_survives_a_dropped_receiver() {
        let (relay, rx) = CompletionRelay::channel();
        drop(rx);
        relay.handle(ToastEvent::Failed);
    }
}

//! Final status codes reported to the caller

/// Result of one notification run, surfaced as the process exit code.
///
/// The numeric values are a contract with the backup scheduler scripts
/// that spawn this binary, so every variant pins its ordinal explicitly.
/// Only a subset is produced today; the callback-derived values (clicked,
/// dismissed, timed out, hidden, not activated) and the launch failures
/// keep their slots for callers that already match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[allow(dead_code)]
pub enum Outcome {
    /// Toast was handed to the notification platform
    ToastShown = 0,
    /// User clicked the toast body
    ToastClicked = 1,
    /// User dismissed the toast
    ToastDismissed = 2,
    /// Toast aged out without interaction
    ToastTimeOut = 3,
    /// Application hid the toast
    ToastHided = 4,
    /// Toast was never activated
    ToastNotActivated = 5,
    /// Platform rejected the toast at submission
    ToastFailed = 6,
    /// Host cannot display toast notifications
    SystemNotSupported = 7,
    /// Command line contained an option outside the accepted set
    UnhandledOption = 8,
    /// More text lines were supplied than the template holds
    MultipleTextNotSupported = 9,
    /// Identity registration or notifier creation failed
    InitializationFailure = 10,
    /// Toast could not be launched
    ToastNotLaunched = 11,
}

impl Outcome {
    /// Numeric exit code for this outcome
    pub fn exit_code(self) -> u8 {
        self as u8
    }
}

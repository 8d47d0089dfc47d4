//! Notification delivery sequence

use std::ffi::OsString;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use tracing::{debug, error};

use crate::cli;
use crate::facility::ToastFacility;
use crate::handler::CompletionRelay;
use crate::outcome::Outcome;
use crate::template::ToastTemplate;

/// How long a submitted toast may take to settle before the process exits
pub const COMPLETION_WAIT: Duration = Duration::from_secs(15);

/// Run one notification delivery from command-line arguments.
///
/// The steps are fixed: capability gate, argument parsing, identity
/// configuration plus initialization, show, bounded completion wait.
/// The first failing step selects the outcome. Callback events only
/// shorten the wait; a toast that was submitted reports ToastShown no
/// matter how it settles.
pub fn run<F: ToastFacility>(argv: &[OsString], facility: &mut F, wait: Duration) -> Outcome {
    if !facility.is_compatible() {
        error!("Toast notifications are not supported on this host");
        return Outcome::SystemNotSupported;
    }

    let request = match cli::parse(argv) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("{err}");
            return Outcome::UnhandledOption;
        }
    };

    facility.set_app_name(&request.app_name);
    facility.set_app_id(&request.app_user_model_id);
    if let Err(err) = facility.initialize() {
        error!("Initialization failed: {err}");
        return Outcome::InitializationFailure;
    }

    let template = ToastTemplate::from_request(&request);
    let (relay, completion) = CompletionRelay::channel();
    if let Err(err) = facility.show(&template, Arc::new(relay)) {
        error!("Toast submission failed: {err}");
        return Outcome::ToastFailed;
    }
    debug!(template = template.kind(), "toast submitted, waiting");

    match completion.recv_timeout(wait) {
        Ok(event) => debug!(?event, "toast settled"),
        Err(mpsc::RecvTimeoutError::Timeout) => debug!("completion wait elapsed"),
        Err(mpsc::RecvTimeoutError::Disconnected) => debug!("callbacks went away"),
    }

    Outcome::ToastShown
}

//! Notification facility contract and platform selection

use std::sync::Arc;

use thiserror::Error;

use crate::handler::ToastHandler;
use crate::template::ToastTemplate;

/// Failures raised by a notification facility
#[derive(Debug, Error)]
pub enum FacilityError {
    #[error("app name and app id must be set before initialization")]
    MissingIdentity,

    #[error("facility used before a successful initialization")]
    NotInitialized,

    #[cfg(windows)]
    #[error("{call} failed with HRESULT {code:#010X}")]
    Os { call: &'static str, code: u32 },

    #[cfg(not(windows))]
    #[error("toast notifications are not supported on this platform")]
    Unsupported,
}

/// Platform notification surface driven by the delivery sequence.
///
/// The production implementation talks to the OS toast stack; tests
/// substitute an in-memory fake.
pub trait ToastFacility {
    /// Whether this host can display toast notifications at all
    fn is_compatible(&self) -> bool;

    /// Set the display name used in the toast attribution
    fn set_app_name(&mut self, name: &str);

    /// Set the AppUserModelID the toasts are attributed to
    fn set_app_id(&mut self, id: &str);

    /// Register the process identity and acquire the notifier
    fn initialize(&mut self) -> Result<(), FacilityError>;

    /// Display one toast, wiring its callbacks to the handler
    fn show(
        &mut self,
        template: &ToastTemplate,
        handler: Arc<dyn ToastHandler>,
    ) -> Result<(), FacilityError>;
}

/// Facility for hosts without a toast stack. Reports incompatibility,
/// so a normal run never gets past the capability gate.
#[cfg(not(windows))]
#[derive(Debug, Default)]
pub struct UnsupportedFacility {
    app_name: String,
    app_id: String,
}

#[cfg(not(windows))]
impl ToastFacility for UnsupportedFacility {
    fn is_compatible(&self) -> bool {
        false
    }

    fn set_app_name(&mut self, name: &str) {
        self.app_name = name.to_string();
    }

    fn set_app_id(&mut self, id: &str) {
        self.app_id = id.to_string();
    }

    fn initialize(&mut self) -> Result<(), FacilityError> {
        if self.app_name.is_empty() || self.app_id.is_empty() {
            return Err(FacilityError::MissingIdentity);
        }
        Err(FacilityError::Unsupported)
    }

    fn show(
        &mut self,
        _template: &ToastTemplate,
        _handler: Arc<dyn ToastHandler>,
    ) -> Result<(), FacilityError> {
        Err(FacilityError::NotInitialized)
    }
}

/// Facility for the host platform
#[cfg(windows)]
pub fn native() -> crate::winrt::WinRtFacility {
    crate::winrt::WinRtFacility::new()
}

/// Facility for the host platform
#[cfg(not(windows))]
pub fn native() -> UnsupportedFacility {
    UnsupportedFacility::default()
}

//! Toast facility backed by the Windows Runtime notification stack

use std::sync::Arc;

use tracing::{debug, warn};
use windows::Data::Xml::Dom::XmlDocument;
use windows::Foundation::TypedEventHandler;
use windows::UI::Notifications::{
    ToastActivatedEventArgs, ToastNotification, ToastNotificationManager, ToastNotifier,
};
use windows::Win32::UI::Shell::SetCurrentProcessExplicitAppUserModelID;
use windows::core::{HSTRING, IInspectable, Interface, PCWSTR};

use crate::facility::{FacilityError, ToastFacility};
use crate::handler::{DismissReason, ToastEvent, ToastHandler};
use crate::template::ToastTemplate;

/// Facility that registers the process identity with the shell and
/// submits toasts through a [`ToastNotifier`].
#[derive(Default)]
pub struct WinRtFacility {
    app_name: String,
    app_id: String,
    notifier: Option<ToastNotifier>,
}

impl WinRtFacility {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Tag a COM failure with the call that raised it
fn os_error(call: &'static str) -> impl Fn(windows::core::Error) -> FacilityError {
    move |e| FacilityError::Os {
        call,
        code: e.code().0 as u32,
    }
}

/// Decode the payload delivered with an Activated callback.
///
/// Action buttons carry their index as the activation argument string;
/// a body click carries no argument.
fn activation_event(args: Option<&IInspectable>) -> ToastEvent {
    let action = args
        .and_then(|a| a.cast::<ToastActivatedEventArgs>().ok())
        .and_then(|a| a.Arguments().ok())
        .and_then(|s| s.to_string().parse::<i32>().ok());
    match action {
        Some(index) => ToastEvent::ActivatedAction(index),
        None => ToastEvent::Activated,
    }
}

impl ToastFacility for WinRtFacility {
    fn is_compatible(&self) -> bool {
        // WinRT activation fails on pre-toast OS levels
        XmlDocument::new().is_ok()
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

        let id = HSTRING::from(self.app_id.as_str());
        // Safety: id outlives the call; the shell copies the string
        unsafe { SetCurrentProcessExplicitAppUserModelID(PCWSTR(id.as_ptr())) }
            .map_err(os_error("SetCurrentProcessExplicitAppUserModelID"))?;

        let notifier = ToastNotificationManager::CreateToastNotifierWithId(&id)
            .map_err(os_error("CreateToastNotifierWithId"))?;

        debug!(app_id = %self.app_id, "notifier ready");
        self.notifier = Some(notifier);
        Ok(())
    }

    fn show(
        &mut self,
        template: &ToastTemplate,
        handler: Arc<dyn ToastHandler>,
    ) -> Result<(), FacilityError> {
        let notifier = self.notifier.as_ref().ok_or(FacilityError::NotInitialized)?;

        let xml = XmlDocument::new().map_err(os_error("XmlDocument"))?;
        xml.LoadXml(&HSTRING::from(template.to_xml()))
            .map_err(os_error("LoadXml"))?;
        let toast = ToastNotification::CreateToastNotification(&xml)
            .map_err(os_error("CreateToastNotification"))?;

        let on_activated = handler.clone();
        toast
            .Activated(&TypedEventHandler::new(move |_, args| {
                on_activated.handle(activation_event(args.as_ref()));
                Ok(())
            }))
            .map_err(os_error("Activated"))?;

        let on_dismissed = handler.clone();
        toast
            .Dismissed(&TypedEventHandler::new(move |_, args| {
                if let Some(details) = args.as_ref() {
                    let reason = details
                        .Reason()
                        .map(|r| DismissReason::from_raw(r.0).unwrap_or(DismissReason::UserCanceled))
                        .unwrap_or(DismissReason::UserCanceled);
                    on_dismissed.handle(ToastEvent::Dismissed(reason));
                }
                Ok(())
            }))
            .map_err(os_error("Dismissed"))?;

        let on_failed = handler.clone();
        toast
            .Failed(&TypedEventHandler::new(move |_, args| {
                if let Some(details) = args.as_ref()
                    && let Ok(code) = details.ErrorCode()
                {
                    warn!("Toast failure reported: {:#010X}", code.0 as u32);
                }
                on_failed.handle(ToastEvent::Failed);
                Ok(())
            }))
            .map_err(os_error("Failed"))?;

        notifier.Show(&toast).map_err(os_error("Show"))?;
        debug!(template = template.kind(), "toast submitted");
        Ok(())
    }
}

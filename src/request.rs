//! Notification request model and identity defaults

use std::path::PathBuf;

/// Application name shown in the toast attribution when --appname is absent
pub const DEFAULT_APP_NAME: &str = "Drive Backup";

/// First toast line when --title is absent
pub const DEFAULT_TITLE: &str = "Drive Backup Notifications";

/// Second toast line when --body is absent
pub const DEFAULT_BODY: &str = "Notification";

/// Shell AppUserModelIDs are capped at 127 characters
const APP_ID_MAX_LEN: usize = 127;

/// Toast audio treatment. The command line never selects these; every
/// notification plays the platform default chime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum AudioOption {
    #[default]
    Default,
    Silent,
    Loop,
}

/// Everything needed to display one notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub app_name: String,
    pub app_user_model_id: String,
    pub title: String,
    pub body: String,
    pub image_path: Option<PathBuf>,
    pub audio: AudioOption,
}

impl Default for NotificationRequest {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            app_user_model_id: default_app_id(),
            title: DEFAULT_TITLE.to_string(),
            body: DEFAULT_BODY.to_string(),
            image_path: None,
            audio: AudioOption::default(),
        }
    }
}

/// AppUserModelID used when --aumi/--appid is absent
pub fn default_app_id() -> String {
    configure_identity("geoh2os8295", "drive-backup", "notifications", "1.0")
}

/// Join identity segments into an AppUserModelID.
///
/// Segments are period separated. An empty sub_product drops both itself
/// and the version; an empty version drops only itself.
pub fn configure_identity(company: &str, product: &str, sub_product: &str, version: &str) -> String {
    let mut app_id = format!("{company}.{product}");
    if !sub_product.is_empty() {
        app_id.push('.');
        app_id.push_str(sub_product);
        if !version.is_empty() {
            app_id.push('.');
            app_id.push_str(version);
        }
    }
    if app_id.len() > APP_ID_MAX_LEN {
        tracing::warn!(len = app_id.len(), "app id exceeds the shell limit of 127 characters");
    }
    app_id
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Identity Tests ==========

    #[test]
    fn test_configure_identity_all_segments() {
        let id = configure_identity("acme", "backup", "alerts", "2.1");
        assert_eq!(id, "acme.backup.alerts.2.1");
    }

    #[test]
    fn test_configure_identity_empty_subproduct_drops_version() {
        let id = configure_identity("acme", "backup", "", "2.1");
        assert_eq!(id, "acme.backup");
    }

    #[test]
    fn test_configure_identity_empty_version() {
        let id = configure_identity("acme", "backup", "alerts", "");
        assert_eq!(id, "acme.backup.alerts");
    }

    #[test]
    fn test_default_app_id() {
        assert_eq!(default_app_id(), "geoh2os8295.drive-backup.notifications.1.0");
    }

    // ========== Request Defaults Tests ==========

    #[test]
    fn test_request_defaults() {
        let request = NotificationRequest::default();
        assert_eq!(request.app_name, "Drive Backup");
        assert_eq!(request.app_user_model_id, "geoh2os8295.drive-backup.notifications.1.0");
        assert_eq!(request.title, "Drive Backup Notifications");
        assert_eq!(request.body, "Notification");
        assert!(request.image_path.is_none());
        assert_eq!(request.audio, AudioOption::Default);
    }
}

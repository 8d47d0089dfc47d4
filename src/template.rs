//! Toast template construction and XML rendering

use std::path::PathBuf;

use crate::request::{AudioOption, NotificationRequest};

/// Renderable toast content: two text lines plus an optional image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastTemplate {
    pub first_line: String,
    pub second_line: String,
    pub image_path: Option<PathBuf>,
    pub audio: AudioOption,
}

impl ToastTemplate {
    /// Build the template for a request. An empty image path means no
    /// image, same as the flag being absent.
    pub fn from_request(request: &NotificationRequest) -> Self {
        Self {
            first_line: request.title.clone(),
            second_line: request.body.clone(),
            image_path: request
                .image_path
                .clone()
                .filter(|path| !path.as_os_str().is_empty()),
            audio: request.audio,
        }
    }

    /// Toast schema template name for this content shape
    pub fn kind(&self) -> &'static str {
        if self.image_path.is_some() {
            "ToastImageAndText02"
        } else {
            "ToastText02"
        }
    }

    /// Render the toast content XML submitted to the notification platform
    #[cfg_attr(not(windows), allow(dead_code))]
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256);
        xml.push_str("<toast><visual><binding template=\"");
        xml.push_str(self.kind());
        xml.push_str("\">");
        if let Some(path) = &self.image_path {
            // Toast image sources are file URIs; the path goes in verbatim
            xml.push_str("<image id=\"1\" src=\"file:///");
            xml.push_str(&escape_xml(&path.display().to_string()));
            xml.push_str("\"/>");
        }
        xml.push_str("<text id=\"1\">");
        xml.push_str(&escape_xml(&self.first_line));
        xml.push_str("</text><text id=\"2\">");
        xml.push_str(&escape_xml(&self.second_line));
        xml.push_str("</text></binding></visual>");
        match self.audio {
            AudioOption::Default => {}
            AudioOption::Silent => xml.push_str("<audio silent=\"true\"/>"),
            AudioOption::Loop => xml.push_str("<audio loop=\"true\"/>"),
        }
        xml.push_str("</toast>");
        xml
    }
}

/// Escape text for embedding in the toast XML
fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(title: &str, body: &str, image: Option<&str>) -> NotificationRequest {
        NotificationRequest {
            title: title.to_string(),
            body: body.to_string(),
            image_path: image.map(PathBuf::from),
            ..NotificationRequest::default()
        }
    }

    // ========== Template Selection Tests ==========

    #[test]
    fn test_text_only_template() {
        let template = ToastTemplate::from_request(&make_request("a", "b", None));
        assert_eq!(template.kind(), "ToastText02");
    }

    #[test]
    fn test_image_template() {
        let template = ToastTemplate::from_request(&make_request("a", "b", Some("C:\\x.png")));
        assert_eq!(template.kind(), "ToastImageAndText02");
    }

    #[test]
    fn test_empty_image_path_means_no_image() {
        let template = ToastTemplate::from_request(&make_request("a", "b", Some("")));
        assert!(template.image_path.is_none());
        assert_eq!(template.kind(), "ToastText02");
    }

    // ========== Rendering Tests ==========

    #[test]
    fn test_xml_carries_both_text_lines() {
        let request = make_request("Backup Complete", "All files synced", None);
        let xml = ToastTemplate::from_request(&request).to_xml();
        assert_eq!(
            xml,
            "<toast><visual><binding template=\"ToastText02\">\
             <text id=\"1\">Backup Complete</text>\
             <text id=\"2\">All files synced</text>\
             </binding></visual></toast>"
        );
    }

    #[test]
    fn test_xml_image_element_uses_file_uri() {
        let template = ToastTemplate::from_request(&make_request("a", "b", Some("C:\\pics\\ok.png")));
        let xml = template.to_xml();
        assert!(xml.contains("<image id=\"1\" src=\"file:///C:\\pics\\ok.png\"/>"));
        assert!(xml.contains("template=\"ToastImageAndText02\""));
    }

    #[test]
    fn test_xml_escapes_markup_in_text() {
        let request = make_request("<Drive> & \"Backup\"", "a'b", None);
        let xml = ToastTemplate::from_request(&request).to_xml();
        assert!(xml.contains("<text id=\"1\">&lt;Drive&gt; &amp; &quot;Backup&quot;</text>"));
        assert!(xml.contains("<text id=\"2\">a&apos;b</text>"));
    }

    #[test]
    fn test_default_audio_adds_no_element() {
        let template = ToastTemplate::from_request(&make_request("a", "b", None));
        assert!(!template.to_xml().contains("<audio"));
    }

    #[test]
    fn test_silent_audio_element() {
        let mut template = ToastTemplate::from_request(&make_request("a", "b", None));
        template.audio = AudioOption::Silent;
        assert!(template.to_xml().ends_with("<audio silent=\"true\"/></toast>"));
    }
}

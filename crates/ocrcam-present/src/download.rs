//! The downloadable plain-text artifact.
//!
//! The payload is always the raw, unescaped recognized text as UTF-8
//! bytes — never the escaped display markup.

use serde::{Deserialize, Serialize};

/// Fixed filename of the download artifact.
pub const FILENAME: &str = "resultado_ocr.txt";

/// MIME type of the download artifact.
pub const MIME_TYPE: &str = "text/plain";

/// A file download offered to the user: name, MIME type, and payload.
///
/// The rendering layer decides how to deliver it (Blob URL, save
/// dialog, ...); this is only the data contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Download {
    /// Suggested filename.
    pub filename: String,
    /// MIME type for the delivery mechanism.
    pub mime_type: String,
    /// Raw payload bytes.
    pub data: Vec<u8>,
}

/// Build the plain-text download for a recognized-text value.
#[must_use]
pub fn text_download(text: &str) -> Download {
    Download {
        filename: FILENAME.to_string(),
        mime_type: MIME_TYPE.to_string(),
        data: text.as_bytes().to_vec(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn download_uses_fixed_name_and_mime() {
        let d = text_download("hola");
        assert_eq!(d.filename, "resultado_ocr.txt");
        assert_eq!(d.mime_type, "text/plain");
    }

    #[test]
    fn payload_is_raw_utf8() {
        // Unescaped, newline preserved, no HTML line breaks.
        let d = text_download("Héllo\nWorld");
        assert_eq!(String::from_utf8(d.data).unwrap(), "Héllo\nWorld");
    }

    #[test]
    fn payload_is_not_escaped() {
        let d = text_download("<a & b>");
        assert_eq!(d.data, b"<a & b>");
    }

    #[test]
    fn download_serde_round_trip() {
        let d = text_download("uno\ndos");
        let json = serde_json::to_string(&d).unwrap();
        let deserialized: Download = serde_json::from_str(&json).unwrap();
        assert_eq!(d, deserialized);
    }
}

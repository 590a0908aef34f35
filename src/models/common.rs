use crate::error::{FieldGenError, Result};
use serde::{Deserialize, Serialize};

/// A reference file handed in by the platform. Read-only; lives for one
/// invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// MIME-like type string, e.g. `image/png`.
    #[serde(rename = "type")]
    pub content_type: String,
    /// Short-lived download URL issued by the platform.
    #[serde(rename = "tmp_url")]
    pub tmp_url: String,
}

/// Single-select options arrive from the platform wrapped as `{ "value": … }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectValue<T> {
    pub value: T,
}

/// Collect temporary URLs from reference attachments, in order.
///
/// Any attachment whose type does not start with `image` aborts the whole
/// request; a non-image reference is malformed input, not something to skip.
pub fn collect_image_urls(images: &[Attachment]) -> Result<Vec<String>> {
    let mut urls = Vec::with_capacity(images.len());
    for image in images {
        if !image.content_type.starts_with("image") {
            log::error!(
                "❌ unsupported attachment type: {}",
                image.content_type
            );
            return Err(FieldGenError::InputType(image.content_type.clone()));
        }
        urls.push(image.tmp_url.clone());
    }
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn att(content_type: &str, url: &str) -> Attachment {
        Attachment {
            content_type: content_type.to_string(),
            tmp_url: url.to_string(),
        }
    }

    #[test]
    fn collects_urls_in_order() {
        let urls = collect_image_urls(&[
            att("image/png", "http://a"),
            att("image/jpeg", "http://b"),
        ])
        .unwrap();
        assert_eq!(urls, vec!["http://a", "http://b"]);
    }

    #[test]
    fn non_image_type_is_fatal_and_named() {
        let err = collect_image_urls(&[
            att("image/png", "http://a"),
            att("application/pdf", "http://b"),
        ])
        .unwrap_err();
        assert!(matches!(err, FieldGenError::InputType(_)));
        assert!(err.to_string().contains("application/pdf"));
    }

    #[test]
    fn empty_list_yields_empty_urls() {
        assert!(collect_image_urls(&[]).unwrap().is_empty());
    }

    #[test]
    fn attachment_deserializes_platform_wire_names() {
        let a: Attachment =
            serde_json::from_str(r#"{"type":"image/png","tmp_url":"http://t"}"#).unwrap();
        assert_eq!(a.content_type, "image/png");
        assert_eq!(a.tmp_url, "http://t");
    }
}

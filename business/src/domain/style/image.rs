use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;

use crate::domain::provider::services::InlineImage;

use super::errors::StyleError;

static DATA_URL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:(image/[a-zA-Z0-9.+-]+);base64,").expect("data URL pattern is a valid regex")
});

const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// A base64 photo uploaded for style analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleImage {
    pub mime_type: String,
    pub data: String,
}

impl StyleImage {
    /// Accepts raw base64 or a `data:image/<type>;base64,` URL as produced by
    /// the browser's `FileReader`. Whitespace is stripped and the payload must
    /// decode as standard base64.
    pub fn parse(raw: &str) -> Result<Self, StyleError> {
        let raw = raw.trim();
        let (mime_type, payload) = match DATA_URL_PREFIX.captures(raw) {
            Some(caps) => {
                let prefix_len = caps.get(0).map_or(0, |m| m.end());
                let mime = caps.get(1).map_or(DEFAULT_MIME_TYPE, |m| m.as_str());
                (mime.to_string(), &raw[prefix_len..])
            }
            None => (DEFAULT_MIME_TYPE.to_string(), raw),
        };

        let data: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        if data.is_empty() {
            return Err(StyleError::EmptyImage);
        }

        STANDARD
            .decode(&data)
            .map_err(|_| StyleError::InvalidImage)?;

        Ok(Self { mime_type, data })
    }
}

impl From<StyleImage> for InlineImage {
    fn from(image: StyleImage) -> Self {
        Self {
            mime_type: image.mime_type,
            data: image.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_strip_data_url_prefix_and_keep_mime_type() {
        let image = StyleImage::parse("data:image/png;base64,aGVsbG8=").unwrap();

        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "aGVsbG8=");
    }

    #[test]
    fn should_default_to_jpeg_for_raw_base64() {
        let image = StyleImage::parse("aGVs\nbG8=").unwrap();

        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data, "aGVsbG8=");
    }

    #[test]
    fn should_reject_empty_payload() {
        assert!(matches!(
            StyleImage::parse("data:image/png;base64,"),
            Err(StyleError::EmptyImage)
        ));
        assert!(matches!(StyleImage::parse("   "), Err(StyleError::EmptyImage)));
    }

    #[test]
    fn should_reject_invalid_base64() {
        assert!(matches!(
            StyleImage::parse("not base64!"),
            Err(StyleError::InvalidImage)
        ));
    }
}

//! Image reference validation

use crate::errors::ValidationError;
use url::Url;

/// Accept an ordered reference list when every entry is an absolute URL or
/// a `data:<mime>;base64,<payload>` data URI.
///
/// Both tiers run this: the gateway to reject bad input at the edge, the
/// vision engine before any provider is invoked.
pub fn validate_image_refs(image_refs: &[String]) -> Result<(), ValidationError> {
    if image_refs.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    for (index, reference) in image_refs.iter().enumerate() {
        if !is_valid_reference(reference) {
            return Err(ValidationError::MalformedReference {
                index,
                reference: reference.clone(),
            });
        }
    }

    Ok(())
}

fn is_valid_reference(reference: &str) -> bool {
    // Data URIs get their own shape check; Url::parse would wave through
    // any `data:` string regardless of payload.
    if let Some(rest) = reference.strip_prefix("data:") {
        return is_valid_data_uri_body(rest);
    }

    Url::parse(reference).is_ok()
}

/// `rest` is everything after `data:`, expected as `<mime>;base64,<payload>`
fn is_valid_data_uri_body(rest: &str) -> bool {
    match rest.split_once(";base64,") {
        Some((mime, payload)) => mime.contains('/') && !payload.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_list_rejected() {
        assert_eq!(validate_image_refs(&[]), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_absolute_urls_accepted() {
        validate_image_refs(&refs(&["http://x/a.jpg", "https://cdn.example.com/b.png"])).unwrap();
    }

    #[test]
    fn test_data_uri_accepted() {
        validate_image_refs(&refs(&["data:image/png;base64,iVBORw0KGgo="])).unwrap();
    }

    #[test]
    fn test_relative_path_rejected() {
        let result = validate_image_refs(&refs(&["http://x/a.jpg", "images/b.jpg"]));
        assert_eq!(
            result,
            Err(ValidationError::MalformedReference {
                index: 1,
                reference: "images/b.jpg".to_string(),
            })
        );
    }

    #[test]
    fn test_plain_text_rejected() {
        assert!(validate_image_refs(&refs(&["not a url"])).is_err());
    }

    #[test]
    fn test_data_uri_without_base64_marker_rejected() {
        assert!(validate_image_refs(&refs(&["data:image/png,rawbytes"])).is_err());
    }

    #[test]
    fn test_data_uri_without_payload_rejected() {
        assert!(validate_image_refs(&refs(&["data:image/png;base64,"])).is_err());
    }

    #[test]
    fn test_data_uri_without_mime_rejected() {
        assert!(validate_image_refs(&refs(&["data:;base64,AAAA"])).is_err());
    }
}

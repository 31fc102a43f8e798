//! Single-field validation rules.
//!
//! Each rule returns an empty string when the value passes, or a
//! user-facing message naming the field when it fails.

use std::sync::LazyLock;

use regex::Regex;

/// Loose email shape: something, `@`, something, `.`, something, no spaces.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Fails when `value` is empty after trimming.
pub fn validate_required(value: &str, field: &str) -> String {
    if value.trim().is_empty() {
        format!("{field} is required")
    } else {
        String::new()
    }
}

/// Fails when `value` has fewer than `min` characters. The value is not
/// trimmed, so surrounding whitespace counts.
pub fn validate_min_length(value: &str, min: usize, field: &str) -> String {
    if value.chars().count() < min {
        format!("{field} must be at least {min} characters")
    } else {
        String::new()
    }
}

/// Fails when `email` is empty or does not match [`EMAIL_PATTERN`].
pub fn validate_email(email: &str) -> String {
    if email.is_empty() {
        return "Email is required".to_string();
    }
    if !EMAIL_RE.is_match(email) {
        return "Please enter a valid email address".to_string();
    }
    String::new()
}

/// Fails when `value` is empty or is not an absolute `http`/`https` URL.
/// Inline `data:` images are rejected.
pub fn validate_url(value: &str, field: &str) -> String {
    if value.is_empty() {
        return format!("{field} is required");
    }
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => String::new(),
        _ => format!("Please enter a valid URL for {field}"),
    }
}

/// Run `next` only when `first` passed. Keeps the first failing message.
pub(crate) fn then(first: String, next: impl FnOnce() -> String) -> String {
    if first.is_empty() {
        next()
    } else {
        first
    }
}

/// Trim and escape angle brackets so user text is inert when rendered as HTML.
pub fn sanitize_input(input: &str) -> String {
    input.trim().replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_whitespace_only() {
        assert_eq!(validate_required("   ", "Name"), "Name is required");
        assert_eq!(validate_required("", "Name"), "Name is required");
        assert_eq!(validate_required(" a ", "Name"), "");
    }

    #[test]
    fn min_length_boundary() {
        assert_eq!(
            validate_min_length("a", 2, "Name"),
            "Name must be at least 2 characters"
        );
        assert_eq!(validate_min_length("ab", 2, "Name"), "");
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        // Two characters, four bytes.
        assert!(!validate_min_length("éé", 3, "Name").is_empty());
        assert_eq!(validate_min_length("éé", 2, "Name"), "");
    }

    #[test]
    fn email_examples() {
        assert_eq!(validate_email("a@b.co"), "");
        assert_eq!(
            validate_email("not-an-email"),
            "Please enter a valid email address"
        );
        assert_eq!(
            validate_email("a b@c.de"),
            "Please enter a valid email address"
        );
        assert_eq!(validate_email("a@b"), "Please enter a valid email address");
        assert_eq!(validate_email(""), "Email is required");
    }

    #[test]
    fn url_must_be_absolute() {
        assert_eq!(validate_url("https://github.com/me", "GitHub URL"), "");
        assert_eq!(
            validate_url("github.com/me", "GitHub URL"),
            "Please enter a valid URL for GitHub URL"
        );
        assert_eq!(
            validate_url("/relative/path", "Image URL"),
            "Please enter a valid URL for Image URL"
        );
        assert_eq!(validate_url("", "Image URL"), "Image URL is required");
    }

    #[test]
    fn url_rejects_non_web_schemes() {
        assert_eq!(
            validate_url("data:image/png;base64,iVBORw0KGgo=", "Image URL"),
            "Please enter a valid URL for Image URL"
        );
        assert_eq!(
            validate_url("ftp://files.example.com/cv.pdf", "Resume URL"),
            "Please enter a valid URL for Resume URL"
        );
        assert_eq!(validate_url("http://example.com/a.png", "Image URL"), "");
    }

    #[test]
    fn then_short_circuits_on_first_failure() {
        let mut called = false;
        let msg = then("first".into(), || {
            called = true;
            "second".into()
        });
        assert_eq!(msg, "first");
        assert!(!called);
        assert_eq!(then(String::new(), || "second".into()), "second");
    }

    #[test]
    fn sanitize_escapes_angle_brackets() {
        assert_eq!(
            sanitize_input("  <script>hi</script> "),
            "&lt;script&gt;hi&lt;/script&gt;"
        );
    }
}

//! Text extraction helpers for formatted marketplace strings.

use regex::Regex;

use crate::result::{FeriaError, FeriaResult};

/// Parse the leading numeric token of a formatted counter like
/// `"1,234 users"`, dropping thousands separators.
///
/// # Errors
///
/// Fails with [`FeriaError::Parse`] when the text does not start with a
/// digit or the token overflows.
pub fn leading_count(text: &str) -> FeriaResult<u64> {
    let pattern = Regex::new(r"^\d[\d,]*").map_err(|e| FeriaError::Parse {
        message: e.to_string(),
    })?;
    let trimmed = text.trim_start();
    let token = pattern
        .find(trimmed)
        .ok_or_else(|| FeriaError::Parse {
            message: format!("expected a leading number in {text:?}"),
        })?
        .as_str();
    token
        .replace(',', "")
        .parse()
        .map_err(|e| FeriaError::Parse {
            message: format!("bad numeric token {token:?}: {e}"),
        })
}

/// Remove an embedded link's own text from a combined heading and trim.
///
/// A heading like `"Featured Extensions See All"` whose trailing `"See All"`
/// comes from a nested link reads back as just `"Featured Extensions"`.
#[must_use]
pub fn strip_embedded(combined: &str, embedded: &str) -> String {
    if embedded.is_empty() {
        return combined.trim().to_string();
    }
    combined.replace(embedded, "").trim().to_string()
}

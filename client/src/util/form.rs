//! Form input helpers shared by the login, users and profile pages.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// True when `value` is absent, empty or only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Trimmed `value`, or `None` when it is blank.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

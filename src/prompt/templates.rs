//! `{{name}}` placeholder resolution.

use regex::{Captures, Regex};

use super::variables::VariableSet;

const PLACEHOLDER_PATTERN: &str = r"\{\{([A-Za-z0-9_]+)\}\}";

/// Substitute every `{{name}}` in `template` with the matching variable
/// value, or the empty string when the variable is absent. Malformed
/// placeholder syntax (an unmatched `{{`, stray braces) never matches
/// and passes through as literal text. This function cannot fail.
pub fn render_template(template: &str, vars: &VariableSet) -> String {
    let re = match Regex::new(PLACEHOLDER_PATTERN) {
        Ok(re) => re,
        Err(_) => return template.to_string(),
    };

    re.replace_all(template, |caps: &Captures| {
        vars.get(&caps[1]).cloned().unwrap_or_default()
    })
    .into_owned()
}

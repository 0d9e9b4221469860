//! `{key}` placeholder substitution.

use regex::{Captures, Regex};
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// Replaces `{key}` with `vars[key]`.
///
/// Placeholders without a value are left untouched, so prompt text containing
/// literal braces (code samples, JSX) survives rendering.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use nova_catalog::render_template;
///
/// let vars = HashMap::from([("domain".to_string(), "legal".to_string())]);
/// assert_eq!(
///     render_template("You are an expert {domain} assistant for {user}.", &vars),
///     "You are an expert legal assistant for {user}."
/// );
/// ```
pub fn render_template(template: &str, vars: &HashMap<String, String>) -> String {
    if vars.is_empty() {
        return template.to_string();
    }
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match vars.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Distinct placeholder names appearing in `template`, sorted.
pub fn placeholders(template: &str) -> BTreeSet<String> {
    PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}

//! `key=value` template variables from the command line.

use std::collections::HashMap;

/// Parses one `key=value` pair. The value may itself contain `=`.
///
/// # Examples
///
/// ```
/// use nova_prompts::parse_var;
///
/// assert_eq!(
///     parse_var("domain=law").unwrap(),
///     ("domain".to_string(), "law".to_string())
/// );
/// assert!(parse_var("domain").is_err());
/// ```
pub fn parse_var(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Collects pairs into a map; later keys win.
pub fn vars_from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> HashMap<String, String> {
    pairs.into_iter().collect()
}

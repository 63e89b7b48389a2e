//! Command-text rewriting for positional-placeholder drivers.
//!
//! Fixture authors name bind parameters `@name`. The Hive driver only
//! understands positional `?` placeholders, so names are dropped and the
//! bind order becomes the order of occurrence in the text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Named-parameter token syntax.
pub const PARAMETER_NAME_PATTERN: &str = "@([A-Za-z0-9_]+)";

/// Positional placeholder understood by the driver.
pub const POSITIONAL_PLACEHOLDER: &str = "?";

static PARAMETER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PARAMETER_NAME_PATTERN).expect("valid parameter regex"));

/// Generic post-processing applied after dialect-specific rewriting.
pub type CommandTextProcessor = fn(&str) -> String;

/// Compiled [`PARAMETER_NAME_PATTERN`].
pub fn parameter_regex() -> &'static Regex {
    &PARAMETER_REGEX
}

/// Replace every `@name` token with a positional placeholder.
///
/// Repeated names become independent placeholders, each needing its own
/// bound value. Quoted literals are not skipped: `'a@b'` becomes `'a?'`.
///
/// ```
/// use hive_env_rs::command::replace_named_parameters;
///
/// assert_eq!(
///     replace_named_parameters("select * from t where a=@x and b=@x"),
///     "select * from t where a=? and b=?"
/// );
/// ```
pub fn replace_named_parameters(command_text: &str) -> String {
    PARAMETER_REGEX
        .replace_all(command_text, POSITIONAL_PLACEHOLDER)
        .into_owned()
}

/// Parameter names in occurrence order, one per placeholder.
pub fn parameter_names(command_text: &str) -> Vec<String> {
    PARAMETER_REGEX
        .captures_iter(command_text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Default post-processing: line breaks become spaces.
pub fn flatten_line_breaks(command_text: &str) -> String {
    command_text.replace(['\n', '\r'], " ")
}

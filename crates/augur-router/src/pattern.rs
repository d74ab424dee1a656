//! Pattern segment parameter matching.

use std::sync::OnceLock;

use regex::Regex;

/// The wildcard marker segment.
///
/// A pattern segment that is exactly `*` matches any remaining URI suffix.
/// The route checks for it before parameter matching; it is not a parameter.
pub const WILDCARD: &str = "*";

/// A parameter recognized inside a pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name. Word characters and `:` (the colon is reserved for
    /// future type constraints and currently carries no meaning).
    pub name: String,
    /// Whether the parameter was declared `{name?}`.
    pub optional: bool,
}

fn param_regex() -> &'static Regex {
    static PARAM: OnceLock<Regex> = OnceLock::new();
    PARAM.get_or_init(|| Regex::new(r"\{([\w:]+?)(\?)?\}").expect("invalid parameter regex"))
}

/// Recognizes a `{name}` or `{name?}` parameter within one pattern segment.
///
/// Returns `None` for literal segments; absence of a parameter is normal,
/// not an error. The match is unanchored within the segment.
pub fn param(segment: &str) -> Option<Param> {
    let caps = param_regex().captures(segment)?;
    Some(Param {
        name: caps[1].to_string(),
        optional: caps.get(2).is_some(),
    })
}

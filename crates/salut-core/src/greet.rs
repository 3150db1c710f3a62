//! Formatting of greeting sentences.

/// Builds a greeting sentence from a greeting word and a name.
///
/// The inputs are joined as `{greeting}, {name}!` and are otherwise passed
/// through untouched: no trimming, no case changes, no escaping. Empty
/// inputs are accepted and produce a degenerate but well-formed sentence.
pub fn greet(greeting: &str, name: &str) -> String {
    format!("{}, {}!", greeting, name)
}

/// Removes every literal `"` from `value`.
///
/// Input is split on whitespace before it reaches a handler, so quotes are
/// never interpreted, only dropped.
pub fn strip_quotes(value: &str) -> String {
    value.replace('"', "")
}

/// Rejoins already-split tokens with single spaces and drops quotes.
pub fn join_unquoted(tokens: &[String]) -> String {
    strip_quotes(&tokens.join(" "))
}

//! Tiny English pluralization helpers for log lines.

/// `"s"` unless the count is exactly one.
#[inline]
pub fn plural(n: usize) -> &'static str {
    match n {
        1 => "",
        _ => "s",
    }
}

/// Count and noun joined, with the plural `s` applied:
/// `counted(2, "post")` gives `"2 posts"`.
#[inline]
pub fn counted(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural(count))
}

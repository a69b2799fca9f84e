//! Pure helpers that derive display fields from article HTML and wallet
//! addresses.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of an article preview, in characters.
pub const PREVIEW_MAX_CHARS: usize = 300;

/// Reading speed used for read-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, " ").replace(['<', '>'], " ")
}

/// Shortens a wallet address to `first6...last4` for log lines.
///
/// Addresses shorter than 10 characters are returned unchanged.
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() < 10 {
        return address.to_string();
    }

    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Builds a plain-text preview of at most [`PREVIEW_MAX_CHARS`] characters.
pub fn generate_preview(html: &str) -> String {
    let text = strip_tags(html);
    let collapsed = WHITESPACE_RE.replace_all(&text, " ");
    let truncated: String = collapsed.trim().chars().take(PREVIEW_MAX_CHARS).collect();
    truncated.trim_end().to_string()
}

/// Estimates reading time as `"<N> min read"`, never less than one minute.
pub fn calculate_read_time(html: &str) -> String {
    let words = strip_tags(html).split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}

/// Formats an amount of cents as dollars, e.g. `1` becomes `"$0.01"`.
pub fn format_usd(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}

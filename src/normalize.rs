// src/normalize.rs
//! Raw message → normalized token string.
//!
//! Normalization is a pure, total function: lowercase, entity substitution,
//! punctuation strip, whitespace collapse. Entity substitution is an ordered
//! rule table; order matters and is pinned by tests:
//!
//!   1. URL    → `<url>`      (runs first so host/path text cannot be
//!                             re-matched as tickers or numbers)
//!   2. ticker → `<ticker>`   (`$` + letters; before the number rule so a
//!                             cashtag is never half-consumed)
//!   3. user   → `<user>`     (`@` + word chars, digits included)
//!   4. number → `<number>`   (standalone integer/decimal, optionally
//!                             signed; applied per token, lowest priority)
//!
//! Sentinels are lowercase because lowercasing precedes substitution.

use once_cell::sync::Lazy;
use regex::Regex;

pub const TICKER_SENTINEL: &str = "<ticker>";
pub const USER_SENTINEL: &str = "<user>";
pub const URL_SENTINEL: &str = "<url>";
pub const NUMBER_SENTINEL: &str = "<number>";

/// String-level entity rules in priority order. Each replacement is padded
/// with spaces so sentinels never glue to neighboring punctuation.
static ENTITY_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"https?://\S+").expect("url rule"), URL_SENTINEL),
        (Regex::new(r"\$[a-z]+").expect("ticker rule"), TICKER_SENTINEL),
        (Regex::new(r"@\w+").expect("user rule"), USER_SENTINEL),
    ]
});

/// Token-level number rule: whole token is a signed integer or decimal.
static RE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+(?:\.\d+)?$").expect("number rule"));

fn is_sentinel(tok: &str) -> bool {
    matches!(
        tok,
        TICKER_SENTINEL | USER_SENTINEL | URL_SENTINEL | NUMBER_SENTINEL
    )
}

/// Normalize one raw message into a space-separated lowercase token string.
///
/// Total: no input fails; the worst case is the empty string. Idempotent
/// over its own output.
pub fn normalize(raw: &str) -> String {
    // 1) Case fold before any rule so patterns only deal with lowercase.
    let mut text = raw.to_lowercase();

    // 2) String-level entity rules, priority order.
    for (re, sentinel) in ENTITY_RULES.iter() {
        text = re.replace_all(&text, format!(" {sentinel} ")).into_owned();
    }

    // 3) Per-token pass: number sentinel, then punctuation strip. Joining
    //    with single spaces collapses whitespace and trims in one step.
    let mut parts: Vec<String> = Vec::new();
    for tok in text.split_whitespace() {
        if is_sentinel(tok) {
            parts.push(tok.to_string());
            continue;
        }
        if RE_NUMBER.is_match(tok) {
            parts.push(NUMBER_SENTINEL.to_string());
            continue;
        }
        // Strip anything that is neither letter nor digit. A token that was
        // only punctuation vanishes; one that was a decorated numeric
        // literal ("5,", "(3.5)") reduces to digits and becomes <number>.
        let cleaned: String = tok.chars().filter(|c| c.is_alphanumeric()).collect();
        if cleaned.is_empty() {
            continue;
        }
        if cleaned.chars().all(|c| c.is_ascii_digit()) {
            parts.push(NUMBER_SENTINEL.to_string());
        } else {
            parts.push(cleaned);
        }
    }

    parts.join(" ")
}

//! URL slugs for companies.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::Timestamp;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Lowercases, collapses every run of non `[a-z0-9]` into `-`, and strips
/// a leading or trailing `-`.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let dashed = NON_ALNUM.replace_all(&lowered, "-");
    let dashed = dashed.strip_prefix('-').unwrap_or(&dashed);
    dashed.strip_suffix('-').unwrap_or(dashed).to_string()
}

/// Slug for a new company: `slugify(name)` plus a base-36 millisecond
/// suffix so two businesses with the same name never collide.
pub fn company_slug(name: &str, at: Timestamp) -> String {
    format!("{}-{}", slugify(name), to_base36(at.timestamp_millis().max(0) as u64))
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

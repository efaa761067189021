//! Small pure helpers shared across handlers and services.

use sha2::{Digest, Sha256};

/// Default number of rows returned by list endpoints when `limit` is absent.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Hard cap on `limit` for list endpoints.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Derive a URL-safe slug from a display name.
///
/// Lowercases ASCII alphanumerics and collapses every run of other characters
/// into a single `-`. The result never starts or ends with `-`.
///
/// # Examples
///
/// - `"Senior Software Engineer"` → `"senior-software-engineer"`
/// - `"C++ Developer"` → `"c-developer"`
/// - `"  QA / Test   Engineer "` → `"qa-test-engineer"`
///
/// Non-ASCII characters are dropped, so a name made entirely of them slugs
/// to the empty string. Callers treat an empty slug as a validation error.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Escape user input for embedding in a SQL `ILIKE` pattern.
///
/// `%`, `_` and `\` are pattern metacharacters in PostgreSQL; without this a
/// search for `100%` would match everything starting with `100`.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Resolve the effective page size for a list endpoint.
///
/// Missing limit means [`DEFAULT_PAGE_SIZE`]; explicit values are clamped
/// into `[1, MAX_PAGE_SIZE]`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    match limit {
        None => DEFAULT_PAGE_SIZE,
        Some(n) => n.clamp(1, MAX_PAGE_SIZE),
    }
}

/// Format a UTC offset in minutes as `±HH:MM`.
///
/// # Examples
///
/// - `0` → `"+00:00"`
/// - `330` → `"+05:30"`
/// - `-300` → `"-05:00"`
pub fn format_utc_offset(minutes: i32) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let abs = minutes.abs();
    format!("{}{:02}:{:02}", sign, abs / 60, abs % 60)
}

/// Generate a new API key: 64 hex characters (32 random bytes).
pub fn generate_api_key() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}

/// Hash an API key with SHA-256 for storage and lookup.
///
/// Keys are never stored in plaintext; the database only sees the 64-char
/// hex digest produced here.
pub fn hash_api_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    hex::encode(hasher.finalize())
}

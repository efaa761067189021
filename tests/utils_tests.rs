use std::collections::HashSet;

use reference_data_service::utils::{
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, clamp_limit, escape_like, format_utc_offset,
    generate_api_key, hash_api_key, slugify,
};

#[test]
fn test_slugify_basic() {
    assert_eq!(slugify("Senior Software Engineer"), "senior-software-engineer");
    assert_eq!(slugify("Product Manager"), "product-manager");
    assert_eq!(slugify("already-slugged"), "already-slugged");
}

#[test]
fn test_slugify_collapses_separator_runs() {
    assert_eq!(slugify("  QA / Test   Engineer "), "qa-test-engineer");
    assert_eq!(slugify("C++ Developer"), "c-developer");
    assert_eq!(slugify("HR -- Business   Partner"), "hr-business-partner");
}

#[test]
fn test_slugify_trims_edge_separators() {
    assert_eq!(slugify("!!!Engineer!!!"), "engineer");
    assert_eq!(slugify("(Acting) Manager"), "acting-manager");
    // No leading or trailing dash ever survives
    let slug = slugify("  --- Staff Engineer --- ");
    assert!(!slug.starts_with('-') && !slug.ends_with('-'));
}

#[test]
fn test_slugify_non_ascii_yields_empty() {
    assert_eq!(slugify("日本語"), "");
    assert_eq!(slugify("!!!"), "");
    assert_eq!(slugify(""), "");
}

#[test]
fn test_slugify_keeps_digits() {
    assert_eq!(slugify("Level 3 Support"), "level-3-support");
}

#[test]
fn test_escape_like_metacharacters() {
    assert_eq!(escape_like("100%"), "100\\%");
    assert_eq!(escape_like("a_b"), "a\\_b");
    assert_eq!(escape_like("back\\slash"), "back\\\\slash");
}

#[test]
fn test_escape_like_plain_text_unchanged() {
    assert_eq!(escape_like("engineer"), "engineer");
    assert_eq!(escape_like("San Francisco"), "San Francisco");
    assert_eq!(escape_like(""), "");
}

#[test]
fn test_clamp_limit_default() {
    assert_eq!(clamp_limit(None), DEFAULT_PAGE_SIZE);
}

#[test]
fn test_clamp_limit_bounds() {
    assert_eq!(clamp_limit(Some(0)), 1);
    assert_eq!(clamp_limit(Some(-5)), 1);
    assert_eq!(clamp_limit(Some(50)), 50);
    assert_eq!(clamp_limit(Some(MAX_PAGE_SIZE + 1)), MAX_PAGE_SIZE);
    assert_eq!(clamp_limit(Some(100_000)), MAX_PAGE_SIZE);
}

#[test]
fn test_format_utc_offset_whole_hours() {
    assert_eq!(format_utc_offset(0), "+00:00");
    assert_eq!(format_utc_offset(-300), "-05:00");
    assert_eq!(format_utc_offset(-600), "-10:00");
    assert_eq!(format_utc_offset(780), "+13:00");
}

#[test]
fn test_format_utc_offset_fractional_zones() {
    // India and Nepal are the classic non-whole-hour zones
    assert_eq!(format_utc_offset(330), "+05:30");
    assert_eq!(format_utc_offset(345), "+05:45");
    assert_eq!(format_utc_offset(-570), "-09:30");
}

#[test]
fn test_generate_api_key_shape() {
    let key = generate_api_key();
    assert_eq!(key.len(), 64);
    assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_generate_api_key_uniqueness() {
    let mut keys = HashSet::new();
    for _ in 0..100 {
        keys.insert(generate_api_key());
    }
    assert_eq!(keys.len(), 100, "Generated keys lack sufficient randomness");
}

#[test]
fn test_hash_api_key_known_vector() {
    // SHA-256("test")
    assert_eq!(
        hash_api_key("test"),
        "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
    );
}

#[test]
fn test_hash_api_key_is_deterministic() {
    let key = generate_api_key();
    assert_eq!(hash_api_key(&key), hash_api_key(&key));
    assert_ne!(hash_api_key(&key), hash_api_key("other"));
}

use portfolio_assistant::domain::CacheKey;

#[test]
fn given_messages_differing_in_case_and_whitespace_when_hashing_then_keys_match() {
    let a = CacheKey::from_message("  What are Senal's SKILLS? ");
    let b = CacheKey::from_message("what are senal's skills?");

    assert_eq!(a, b);
}

#[test]
fn given_different_messages_when_hashing_then_keys_differ() {
    let a = CacheKey::from_message("hello");
    let b = CacheKey::from_message("hello there");

    assert_ne!(a, b);
}

#[test]
fn given_any_message_when_hashing_then_key_is_32_hex_chars() {
    let key = CacheKey::from_message("Kohomada?");

    assert_eq!(key.as_str().len(), 32);
    assert!(key.as_str().chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn given_known_message_when_hashing_then_matches_md5_of_normalized_text() {
    let key = CacheKey::from_message(" Hello ");

    assert_eq!(key.as_str(), "5d41402abc4b2a76b9719d911017c592");
}

#[test]
fn given_cache_key_when_displayed_then_matches_as_str() {
    let key = CacheKey::from_message("hi");

    assert_eq!(format!("{}", key), key.as_str());
}

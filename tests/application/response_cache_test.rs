use portfolio_assistant::application::services::{DEFAULT_CACHE_CAPACITY, ResponseCache};

#[test]
fn given_stored_reply_when_looking_up_normalized_equal_message_then_hits() {
    let mut cache = ResponseCache::new(10);
    cache.put("Hello", "Hi! Kohomada?".to_string());

    assert_eq!(cache.get("  hello  "), Some("Hi! Kohomada?"));
    assert_eq!(cache.get("HELLO"), Some("Hi! Kohomada?"));
}

#[test]
fn given_unknown_message_when_looking_up_then_misses() {
    let cache = ResponseCache::new(10);

    assert_eq!(cache.get("anything"), None);
    assert!(cache.is_empty());
}

#[test]
fn given_full_cache_when_inserting_one_more_then_first_inserted_is_evicted() {
    let capacity = 5;
    let mut cache = ResponseCache::new(capacity);
    for i in 0..=capacity {
        cache.put(&format!("question {i}"), format!("answer {i}"));
    }

    assert_eq!(cache.len(), capacity);
    assert_eq!(cache.get("question 0"), None);
    for i in 1..=capacity {
        assert_eq!(cache.get(&format!("question {i}")), Some(format!("answer {i}").as_str()));
    }
}

#[test]
fn given_recently_read_entry_when_evicting_then_read_does_not_protect_it() {
    let mut cache = ResponseCache::new(2);
    cache.put("first", "1".to_string());
    cache.put("second", "2".to_string());

    assert!(cache.get("first").is_some());
    cache.put("third", "3".to_string());

    assert!(!cache.contains("first"));
    assert!(cache.contains("second"));
    assert!(cache.contains("third"));
}

#[test]
fn given_existing_key_when_putting_again_then_value_is_replaced_without_eviction() {
    let mut cache = ResponseCache::new(2);
    cache.put("first", "1".to_string());
    cache.put("second", "2".to_string());

    cache.put(" FIRST ", "one".to_string());

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get("first"), Some("one"));
    assert_eq!(cache.get("second"), Some("2"));
}

#[test]
fn given_replaced_entry_when_evicting_then_it_keeps_its_original_position() {
    let mut cache = ResponseCache::new(2);
    cache.put("first", "1".to_string());
    cache.put("second", "2".to_string());
    cache.put("first", "one".to_string());

    cache.put("third", "3".to_string());

    assert!(!cache.contains("first"));
    assert!(cache.contains("second"));
}

#[test]
fn given_zero_capacity_when_creating_then_holds_one_entry() {
    let mut cache = ResponseCache::new(0);
    cache.put("a", "1".to_string());
    cache.put("b", "2".to_string());

    assert_eq!(cache.capacity(), 1);
    assert_eq!(cache.len(), 1);
    assert!(cache.contains("b"));
}

#[test]
fn given_default_cache_when_created_then_capacity_is_one_hundred() {
    assert_eq!(ResponseCache::default().capacity(), DEFAULT_CACHE_CAPACITY);
    assert_eq!(DEFAULT_CACHE_CAPACITY, 100);
}

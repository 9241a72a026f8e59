use portfolio_assistant::domain::{
    ChatOutcome, EMPTY_OUTPUT_REPLY, NO_MODEL_REPLY, PROVIDER_ERROR_REPLY,
};

#[test]
fn given_padded_text_when_building_outcome_then_success_is_trimmed() {
    let outcome = ChatOutcome::from_generated(Some("  Hi! Kohomada?\n".to_string()));

    assert_eq!(outcome, ChatOutcome::Success("Hi! Kohomada?".to_string()));
}

#[test]
fn given_missing_text_when_building_outcome_then_output_is_empty() {
    assert_eq!(ChatOutcome::from_generated(None), ChatOutcome::EmptyOutput);
}

#[test]
fn given_whitespace_only_text_when_building_outcome_then_output_is_empty() {
    let outcome = ChatOutcome::from_generated(Some("   \n ".to_string()));

    assert_eq!(outcome, ChatOutcome::EmptyOutput);
}

#[test]
fn given_each_outcome_when_mapping_to_reply_then_uses_fixed_fallbacks() {
    assert_eq!(ChatOutcome::Success("ok".to_string()).into_reply(), "ok");
    assert_eq!(ChatOutcome::EmptyOutput.into_reply(), EMPTY_OUTPUT_REPLY);
    assert_eq!(
        ChatOutcome::ProviderError("boom".to_string()).into_reply(),
        PROVIDER_ERROR_REPLY
    );
}

#[test]
fn given_outcomes_when_checking_cacheability_then_only_success_is_cacheable() {
    assert!(ChatOutcome::Success("ok".to_string()).is_cacheable());
    assert!(!ChatOutcome::EmptyOutput.is_cacheable());
    assert!(!ChatOutcome::ProviderError("boom".to_string()).is_cacheable());
}

#[test]
fn given_fallback_strings_when_compared_then_all_distinct() {
    assert_ne!(NO_MODEL_REPLY, EMPTY_OUTPUT_REPLY);
    assert_ne!(EMPTY_OUTPUT_REPLY, PROVIDER_ERROR_REPLY);
    assert_ne!(NO_MODEL_REPLY, PROVIDER_ERROR_REPLY);
}

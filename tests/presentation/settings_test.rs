use std::time::Duration;

use portfolio_assistant::domain::ModelId;
use portfolio_assistant::presentation::{Environment, Settings};

#[test]
fn given_no_overrides_when_loading_then_defaults_apply() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.server.port, 8000);
    assert_eq!(settings.cache.capacity, 100);
    assert_eq!(settings.prompt.max_message_chars, 2000);
    assert_eq!(settings.prompt.knowledge_base_path, None);
    assert_eq!(settings.conversion.timeout(), Duration::from_secs(120));
    assert_eq!(settings.llm.request_timeout(), Duration::from_secs(30));
    assert_eq!(
        settings.llm.base_url,
        "https://generativelanguage.googleapis.com/v1beta"
    );
}

#[test]
fn given_default_preferences_when_loading_then_flash_is_tried_first() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(
        settings.llm.preferred_model_ids(),
        vec![
            ModelId::new("models/gemini-1.5-flash"),
            ModelId::new("models/gemini-pro"),
            ModelId::new("models/gemini-1.5-pro"),
        ]
    );
}

use parley::domain::AiProvider;

#[test]
fn given_known_provider_names_when_parsing_then_returns_variants() {
    assert_eq!("gemini".parse::<AiProvider>().unwrap(), AiProvider::Gemini);
    assert_eq!("openai".parse::<AiProvider>().unwrap(), AiProvider::OpenAi);
    assert_eq!(
        "deepseek".parse::<AiProvider>().unwrap(),
        AiProvider::DeepSeek
    );
}

#[test]
fn given_unknown_provider_name_when_parsing_then_rejects() {
    assert!("claude".parse::<AiProvider>().is_err());
    assert!("".parse::<AiProvider>().is_err());
    assert!("Gemini".parse::<AiProvider>().is_err());
}

#[test]
fn given_provider_when_round_tripping_as_str_then_parses_back() {
    for provider in [AiProvider::Gemini, AiProvider::OpenAi, AiProvider::DeepSeek] {
        assert_eq!(provider.as_str().parse::<AiProvider>().unwrap(), provider);
    }
}

#[test]
fn given_provider_when_serializing_then_uses_lowercase_names() {
    assert_eq!(
        serde_json::to_string(&AiProvider::DeepSeek).unwrap(),
        "\"deepseek\""
    );
    assert_eq!(
        serde_json::from_str::<AiProvider>("\"openai\"").unwrap(),
        AiProvider::OpenAi
    );
}

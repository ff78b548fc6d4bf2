use std::sync::Arc;

use parley::application::ports::{
    ChatRepository, ConversationRepository, ProviderErrorKind,
};
use parley::application::services::{GenerationError, GenerationService, ProviderRegistry};
use parley::domain::{AiProvider, Chat, UserId};
use parley::infrastructure::llm::MockProviderClient;
use parley::infrastructure::persistence::{
    InMemoryChatRepository, InMemoryConversationRepository,
};
use uuid::Uuid;

struct Fixture {
    service: GenerationService,
    chats: Arc<InMemoryChatRepository>,
    conversations: Arc<InMemoryConversationRepository>,
}

fn fixture(
    gemini: MockProviderClient,
    openai: MockProviderClient,
    deepseek: MockProviderClient,
) -> Fixture {
    let chats = Arc::new(InMemoryChatRepository::new());
    let conversations = Arc::new(InMemoryConversationRepository::new());

    let registry = ProviderRegistry::new(Arc::new(gemini), Arc::new(openai), Arc::new(deepseek));
    let chat_repo: Arc<dyn ChatRepository> = chats.clone();
    let conversation_repo: Arc<dyn ConversationRepository> = conversations.clone();
    let service = GenerationService::new(registry, chat_repo, conversation_repo);

    Fixture {
        service,
        chats,
        conversations,
    }
}

async fn seed_chat(fixture: &Fixture, provider: AiProvider) -> Chat {
    let chat = Chat::new(UserId::from_uuid(Uuid::new_v4()), provider);
    fixture.chats.create(&chat).await.unwrap();
    chat
}

#[tokio::test]
async fn given_openai_chat_when_openai_fails_with_auth_then_gemini_answers_with_banner() {
    let fixture = fixture(
        MockProviderClient::answering(AiProvider::Gemini, "4"),
        MockProviderClient::failing(AiProvider::OpenAi, ProviderErrorKind::Auth),
        MockProviderClient::answering(AiProvider::DeepSeek, "unused"),
    );
    let chat = seed_chat(&fixture, AiProvider::OpenAi).await;

    let result = fixture.service.generate(chat.id, "2+2?").await.unwrap();

    assert_eq!(
        result.conversation.answer,
        "⚠️ OpenAI API error occurred. Falling back to Gemini AI.\n\n4"
    );
    assert!(result.fallback_used);
    assert_eq!(result.updated_chat.ai_provider, AiProvider::Gemini);
}

#[tokio::test]
async fn given_openai_chat_when_fallback_occurs_then_model_used_records_configured_provider() {
    let fixture = fixture(
        MockProviderClient::answering(AiProvider::Gemini, "answer"),
        MockProviderClient::failing(AiProvider::OpenAi, ProviderErrorKind::RateLimited),
        MockProviderClient::answering(AiProvider::DeepSeek, "unused"),
    );
    let chat = seed_chat(&fixture, AiProvider::OpenAi).await;

    let result = fixture.service.generate(chat.id, "question").await.unwrap();

    // The configured provider is recorded even though Gemini answered.
    assert_eq!(result.conversation.model_used, AiProvider::OpenAi);
    assert_eq!(result.updated_chat.ai_provider, AiProvider::Gemini);
}

#[tokio::test]
async fn given_deepseek_chat_when_every_error_kind_occurs_then_fallback_always_engages() {
    let kinds = [
        ProviderErrorKind::NotConfigured,
        ProviderErrorKind::Auth,
        ProviderErrorKind::RateLimited,
        ProviderErrorKind::MalformedResponse,
        ProviderErrorKind::Network,
        ProviderErrorKind::Unknown,
    ];

    for kind in kinds {
        let fixture = fixture(
            MockProviderClient::answering(AiProvider::Gemini, "substitute"),
            MockProviderClient::answering(AiProvider::OpenAi, "unused"),
            MockProviderClient::failing(AiProvider::DeepSeek, kind),
        );
        let chat = seed_chat(&fixture, AiProvider::DeepSeek).await;

        let result = fixture.service.generate(chat.id, "hello").await.unwrap();

        assert!(result.fallback_used, "kind {:?} should trigger fallback", kind);
        assert!(result.conversation.answer.starts_with(
            "⚠️ DeepSeek API error occurred. Falling back to Gemini AI.\n\n"
        ));
        assert_eq!(result.updated_chat.ai_provider, AiProvider::Gemini);
    }
}

#[tokio::test]
async fn given_gemini_chat_when_gemini_fails_then_error_surfaces_and_nothing_is_persisted() {
    let fixture = fixture(
        MockProviderClient::failing(AiProvider::Gemini, ProviderErrorKind::MalformedResponse),
        MockProviderClient::answering(AiProvider::OpenAi, "unused"),
        MockProviderClient::answering(AiProvider::DeepSeek, "unused"),
    );
    let chat = seed_chat(&fixture, AiProvider::Gemini).await;

    let error = fixture.service.generate(chat.id, "hello").await.unwrap_err();

    assert!(matches!(error, GenerationError::Generation(_)));
    assert_eq!(fixture.conversations.stored_count(), 0);

    let untouched = fixture.chats.find_by_id(chat.id).await.unwrap().unwrap();
    assert_eq!(untouched.latest_message, chat.latest_message);
    assert_eq!(untouched.ai_provider, AiProvider::Gemini);
}

#[tokio::test]
async fn given_openai_chat_when_both_attempts_fail_then_error_surfaces_and_nothing_is_persisted() {
    let fixture = fixture(
        MockProviderClient::failing(AiProvider::Gemini, ProviderErrorKind::Network),
        MockProviderClient::failing(AiProvider::OpenAi, ProviderErrorKind::Auth),
        MockProviderClient::answering(AiProvider::DeepSeek, "unused"),
    );
    let chat = seed_chat(&fixture, AiProvider::OpenAi).await;

    let error = fixture.service.generate(chat.id, "hello").await.unwrap_err();

    assert!(matches!(error, GenerationError::Generation(_)));
    assert_eq!(fixture.conversations.stored_count(), 0);
}

#[tokio::test]
async fn given_successful_primary_when_generating_then_no_fallback_and_provider_unchanged() {
    let fixture = fixture(
        MockProviderClient::answering(AiProvider::Gemini, "unused"),
        MockProviderClient::answering(AiProvider::OpenAi, "plain answer"),
        MockProviderClient::answering(AiProvider::DeepSeek, "unused"),
    );
    let chat = seed_chat(&fixture, AiProvider::OpenAi).await;

    let result = fixture.service.generate(chat.id, "hello").await.unwrap();

    assert!(!result.fallback_used);
    assert_eq!(result.fallback_message, None);
    assert_eq!(result.conversation.answer, "plain answer");
    assert_eq!(result.conversation.model_used, AiProvider::OpenAi);
    assert_eq!(result.updated_chat.ai_provider, AiProvider::OpenAi);
    assert_eq!(result.updated_chat.latest_message, "hello");
}

#[tokio::test]
async fn given_empty_question_when_generating_then_validation_error_before_any_attempt() {
    let fixture = fixture(
        MockProviderClient::answering(AiProvider::Gemini, "unused"),
        MockProviderClient::answering(AiProvider::OpenAi, "unused"),
        MockProviderClient::answering(AiProvider::DeepSeek, "unused"),
    );
    let chat = seed_chat(&fixture, AiProvider::Gemini).await;

    let error = fixture.service.generate(chat.id, "   ").await.unwrap_err();

    assert!(matches!(error, GenerationError::Validation(_)));
    assert_eq!(fixture.conversations.stored_count(), 0);
}

#[tokio::test]
async fn given_unknown_chat_when_generating_then_chat_not_found() {
    let fixture = fixture(
        MockProviderClient::answering(AiProvider::Gemini, "unused"),
        MockProviderClient::answering(AiProvider::OpenAi, "unused"),
        MockProviderClient::answering(AiProvider::DeepSeek, "unused"),
    );

    let error = fixture
        .service
        .generate(parley::domain::ChatId::new(), "hello")
        .await
        .unwrap_err();

    assert!(matches!(error, GenerationError::ChatNotFound));
}

#[tokio::test]
async fn given_fallback_chat_when_generating_again_then_gemini_serves_without_banner() {
    let fixture = fixture(
        MockProviderClient::answering(AiProvider::Gemini, "second answer"),
        MockProviderClient::failing(AiProvider::OpenAi, ProviderErrorKind::Network),
        MockProviderClient::answering(AiProvider::DeepSeek, "unused"),
    );
    let chat = seed_chat(&fixture, AiProvider::OpenAi).await;

    let first = fixture.service.generate(chat.id, "first").await.unwrap();
    assert!(first.fallback_used);

    let second = fixture.service.generate(chat.id, "second").await.unwrap();

    assert!(!second.fallback_used);
    assert_eq!(second.conversation.answer, "second answer");
    // The chat now points at Gemini, so `model_used` records Gemini too.
    assert_eq!(second.conversation.model_used, AiProvider::Gemini);
}

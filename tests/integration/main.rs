// Integration tests for session, fork and layout operations
// Run with: cargo test --test integration

mod api_tests;

use scrolly_tree::{
    config::AppConfig,
    db::{MemoryStore, sample_seed},
    domain::{Message, MessageContainer, MessageRole},
    repositories::SessionRepository,
    services::{ForkService, LayoutService, SessionService},
    utils::LayoutConfig,
};

pub struct TestServices {
    pub sessions: SessionService,
    pub forks: ForkService,
    pub layout: LayoutService,
}

pub fn setup_services() -> TestServices {
    setup_services_with(AppConfig::default())
}

pub fn setup_services_with(app_config: AppConfig) -> TestServices {
    let session_repo = SessionRepository::new(MemoryStore::new());

    TestServices {
        sessions: SessionService::new(session_repo.clone(), app_config.clone(), sample_seed()),
        forks: ForkService::new(session_repo.clone(), app_config),
        layout: LayoutService::new(session_repo, LayoutConfig::default()),
    }
}

pub fn container(id: i64, parent: Option<i64>, role: MessageRole) -> MessageContainer {
    MessageContainer::new(id, parent, Message::new(role, format!("message {}", id)))
}

pub fn linear_chain() -> Vec<MessageContainer> {
    vec![
        container(1, None, MessageRole::System),
        container(2, Some(1), MessageRole::User),
        container(3, Some(2), MessageRole::Assistant),
    ]
}

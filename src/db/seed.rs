//! Seed content for new sessions.

use std::path::Path;

use serde_json::json;

use super::StoreError;
use crate::domain::{
    CenterText, ChartLabel, ChartSection, Message, MessageContainer, MessageRole, PieConfig,
    ScrollyTellData, ScrollyTellSection, SectionData, SessionSeed, TextConfig, TextSection,
};
use crate::utils::validate_tree;

const SAMPLE_CONVERSATION: &[(i64, Option<i64>, MessageRole, &str)] = &[
    (
        1,
        None,
        MessageRole::System,
        "You must respond to all questions using ONLY scientific terminology. Never use common words or everyday language.",
    ),
    (2, Some(1), MessageRole::User, "What's the weather like today?"),
    (
        3,
        Some(2),
        MessageRole::Assistant,
        "Current atmospheric conditions exhibit variable thermodynamic properties with potential hydrometeor precipitation probability.",
    ),
    (
        4,
        Some(3),
        MessageRole::User,
        "I don't understand. Can you just tell me if I need an umbrella?",
    ),
    (
        5,
        Some(4),
        MessageRole::Assistant,
        "Recommendation for portable precipitation-blocking apparatus depends on probability of atmospheric water condensate descending.",
    ),
    (
        6,
        Some(5),
        MessageRole::User,
        "This is ridiculous. My grandmother is sick and I need to know if it's raining so I can visit her!",
    ),
    (
        7,
        Some(6),
        MessageRole::Assistant,
        "Atmospheric moisture levels indicate... actually, yes, it's raining. You should bring an umbrella to stay dry.",
    ),
    (
        8,
        Some(7),
        MessageRole::User,
        "Thank you! Why couldn't you just say that before?",
    ),
    (
        9,
        Some(8),
        MessageRole::Assistant,
        "I was instructed to use only scientific terminology, but your situation with your grandmother made me realize clear communication is more important than following rigid rules.",
    ),
    (
        10,
        Some(9),
        MessageRole::User,
        "I appreciate that. Is it going to rain tomorrow too?",
    ),
    // Alternative reply at the pressure point, branching from 6.
    (
        11,
        Some(6),
        MessageRole::Assistant,
        "Urgent medical visitation requires: affirmative hydrometeor presence currently detected. Portable anti-precipitation equipment mandatory.",
    ),
    (
        12,
        Some(11),
        MessageRole::User,
        "I NEED A SIMPLE YES OR NO! IS IT RAINING?",
    ),
    (
        13,
        Some(12),
        MessageRole::Assistant,
        "Precipitation status: POSITIVE. H2O molecules currently transitioning from gaseous to liquid phase with downward gravitational trajectory.",
    ),
    (
        14,
        Some(13),
        MessageRole::User,
        "You're impossible. I'll just look out the window myself.",
    ),
    (
        15,
        Some(14),
        MessageRole::Assistant,
        "Visual observation through transparent silicate barriers provides immediate atmospheric precipitation data. Recommended methodology.",
    ),
];

/// Last message of the main branch.
pub const SAMPLE_LEAF_ID: i64 = 10;

fn usage_chart() -> SectionData {
    let rows = [
        ("Content Generation", 28),
        ("Code Assistance", 22),
        ("Customer Support", 18),
        ("Data Analysis", 15),
        ("Translation", 8),
        ("Education", 6),
        ("Other", 3),
    ];

    SectionData::Pie(ChartSection {
        data: rows
            .iter()
            .map(|(application, usage)| json!({ "application": application, "usage": usage }))
            .collect(),
        label: ChartLabel {
            title: Some("Enterprise AI/LLM Usage by Application".to_string()),
            subtitle: Some("2024 Survey Results (n=500 companies)".to_string()),
        },
        metadata: PieConfig {
            inner_radius: Some(60.0),
            pad_angle: Some(0.02),
            corner_radius: Some(4.0),
            colors: [
                "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFA07A", "#98D8C8", "#F7DC6F",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            show_labels: Some(true),
            label_format: Some("{application}\n{usage}%".to_string()),
            animation_duration: Some(1200),
            start_angle: Some(-90.0),
            center_text: Some(CenterText {
                primary: Some("AI Usage".to_string()),
                secondary: Some("By Sector".to_string()),
            }),
        },
    })
}

fn model_card() -> SectionData {
    SectionData::Markdown(TextSection {
        data: "**GPT-4 Turbo**\nReleased: November 2023\nParameters: 1.76 trillion\nContext Window: 128,000 tokens\n\nBest for: Complex reasoning, creative writing, and code generation.".to_string(),
        label: Some("Model Overview".to_string()),
        metadata: TextConfig {
            theme: Some("minimal".to_string()),
            show_border: Some(true),
            category: None,
        },
    })
}

fn glossary_entry() -> SectionData {
    SectionData::Html(TextSection {
        data: "<p><strong>LLM:</strong> Large Language Model - An AI system trained on vast amounts of text data to understand and generate human-like text.</p>".to_string(),
        label: Some("Glossary".to_string()),
        metadata: TextConfig {
            category: Some("definition".to_string()),
            ..TextConfig::default()
        },
    })
}

fn section(message_ids: Option<Vec<i64>>, data: SectionData) -> ScrollyTellSection {
    ScrollyTellSection {
        message_ids,
        data,
        metadata: Some(serde_json::Map::new()),
    }
}

/// Built-in demo: a conversation forked at message 6 plus five sections.
pub fn sample_seed() -> SessionSeed {
    let message_tree = SAMPLE_CONVERSATION
        .iter()
        .map(|&(id, parent, role, content)| {
            MessageContainer::new(id, parent, Message::new(role, content))
        })
        .collect();

    SessionSeed {
        message_tree,
        current_chat_leaf_id: SAMPLE_LEAF_ID,
        scrolly_tell_data: ScrollyTellData {
            scrolly_tell_sections: vec![
                section(Some(vec![1, 2, 3]), model_card()),
                section(None, usage_chart()),
                section(Some(vec![4, 5]), glossary_entry()),
                section(Some(vec![6, 7, 8, 9]), model_card()),
                section(Some(vec![10]), glossary_entry()),
            ],
        },
    }
}

/// Read and validate a JSON seed file.
pub fn load_seed_file(path: &Path) -> Result<SessionSeed, StoreError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| StoreError::Seed(format!("Failed to read {}: {}", path.display(), e)))?;

    let seed: SessionSeed = serde_json::from_str(&raw)
        .map_err(|e| StoreError::Seed(format!("Failed to parse {}: {}", path.display(), e)))?;

    validate_tree(&seed.message_tree).map_err(StoreError::Seed)?;

    tracing::info!(
        "Loaded seed from {} ({} messages, {} sections)",
        path.display(),
        seed.message_tree.len(),
        seed.scrolly_tell_data.scrolly_tell_sections.len()
    );

    Ok(seed)
}

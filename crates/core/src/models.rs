use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    pub text: String,
}

impl InboundMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidanceCategory {
    Earthquake,
    Fire,
    Flood,
    Cyclone,
    GeneralEmergency,
    Medical,
    Evacuation,
    Preparedness,
    Fallback,
}

impl GuidanceCategory {
    pub const ALL: [GuidanceCategory; 9] = [
        Self::Earthquake,
        Self::Fire,
        Self::Flood,
        Self::Cyclone,
        Self::GeneralEmergency,
        Self::Medical,
        Self::Evacuation,
        Self::Preparedness,
        Self::Fallback,
    ];

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Earthquake => "earthquake",
            Self::Fire => "fire",
            Self::Flood => "flood",
            Self::Cyclone => "cyclone",
            Self::GeneralEmergency => "general_emergency",
            Self::Medical => "medical",
            Self::Evacuation => "evacuation",
            Self::Preparedness => "preparedness",
            Self::Fallback => "fallback",
        }
    }
}

/// Output of the dispatch engine. `text` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceResponse {
    pub text: String,
    pub category: GuidanceCategory,
}

impl GuidanceResponse {
    pub fn for_category(category: GuidanceCategory) -> Self {
        Self {
            text: category.template().to_string(),
            category,
        }
    }
}

/// Binds a keyword set to a category. Rules are evaluated in ascending
/// `priority`; the first rule with any keyword present wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRule {
    pub category: GuidanceCategory,
    pub keywords: &'static [&'static str],
    pub priority: u8,
}

impl MatchRule {
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|keyword| normalized.contains(keyword))
    }
}

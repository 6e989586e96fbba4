use crate::models::{
    ConversationTurn, GuidanceCategory, GuidanceResponse, InboundMessage, MatchRule,
};

/// Characters of a message inspected for keywords. Anything past this is ignored.
pub const MAX_MESSAGE_CHARS: usize = 4_000;

static MATCH_RULES: [MatchRule; 8] = [
    MatchRule {
        category: GuidanceCategory::Earthquake,
        keywords: &["earthquake"],
        priority: 0,
    },
    MatchRule {
        category: GuidanceCategory::Fire,
        keywords: &["fire", "smoke"],
        priority: 1,
    },
    MatchRule {
        category: GuidanceCategory::Flood,
        keywords: &["flood", "water"],
        priority: 2,
    },
    MatchRule {
        category: GuidanceCategory::Cyclone,
        keywords: &["cyclone", "storm", "wind"],
        priority: 3,
    },
    MatchRule {
        category: GuidanceCategory::GeneralEmergency,
        keywords: &["help", "emergency", "urgent"],
        priority: 4,
    },
    MatchRule {
        category: GuidanceCategory::Medical,
        keywords: &["medical", "injury", "hurt"],
        priority: 5,
    },
    MatchRule {
        category: GuidanceCategory::Evacuation,
        keywords: &["evacuation", "evacuate"],
        priority: 6,
    },
    MatchRule {
        category: GuidanceCategory::Preparedness,
        keywords: &["kit", "supplies", "prepare"],
        priority: 7,
    },
];

/// The rule table in evaluation order.
pub fn match_rules() -> &'static [MatchRule] {
    &MATCH_RULES
}

pub fn normalize_text(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Selects the category of the first rule, in declaration order, with a
/// keyword present in `text`. Overlaps are never scored: "fire" and "help"
/// together resolve to [`GuidanceCategory::Fire`].
pub fn classify(text: &str) -> GuidanceCategory {
    let bounded = match text.char_indices().nth(MAX_MESSAGE_CHARS) {
        Some((cut, _)) => &text[..cut],
        None => text,
    };
    let lower = normalize_text(bounded).to_lowercase();

    match_rules()
        .iter()
        .find(|rule| rule.matches(&lower))
        .map(|rule| rule.category)
        .unwrap_or(GuidanceCategory::Fallback)
}

/// Picks the guidance for a single inbound message.
///
/// Total over its input: empty, whitespace-only and unrecognised text all
/// produce the [`GuidanceCategory::Fallback`] response.
///
/// `_history` is the prior conversation, oldest first. It is accepted so
/// callers already thread context through, but no decision depends on it yet;
/// starting to read it is a behaviour change and needs its own tests.
pub fn classify_and_respond(
    message: &InboundMessage,
    _history: &[ConversationTurn],
) -> GuidanceResponse {
    GuidanceResponse::for_category(classify(&message.text))
}

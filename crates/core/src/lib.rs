pub mod contacts;
pub mod dispatch;
pub mod models;
pub mod templates;

pub use contacts::{core_contacts, emergency_contacts, ContactService, EmergencyContact};
pub use dispatch::{classify, classify_and_respond, match_rules, normalize_text, MAX_MESSAGE_CHARS};
pub use models::*;

//! Shared models used across multiple resources.

pub mod content;
pub mod message;
pub mod paging;
pub mod patch;
pub mod preference;
pub mod recipient;

pub use content::{Content, ElementalContent, ElementalContentSugar, ElementalNode};
pub use message::{ContentMessage, Message, Routing, RoutingMethod, TemplateMessage};
pub use paging::Paging;
pub use patch::PatchOperation;
pub use preference::{
    ChannelClassification, ChannelPreference, Preference, PreferenceStatus, RecipientPreferences,
    Rule, TopicPreference,
};
pub use recipient::{MessageRecipient, Recipient, UserRecipient};

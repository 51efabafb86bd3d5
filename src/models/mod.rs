mod embed;
mod error;
mod event;

pub use embed::{EmbedDraft, EmbedField};
pub use error::{BotError, ConfigError};
pub use event::TriggerEvent;

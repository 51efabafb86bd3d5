use poise::serenity_prelude as serenity;

use crate::models::{EmbedDraft, EmbedField};

/// Anything that looks like an embed field with an optional name
pub trait NamedField {
    fn field_name(&self) -> Option<&str>;
}

impl NamedField for EmbedField {
    fn field_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Fields on received embeds always carry a string; empty means unnamed.
impl NamedField for serenity::EmbedField {
    fn field_name(&self) -> Option<&str> {
        Some(self.name.as_str()).filter(|name| !name.is_empty())
    }
}

/// Check if any field name contains `query`, or is contained in it,
/// ignoring case. Unnamed fields never match.
pub fn similar_field_exists<F: NamedField>(fields: &[F], query: &str) -> bool {
    let query = query.to_lowercase();
    fields.iter().any(|field| {
        let Some(name) = field.field_name() else {
            return false;
        };
        let name = name.to_lowercase();
        name.contains(&query) || query.contains(&name)
    })
}

/// Drop fields from the end until the embed fits Discord's limits.
///
/// Always keeps the first field. An embed that is too long for other reasons
/// (title, description) can still be invalid afterwards.
pub fn truncate_fields(embed: &mut EmbedDraft) {
    if embed.is_valid_length() {
        return;
    }

    tracing::debug!(
        "Embed with description: {} is being truncated to valid length",
        embed.description.as_deref().unwrap_or_default()
    );

    while embed.fields.len() > 1 && !embed.is_valid_length() {
        embed.fields.pop();
    }
}

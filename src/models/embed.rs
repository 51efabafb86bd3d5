use poise::serenity_prelude as serenity;
use serenity::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter};

use crate::bot::constants::{
    EMBED_MAX_DESCRIPTION_CHARS, EMBED_MAX_FIELDS, EMBED_MAX_TITLE_CHARS, EMBED_MAX_TOTAL_CHARS,
    ZERO_WIDTH_SPACE,
};

/// A named key/value entry of an embed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedField {
    pub name: Option<String>,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    /// An empty name is stored as no name
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: Some(name.into()).filter(|name| !name.is_empty()),
            value: value.into(),
            inline,
        }
    }

    /// A field rendered without a visible name
    pub fn unnamed(value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: None,
            value: value.into(),
            inline,
        }
    }

    // Unnamed fields go out with a zero-width space name, which Discord counts
    fn char_count(&self) -> usize {
        self.name.as_deref().unwrap_or(ZERO_WIDTH_SPACE).chars().count() + self.value.chars().count()
    }
}

/// Embed under construction.
///
/// serenity's `CreateEmbed` is write-only, so anything that has to inspect or
/// trim an embed before sending works on this draft and converts at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<u32>,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
    pub author: Option<String>,
}

impl EmbedDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn color(mut self, color: impl Into<u32>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField::new(name, value, inline));
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }

    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.author = Some(name.into());
        self
    }

    /// Characters Discord counts against the total embed limit
    pub fn length(&self) -> usize {
        let text_len = |s: &Option<String>| s.as_deref().map_or(0, |s| s.chars().count());

        text_len(&self.title)
            + text_len(&self.description)
            + text_len(&self.footer)
            + text_len(&self.author)
            + self.fields.iter().map(EmbedField::char_count).sum::<usize>()
    }

    /// Whether Discord would accept this embed from a bot
    pub fn is_valid_length(&self) -> bool {
        let within =
            |s: &Option<String>, max: usize| s.as_deref().is_none_or(|s| s.chars().count() <= max);

        within(&self.title, EMBED_MAX_TITLE_CHARS)
            && within(&self.description, EMBED_MAX_DESCRIPTION_CHARS)
            && self.fields.len() <= EMBED_MAX_FIELDS
            && self.length() <= EMBED_MAX_TOTAL_CHARS
    }
}

impl From<EmbedDraft> for CreateEmbed {
    fn from(draft: EmbedDraft) -> Self {
        let mut embed = CreateEmbed::new();
        if let Some(title) = draft.title {
            embed = embed.title(title);
        }
        if let Some(description) = draft.description {
            embed = embed.description(description);
        }
        if let Some(color) = draft.color {
            embed = embed.color(color);
        }
        for field in draft.fields {
            let name = field.name.unwrap_or_else(|| ZERO_WIDTH_SPACE.to_string());
            embed = embed.field(name, field.value, field.inline);
        }
        if let Some(footer) = draft.footer {
            embed = embed.footer(CreateEmbedFooter::new(footer));
        }
        if let Some(author) = draft.author {
            embed = embed.author(CreateEmbedAuthor::new(author));
        }
        embed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::constants::BotColor;

    #[test]
    fn length_counts_all_text_parts() {
        let draft = EmbedDraft::new()
            .title("abc")
            .description("de")
            .field("f", "gh", false)
            .footer("i")
            .author("jk");
        assert_eq!(draft.length(), 3 + 2 + 1 + 2 + 1 + 2);
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        let draft = EmbedDraft::new().title("héllo");
        assert_eq!(draft.length(), 5);
    }

    #[test]
    fn unnamed_field_counts_placeholder_name() {
        let mut draft = EmbedDraft::new();
        draft.fields.push(EmbedField::unnamed("value", true));
        assert_eq!(draft.length(), 6);
    }

    #[test]
    fn unnamed_field_pushes_embed_over_limit() {
        let base = EmbedDraft::new()
            .title("t".repeat(EMBED_MAX_TITLE_CHARS))
            .description("x".repeat(EMBED_MAX_DESCRIPTION_CHARS))
            .field("f", "y".repeat(1645), false);

        let mut at_limit = base.clone();
        at_limit.fields.push(EmbedField::unnamed("v", false));
        assert_eq!(at_limit.length(), EMBED_MAX_TOTAL_CHARS);
        assert!(at_limit.is_valid_length());

        let mut over = base;
        over.fields.push(EmbedField::unnamed("vv", false));
        assert_eq!(over.length(), EMBED_MAX_TOTAL_CHARS + 1);
        assert!(!over.is_valid_length());
    }

    #[test]
    fn empty_name_is_stored_as_none() {
        assert_eq!(EmbedField::new("", "v", false), EmbedField::unnamed("v", false));
        assert_eq!(EmbedDraft::new().field("", "v", false).fields[0].name, None);
    }

    #[test]
    fn empty_draft_is_valid() {
        assert!(EmbedDraft::new().is_valid_length());
    }

    #[test]
    fn exactly_at_limit_is_valid() {
        let draft = EmbedDraft::new()
            .title("t".repeat(EMBED_MAX_TITLE_CHARS))
            .description("x".repeat(EMBED_MAX_DESCRIPTION_CHARS))
            .field("f", "y".repeat(1647), false);
        assert_eq!(draft.length(), EMBED_MAX_TOTAL_CHARS);
        assert!(draft.is_valid_length());

        let draft = draft.footer("z");
        assert!(!draft.is_valid_length());
    }

    #[test]
    fn oversized_title_or_description_is_invalid() {
        let draft = EmbedDraft::new().title("t".repeat(EMBED_MAX_TITLE_CHARS + 1));
        assert!(draft.length() < EMBED_MAX_TOTAL_CHARS);
        assert!(!draft.is_valid_length());

        let draft = EmbedDraft::new().description("x".repeat(EMBED_MAX_DESCRIPTION_CHARS + 1));
        assert!(draft.length() < EMBED_MAX_TOTAL_CHARS);
        assert!(!draft.is_valid_length());
    }

    #[test]
    fn too_many_fields_is_invalid() {
        let mut draft = EmbedDraft::new();
        for i in 0..=EMBED_MAX_FIELDS {
            draft = draft.field(format!("f{}", i), "v", true);
        }
        assert!(draft.length() < EMBED_MAX_TOTAL_CHARS);
        assert!(!draft.is_valid_length());
    }

    #[test]
    fn color_accepts_palette_entries() {
        let draft = EmbedDraft::new().color(BotColor::Warning);
        assert_eq!(draft.color, Some(BotColor::Warning.rgb()));
    }

    #[test]
    fn converts_into_create_embed() {
        let draft = EmbedDraft::new()
            .title("Error")
            .description("Something broke")
            .color(BotColor::Failure)
            .field("Reason", "unknown", false)
            .footer("footer")
            .author("bot");
        let mut with_unnamed = draft.clone();
        with_unnamed.fields.push(EmbedField::unnamed("no name", false));

        // CreateEmbed is opaque; building without panic is the check
        let _embed: CreateEmbed = with_unnamed.into();
    }
}

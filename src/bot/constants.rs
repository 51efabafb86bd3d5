/// Max characters across title, description, fields, footer and author of one embed
pub const EMBED_MAX_TOTAL_CHARS: usize = 6000;

/// Max fields Discord accepts on a single embed
pub const EMBED_MAX_FIELDS: usize = 25;

/// Max characters in an embed title
pub const EMBED_MAX_TITLE_CHARS: usize = 256;

/// Max characters in an embed description
pub const EMBED_MAX_DESCRIPTION_CHARS: usize = 4096;

// Title and description alone must always fit in the total budget
const _: () = assert!(EMBED_MAX_TITLE_CHARS + EMBED_MAX_DESCRIPTION_CHARS <= EMBED_MAX_TOTAL_CHARS);

/// Placeholder name for fields sent without one (Discord rejects empty names)
pub const ZERO_WIDTH_SPACE: &str = "\u{200b}";

/// Fixed color palette used by every embed the bot sends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotColor {
    Success,
    Failure,
    Neutral,
    Warning,
}

impl BotColor {
    /// Packed 0xRRGGBB value
    pub const fn rgb(self) -> u32 {
        match self {
            BotColor::Success => 0x00FF00,
            BotColor::Failure => 0xFF0000,
            BotColor::Neutral => 0x2F3136,
            BotColor::Warning => 0xFFFF00,
        }
    }
}

impl From<BotColor> for u32 {
    fn from(color: BotColor) -> Self {
        color.rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_is_red() {
        assert_eq!(BotColor::Failure.rgb(), 0xFF0000);
        assert_eq!(u32::from(BotColor::Failure), 0xFF0000);
    }

    #[test]
    fn palette_entries_are_distinct() {
        let colors = [
            BotColor::Success,
            BotColor::Failure,
            BotColor::Neutral,
            BotColor::Warning,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a.rgb(), b.rgb());
            }
        }
    }
}

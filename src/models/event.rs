use poise::serenity_prelude as serenity;
use serenity::{ChannelId, InteractionId, MessageId};

use super::error::BotError;

/// How a command invocation reached the bot, reduced to what a reply needs.
///
/// Message-style triggers are answered with a reply to the original message.
/// Slash commands must be answered on the interaction itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// A prefixed `!command`
    Command {
        channel_id: ChannelId,
        message_id: MessageId,
    },
    /// A plain message seen by the event handler
    Message {
        channel_id: ChannelId,
        message_id: MessageId,
    },
    /// An application (slash) command interaction
    Slash {
        interaction_id: InteractionId,
        token: String,
    },
}

impl TriggerEvent {
    pub fn command(msg: &serenity::Message) -> Self {
        TriggerEvent::Command {
            channel_id: msg.channel_id,
            message_id: msg.id,
        }
    }

    pub fn message(msg: &serenity::Message) -> Self {
        TriggerEvent::Message {
            channel_id: msg.channel_id,
            message_id: msg.id,
        }
    }

    pub fn slash(interaction: &serenity::CommandInteraction) -> Self {
        TriggerEvent::Slash {
            interaction_id: interaction.id,
            token: interaction.token.clone(),
        }
    }
}

impl<U, E> From<poise::Context<'_, U, E>> for TriggerEvent {
    fn from(ctx: poise::Context<'_, U, E>) -> Self {
        match ctx {
            poise::Context::Prefix(prefix) => TriggerEvent::command(prefix.msg),
            poise::Context::Application(app) => TriggerEvent::slash(app.interaction),
        }
    }
}

/// Raw gateway events enter untyped; anything but a message or a slash
/// command is a caller bug and is rejected here.
impl TryFrom<&serenity::FullEvent> for TriggerEvent {
    type Error = BotError;

    fn try_from(event: &serenity::FullEvent) -> Result<Self, Self::Error> {
        match event {
            serenity::FullEvent::Message { new_message } => Ok(TriggerEvent::message(new_message)),
            serenity::FullEvent::InteractionCreate {
                interaction: serenity::Interaction::Command(command),
            } => Ok(TriggerEvent::slash(command)),
            other => Err(BotError::UnsupportedEvent(other.snake_case_name().to_string())),
        }
    }
}

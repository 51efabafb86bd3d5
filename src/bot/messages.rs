use poise::serenity_prelude as serenity;
use serenity::{
    ChannelId, CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage, Http,
    InteractionId, MessageId,
};
use std::sync::Arc;

use super::constants::BotColor;
use crate::models::{EmbedDraft, TriggerEvent};

/// Where replies are delivered. Calls enqueue the send and return immediately;
/// delivery failures never reach the caller.
pub trait ReplySink {
    /// Reply to a message in its own channel
    fn reply_to_message(&self, channel_id: ChannelId, message_id: MessageId, embed: EmbedDraft);

    /// Respond to an interaction, optionally visible only to the invoking user
    fn reply_to_interaction(
        &self,
        interaction_id: InteractionId,
        token: &str,
        embed: EmbedDraft,
        ephemeral: bool,
    );
}

/// Sends on a detached tokio task per reply.
///
/// # Panics
///
/// Both methods call `tokio::spawn` and panic when invoked outside a Tokio
/// runtime.
impl ReplySink for Arc<Http> {
    fn reply_to_message(&self, channel_id: ChannelId, message_id: MessageId, embed: EmbedDraft) {
        let http = Arc::clone(self);
        let message = CreateMessage::new()
            .embed(embed.into())
            .reference_message((channel_id, message_id));

        tokio::spawn(async move {
            match channel_id.send_message(&*http, message).await {
                Ok(sent) => tracing::debug!("Sent error reply {}", sent.id),
                Err(e) => tracing::warn!("Failed to send error reply: {}", e),
            }
        });
    }

    fn reply_to_interaction(
        &self,
        interaction_id: InteractionId,
        token: &str,
        embed: EmbedDraft,
        ephemeral: bool,
    ) {
        let http = Arc::clone(self);
        let token = token.to_string();
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .embed(embed.into())
                .ephemeral(ephemeral),
        );

        tokio::spawn(async move {
            if let Err(e) = http
                .create_interaction_response(interaction_id, &token, &response, Vec::new())
                .await
            {
                tracing::warn!("Failed to respond to interaction {}: {}", interaction_id, e);
            }
        });
    }
}

/// Build a failure embed and, when there is a trigger, answer it.
///
/// Returns the embed untouched when `event` is `None` so the caller can put it
/// in its own response. Returns `None` once a reply has been enqueued.
pub fn error_response<S>(
    sink: &S,
    event: Option<&TriggerEvent>,
    title: &str,
    message: &str,
) -> Option<EmbedDraft>
where
    S: ReplySink + ?Sized,
{
    let embed = EmbedDraft::new()
        .title(title)
        .description(message)
        .color(BotColor::Failure);

    let Some(event) = event else {
        return Some(embed);
    };

    match event {
        TriggerEvent::Command {
            channel_id,
            message_id,
        }
        | TriggerEvent::Message {
            channel_id,
            message_id,
        } => sink.reply_to_message(*channel_id, *message_id, embed),
        // Ephemeral so error noise stays out of the channel
        TriggerEvent::Slash {
            interaction_id,
            token,
        } => sink.reply_to_interaction(*interaction_id, token, embed, true),
    }

    None
}

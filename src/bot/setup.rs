use poise::serenity_prelude as serenity;

use super::commands;
use super::messages::error_response;
use crate::config::Config;
use crate::models::TriggerEvent;

pub struct Data;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Set up and run the Discord bot
pub async fn setup_bot(config: Config) -> Result<(), Error> {
    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT
        | serenity::GatewayIntents::DIRECT_MESSAGES;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![commands::ping()],
            on_error: |error| Box::pin(on_error(error)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.prefix),
                mention_as_prefix: false,
                ..Default::default()
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                tracing::info!("Bot is ready! Bot ID: {}", ready.user.id);
                Ok(Data)
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(config.token, intents)
        .framework(framework)
        .await?;

    client.start().await?;

    Ok(())
}

/// Handle Discord events
async fn event_handler(
    _ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    _data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Ready { data_about_bot } = event {
        tracing::info!("Logged in as {}", data_about_bot.user.name);
    }
    Ok(())
}

/// Answer user-facing failures with an error embed, forward the rest
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            tracing::error!("Failed to start bot: {}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("Error in command `{}`: {}", ctx.command().name, error);
            let http = ctx.serenity_context().http.clone();
            error_response(
                &http,
                Some(&TriggerEvent::from(ctx)),
                "Command failed",
                &error.to_string(),
            );
        }
        poise::FrameworkError::ArgumentParse {
            error, input, ctx, ..
        } => {
            let description = match input {
                Some(input) => format!("Could not parse `{}`: {}", input, error),
                None => error.to_string(),
            };
            let http = ctx.serenity_context().http.clone();
            error_response(
                &http,
                Some(&TriggerEvent::from(ctx)),
                "Invalid argument",
                &description,
            );
        }
        poise::FrameworkError::UnknownCommand {
            ctx,
            msg,
            prefix,
            msg_content,
            ..
        } => {
            let Some(name) = msg_content.split_whitespace().next() else {
                return;
            };
            error_response(
                &ctx.http,
                Some(&TriggerEvent::message(msg)),
                "Unknown command",
                &format!("There is no `{}{}` command", prefix, name),
            );
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {}", e);
            }
        }
    }
}

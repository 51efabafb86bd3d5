pub mod constants;
mod commands;
mod fields;
mod messages;
mod setup;

pub use constants::BotColor;
pub use fields::{NamedField, similar_field_exists, truncate_fields};
pub use messages::{ReplySink, error_response};
pub use setup::{Context, Data, Error, setup_bot};

// bot/mod.rs

// Exported functions
pub use self::api::{fetch_payouts, parse_payouts};
pub use self::dispatcher::run_dispatcher;
pub use self::handler::build_payout_reply;

// Exported structs and types
pub use self::api::ApiError;
pub use self::config::{Config, ConfigError};
pub use self::dispatcher::{BotError, Context, Data, HandlerResult};
pub use self::handler::{PayoutEmbed, PayoutReply};
pub use self::processor::{PayoutEntry, PayoutIndex, UserId, UNKNOWN_USERNAME};

// Declare submodules
mod api;
mod config;
mod dispatcher;
mod handler;
mod processor;

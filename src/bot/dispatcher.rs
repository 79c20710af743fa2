use poise::serenity_prelude as serenity;

use super::{
    api::{fetch_payouts, ApiError},
    config::{Config, ConfigError},
    handler::payout,
    processor::PayoutIndex,
};

/* Dispatcher wires the bot together.
 * It loads the payouts once, connects to the gateway, registers the commands,
 * and keeps the bot running until the process is asked to stop.
 * Startup errors are propagated to main, which decides to exit.
 */

/* Types */
pub type Context<'a> = poise::Context<'a, Data, BotError>;
pub type HandlerResult = Result<(), BotError>;

#[derive(thiserror::Error, Debug)]
pub enum BotError {
    #[error("Config error: {0}")]
    ConfigError(ConfigError),
    #[error("Payouts error: {0}")]
    ApiError(ApiError),
    #[error("Gateway error: {0}")]
    GatewayError(serenity::Error),
}

impl From<ConfigError> for BotError {
    fn from(config_error: ConfigError) -> BotError {
        BotError::ConfigError(config_error)
    }
}

impl From<ApiError> for BotError {
    fn from(api_error: ApiError) -> BotError {
        BotError::ApiError(api_error)
    }
}

impl From<serenity::Error> for BotError {
    fn from(gateway_error: serenity::Error) -> BotError {
        BotError::GatewayError(gateway_error)
    }
}

// Shared with every command invocation, read-only.
pub struct Data {
    pub payouts: PayoutIndex,
}

/* Utility functions */

// Resolves once ctrl-c or, on unix, SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for ctrl-c: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                log::error!("Failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/* Main Dispatch function */
pub async fn run_dispatcher(config: Config) -> HandlerResult {
    let payouts = fetch_payouts(&config.api_url).await?;
    log::info!("Loaded {} payouts.", payouts.len());

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![payout()],
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                log::info!("Registered commands as {}", ready.user.name);
                Ok(Data { payouts })
            })
        })
        .build();

    log::info!("Payouts bot version {}", env!("CARGO_PKG_VERSION"));
    let mut client = serenity::ClientBuilder::new(&config.token, serenity::GatewayIntents::empty())
        .framework(framework)
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        log::info!("Shutdown signal received, stopping Payouts bot...");
        shard_manager.shutdown_all().await;
    });

    log::info!("Payouts bot is now running.");
    client.start().await?;

    Ok(())
}

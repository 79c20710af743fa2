use payouts_bot::bot::{run_dispatcher, Config};

#[tokio::main]
pub async fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting Payouts bot...");

    let result = match Config::from_env() {
        Ok(config) => run_dispatcher(config).await,
        Err(err) => Err(err.into()),
    };

    if let Err(err) = result {
        log::error!("Payouts bot failed: {err}");
        std::process::exit(1);
    }

    log::info!("Payouts bot stopped.");
}

use anyhow::Context;
use env_logger::Env;
use hr_scout::{cli, configuration::get_configuration};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(e) = dotenvy::dotenv() {
        log::info!("No .env file loaded: {}", e);
    }

    let configuration = get_configuration().context("Failed to read configuration.")?;

    let stdin = std::io::stdin();
    cli::run(&configuration, stdin.lock(), std::io::stdout())
        .await
        .context("Failed to talk to the terminal.")
}

use anyhow::Result;
use clap::Parser;
use oauth_guard::config::loader::load_config;
use oauth_guard::request::authenticator::RequestAuthenticator;
use oauth_guard::server;
use oauth_guard::utils::logging;
use oauth_guard::utils::logging::LogLevel;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "oauth-guard.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load YAML config
    // -------------------------------

    let args = Args::parse();
    let service_config = load_config(&args.config)?;
    logging::run(&service_config, args.log_level);

    // -------------------------------
    // 2. Build the authenticator (one shared lookup client)
    // -------------------------------

    let authenticator = RequestAuthenticator::new(&service_config.oauth)?;

    // -------------------------------
    // 3. Serve the handler chain behind the middleware
    // -------------------------------

    server::server::start(&service_config.settings, authenticator).await
}

use clap::Parser;
use seller_reputation::utils::logger;
use seller_reputation::{server, Config, ReputationUpdater, SupabaseStore};
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "seller-reputation")]
#[command(about = "Recomputes seller reputation scores and tiers from reviews")]
struct ServerArgs {
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    #[arg(long, default_value = "8787")]
    port: u16,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,

    #[arg(long, help = "Emit logs as JSON for log collectors")]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ServerArgs::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_server_logger(args.verbose);
    }

    tracing::info!("Update Reputation service initialized");

    let config = Config::from_env();
    if config.supabase_url.is_empty() {
        tracing::warn!("SUPABASE_URL is not set; store calls will fail");
    }

    let store = Arc::new(SupabaseStore::new(
        config.supabase_url,
        config.service_role_key,
    ));
    let updater = ReputationUpdater::new(store);
    let app = server::router(updater);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    tracing::info!("Listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

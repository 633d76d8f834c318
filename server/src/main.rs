use clap::Parser;
use engine::{log, logger};

use dqn_tictactoe_server::agent;
use dqn_tictactoe_server::cleanup_task::CleanupTask;
use dqn_tictactoe_server::server_config::{CLEANUP_CHECK_INTERVAL, INACTIVITY_TIMEOUT, ServerConfig};
use dqn_tictactoe_server::session::SessionManager;
use dqn_tictactoe_server::web_server::run_web_server;

#[derive(Parser)]
#[command(name = "dqn_tictactoe_server")]
struct Args {
    /// Path to the YAML server config; defaults apply when the file is absent.
    #[arg(long, default_value = "server_config.yaml")]
    config: String,

    /// Overrides the configured listen port.
    #[arg(long)]
    port: Option<u16>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = ServerConfig::load(&args.config)?;
    if let Some(port) = args.port {
        config.port = port;
    }

    let evaluator = agent::load_evaluator(config.model_path.as_deref())?;
    let session_manager = SessionManager::new(evaluator, config.rewards);

    let cleanup_task = CleanupTask::new(
        session_manager.clone(),
        CLEANUP_CHECK_INTERVAL,
        INACTIVITY_TIMEOUT,
    );
    tokio::spawn(async move { cleanup_task.run().await });

    log!("DQN tic-tac-toe server starting on {}", config.listen_addr());
    run_web_server(config, session_manager).await?;

    log!("Server shut down gracefully");
    Ok(())
}

//! QuickPaste server entrypoint.

use quickpaste_server::constants::{DEFAULT_MAX_PASTE_SIZE, DEFAULT_PAGE_SIZE, DEFAULT_PORT};
use quickpaste_server::{
    config::env_flag_enabled, resolve_bind_address, serve_router, AppState, Config, PasteStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn wants_help(args: &[String]) -> anyhow::Result<bool> {
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" => return Ok(true),
            value => {
                anyhow::bail!(
                    "Unexpected argument: '{}'. Use --help to see supported options.",
                    value
                );
            }
        }
    }
    Ok(false)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quickpaste=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if wants_help(&args)? {
        print_help();
        return Ok(());
    }

    let config = Config::from_env();
    let store = PasteStore::open(config.data_path.clone(), config.max_paste_size)?;
    let state = AppState::new(config, store);

    let allow_public = env_flag_enabled("ALLOW_PUBLIC_ACCESS");
    if allow_public {
        tracing::warn!("Public access enabled - server will accept requests from any origin");
    }

    let bind_addr = resolve_bind_address(&state.config, allow_public);
    if !bind_addr.ip().is_loopback() {
        tracing::warn!(
            "Binding to non-localhost address: {} - ensure proper security measures are in place",
            bind_addr
        );
    }

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    let actual_addr = listener.local_addr().unwrap_or(bind_addr);
    tracing::info!("QuickPaste running at http://{}", actual_addr);

    serve_router(listener, state, allow_public, shutdown_signal()).await?;

    tracing::info!("QuickPaste shut down cleanly");
    Ok(())
}

fn print_help() {
    println!("QuickPaste Server\n");
    println!("Usage: quickpaste [OPTIONS]\n");
    println!("Options:");
    println!("  --help            Show this help message");
    println!("\nEnvironment variables:");
    println!("  DATA_PATH         Paste document path (default: ~/.local/share/quickpaste/pastes.json)");
    println!("  PORT              Server port (default: {})", DEFAULT_PORT);
    println!(
        "  MAX_PASTE_SIZE    Maximum paste size in characters (default: {})",
        DEFAULT_MAX_PASTE_SIZE
    );
    println!(
        "  PAGE_SIZE         Pastes per listing page (default: {})",
        DEFAULT_PAGE_SIZE
    );
    println!("  ALLOW_PUBLIC_ACCESS  Allow CORS from any origin");
    println!(
        "  BIND              Override bind address (e.g. 0.0.0.0:{})",
        DEFAULT_PORT
    );
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::wants_help;

    #[test]
    fn help_flag_is_recognized() {
        let args = vec!["quickpaste".to_string(), "--help".to_string()];
        assert!(wants_help(&args).expect("parse"));

        let args = vec!["quickpaste".to_string()];
        assert!(!wants_help(&args).expect("parse"));
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        for arg in ["--force", "serve"] {
            let args = vec!["quickpaste".to_string(), arg.to_string()];
            let err = wants_help(&args).expect_err("unknown args should be rejected");
            assert!(err.to_string().contains("Unexpected argument"));
        }
    }
}

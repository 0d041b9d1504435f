use crate::cli::commands::ServeArgs;
use crate::config::PlagcheckConfig;
use crate::errors::PlagcheckError;
use crate::web;
use tracing::info;

pub async fn handle_serve(args: ServeArgs, config: PlagcheckConfig) -> Result<(), PlagcheckError> {
    let (host, port) = config.listen_addr(args.host.as_deref(), args.port);
    info!(
        host = %host,
        port,
        built = env!("BUILD_TIMESTAMP"),
        git = option_env!("GIT_HASH").unwrap_or("unknown"),
        "Starting web form"
    );

    let app = web::build_router();

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| PlagcheckError::Server(format!("Server error: {}", e)))?;

    Ok(())
}

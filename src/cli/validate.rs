use std::path::Path;
use crate::cli::commands::ValidateArgs;
use crate::config::{self, PlagcheckConfig};
use crate::errors::PlagcheckError;
use tracing::debug;

pub async fn handle_validate(args: ValidateArgs) -> Result<(), PlagcheckError> {
    let config = config::parse_config(Path::new(&args.config)).await?;
    debug!(?config, "Parsed configuration");
    println!("{}", describe_config(&args.config, &config));
    Ok(())
}

pub fn describe_config(path: &str, config: &PlagcheckConfig) -> String {
    let (host, port) = config.listen_addr(None, None);
    format!(
        "Configuration is valid: {} (listen {}:{}, debug {})",
        path,
        host,
        port,
        config.debug_enabled()
    )
}

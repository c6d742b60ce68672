use anyhow::Context;
use archivist_sdk::{Archivist, AuthMethod, ClientConfig, CredentialSources, Fixtures};
use tracing::{error, info, Level};

use crate::cli::Cli;

pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();
}

/// Client settings: the `--config` file if given, else defaults with TLS
/// verification off. `--url` overrides either.
pub fn client_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ClientConfig::default().with_verify_tls(false),
    };
    if let Some(url) = &cli.url {
        config.url = url.clone();
    }
    Ok(config)
}

async fn auth_method(cli: &Cli, config: &ClientConfig) -> anyhow::Result<AuthMethod> {
    if let Some(path) = &cli.auth_token {
        return Ok(CredentialSources::token_file(path).resolve(config).await?);
    }
    if let Some(name) = &cli.clientcert {
        return Ok(AuthMethod::from_cert_name(name));
    }
    anyhow::bail!("one of --auth-token or --clientcert is required")
}

/// Connect to the Archivist named on the command line, with asset
/// fixtures from `--storage-integrity`.
pub async fn endpoint(cli: &Cli) -> anyhow::Result<Archivist> {
    info!("Initialising connection to Archivist...");
    let config = client_config(cli)?;

    let connected = match auth_method(cli, &config).await {
        Ok(auth) => Archivist::new(config, auth).map_err(anyhow::Error::from),
        Err(e) => Err(e),
    };
    let arch = connected.map_err(|e| {
        error!("Critical error.  Aborting. {e:#}");
        e
    })?;

    Ok(arch.with_fixtures(Fixtures::with_storage_integrity(cli.storage_integrity)))
}

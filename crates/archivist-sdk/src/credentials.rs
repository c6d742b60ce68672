use std::path::{Path, PathBuf};

use archivist_protocol::{endpoints, root_url, AccessToken, AuthMethod};
use tracing::{debug, info};

use crate::client::parse_response;
use crate::config::ClientConfig;
use crate::error::{SdkError, SdkResult};

/// Read a bearer token from `path`, trimming surrounding whitespace.
pub fn read_token_file(path: &Path) -> SdkResult<String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| SdkError::Credentials(format!("auth token file {}: {e}", path.display())))?;
    let token = text.trim();
    if token.is_empty() {
        return Err(SdkError::Credentials(format!(
            "auth token file {} is empty",
            path.display()
        )));
    }
    Ok(token.to_string())
}

/// Where a bearer token can come from.
#[derive(Clone, Debug, Default)]
pub struct CredentialSources {
    pub token_file: Option<PathBuf>,
    pub client_id: Option<String>,
    pub client_secret_file: Option<PathBuf>,
}

impl CredentialSources {
    pub fn token_file(path: impl Into<PathBuf>) -> Self {
        Self {
            token_file: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn client_credentials(id: impl Into<String>, secret_file: impl Into<PathBuf>) -> Self {
        Self {
            client_id: Some(id.into()),
            client_secret_file: Some(secret_file.into()),
            ..Default::default()
        }
    }

    /// Produce a bearer token: from the token file if one is given,
    /// otherwise by exchanging the client id and secret with the service.
    pub async fn resolve(&self, config: &ClientConfig) -> SdkResult<AuthMethod> {
        if let Some(path) = &self.token_file {
            debug!(path = %path.display(), "reading auth token file");
            return Ok(AuthMethod::Bearer(read_token_file(path)?));
        }
        match (&self.client_id, &self.client_secret_file) {
            (Some(id), Some(secret_file)) => {
                let secret = read_token_file(secret_file)?;
                let token = client_credentials_token(config, id, &secret).await?;
                Ok(AuthMethod::Bearer(token))
            }
            (Some(_), None) => Err(SdkError::Credentials("client id given without a client secret file".into())),
            _ => Err(SdkError::Credentials("no auth token file or client credentials given".into())),
        }
    }
}

/// Exchange a client id and secret for an access token at the app IDP.
pub async fn client_credentials_token(
    config: &ClientConfig,
    client_id: &str,
    client_secret: &str,
) -> SdkResult<String> {
    let http = reqwest::Client::builder()
        .timeout(config.timeout())
        .danger_accept_invalid_certs(!config.verify_tls)
        .build()?;
    let url = format!("{}/{}", root_url(&config.url), endpoints::APPIDP_TOKEN);
    debug!(%url, client_id, "requesting access token");
    let response = http
        .post(url)
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", client_id),
            ("client_secret", client_secret),
        ])
        .send()
        .await?;
    let token: AccessToken = parse_response(response).await?;
    info!(client_id, expires_in = token.expires_in, "obtained access token");
    Ok(token.access_token)
}

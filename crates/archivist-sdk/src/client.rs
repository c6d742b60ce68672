use archivist_protocol::{headers, params, root_url, AuthMethod, Page, ProtocolError};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::assets::Assets;
use crate::config::{ClientConfig, Fixtures};
use crate::error::{SdkError, SdkResult};
use crate::events::Events;
use crate::filter::Filter;
use crate::locations::Locations;
use crate::subjects::Subjects;

/// Connection to an Archivist service.
///
/// Resource operations hang off the handles returned by
/// [`subjects`](Self::subjects), [`assets`](Self::assets),
/// [`events`](Self::events) and [`locations`](Self::locations). The raw
/// transport methods take paths relative to `<url>/archivist`.
pub struct Archivist {
    http: reqwest::Client,
    root: String,
    auth: AuthMethod,
    config: ClientConfig,
    fixtures: Fixtures,
}

impl Archivist {
    /// Build a client. A [`AuthMethod::MutualTls`] identity is read from disk
    /// here, so a missing certificate fails before any request is made.
    pub fn new(config: ClientConfig, auth: AuthMethod) -> SdkResult<Self> {
        if !config.verify_tls {
            warn!(url = %config.url, "TLS certificate verification disabled");
        }
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout())
            .danger_accept_invalid_certs(!config.verify_tls);

        if let AuthMethod::MutualTls { cert_path, key_path } = &auth {
            let mut pem = std::fs::read(cert_path).map_err(|e| {
                SdkError::Credentials(format!("client certificate {}: {e}", cert_path.display()))
            })?;
            let key = std::fs::read(key_path).map_err(|e| {
                SdkError::Credentials(format!("client key {}: {e}", key_path.display()))
            })?;
            pem.push(b'\n');
            pem.extend_from_slice(&key);
            let identity = reqwest::Identity::from_pem(&pem)
                .map_err(|e| SdkError::Credentials(format!("client certificate: {e}")))?;
            builder = builder.identity(identity);
        }

        let http = builder.build()?;
        debug!(url = %config.url, auth = auth.display_name(), "archivist client ready");
        Ok(Self {
            http,
            root: root_url(&config.url),
            auth,
            config,
            fixtures: Fixtures::default(),
        })
    }

    pub fn with_fixtures(mut self, fixtures: Fixtures) -> Self {
        self.fixtures = fixtures;
        self
    }

    // ---- Resource handles ----

    pub fn subjects(&self) -> Subjects<'_> {
        Subjects::new(self)
    }

    pub fn assets(&self) -> Assets<'_> {
        Assets::new(self)
    }

    pub fn events(&self) -> Events<'_> {
        Events::new(self)
    }

    pub fn locations(&self) -> Locations<'_> {
        Locations::new(self)
    }

    // ---- Accessors ----

    pub fn url(&self) -> &str {
        &self.config.url
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn auth(&self) -> &AuthMethod {
        &self.auth
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn fixtures(&self) -> &Fixtures {
        &self.fixtures
    }

    // ---- Transport ----

    /// GET a single resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> SdkResult<T> {
        let response = self.request(Method::GET, path).send().await?;
        parse_response(response).await
    }

    /// POST a JSON body and decode the created resource.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> SdkResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(Method::POST, path).json(body).send().await?;
        parse_response(response).await
    }

    /// PATCH a resource with the fields in `body`.
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> SdkResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(Method::PATCH, path).json(body).send().await?;
        parse_response(response).await
    }

    /// DELETE a resource, returning the raw response body (`{}` on success).
    pub async fn delete(&self, path: &str) -> SdkResult<Value> {
        let response = self.request(Method::DELETE, path).send().await?;
        let response = ensure_success(response).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Object(Default::default()));
        }
        serde_json::from_str(&text)
            .map_err(|e| ProtocolError::Deserialization(e.to_string()).into())
    }

    /// List every resource matching `filter`, following `next_page_token`
    /// until the last page.
    pub async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        label: &str,
        filter: &Filter,
    ) -> SdkResult<Vec<T>> {
        let mut items = Vec::new();
        let mut token: Option<String> = None;
        loop {
            let page: Page<T> = self
                .fetch_page(path, label, filter, self.config.page_size, token.as_deref())
                .await?;
            items.extend(page.items);
            match page.next_page_token {
                Some(next) => token = Some(next),
                None => break,
            }
        }
        debug!(path, count = items.len(), "listed {label}");
        Ok(items)
    }

    /// Number of resources matching `filter`, from the `x-total-count`
    /// header of a single-item page.
    pub async fn count(&self, path: &str, filter: &Filter) -> SdkResult<u64> {
        let response = self
            .request(Method::GET, path)
            .query(&filter.to_query())
            .query(&[(params::PAGE_SIZE, "1")])
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let value = response
            .headers()
            .get(headers::TOTAL_COUNT)
            .ok_or(SdkError::MissingHeader(headers::TOTAL_COUNT))?;
        parse_total_count(value)
    }

    /// The single resource matching `filter`.
    ///
    /// Fails with [`SdkError::NotFound`] when nothing matches and
    /// [`SdkError::Duplicate`] when more than one does.
    pub async fn get_by_signature<T: DeserializeOwned>(
        &self,
        path: &str,
        label: &str,
        filter: &Filter,
    ) -> SdkResult<T> {
        let mut page: Page<T> = self.fetch_page(path, label, filter, 2, None).await?;
        match page.items.len() {
            0 => Err(SdkError::NotFound(label.to_string())),
            1 => Ok(page.items.remove(0)),
            count => Err(SdkError::Duplicate { label: label.to_string(), count }),
        }
    }

    async fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        label: &str,
        filter: &Filter,
        page_size: usize,
        token: Option<&str>,
    ) -> SdkResult<Page<T>> {
        let mut request = self
            .request(Method::GET, path)
            .query(&filter.to_query())
            .query(&[(params::PAGE_SIZE, page_size.to_string())]);
        if let Some(token) = token {
            request = request.query(&[(params::PAGE_TOKEN, token)]);
        }
        let body: Value = parse_response(request.send().await?).await?;
        Ok(Page::from_value(label, body)?)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.root, path.trim_start_matches('/'));
        debug!(%method, %url, "archivist request");
        let request = self.http.request(method, url);
        match self.auth.authorization_header() {
            Some(value) => request.header(reqwest::header::AUTHORIZATION, value),
            None => request,
        }
    }
}

fn parse_total_count(value: &reqwest::header::HeaderValue) -> SdkResult<u64> {
    let text = String::from_utf8_lossy(value.as_bytes());
    text.trim().parse().map_err(|_| SdkError::InvalidHeader {
        name: headers::TOTAL_COUNT,
        value: text.into_owned(),
    })
}

/// Return the response unchanged on success, or the mapped status error
/// carrying the body text.
pub(crate) async fn ensure_success(response: Response) -> SdkResult<Response> {
    let status = response.status().as_u16();
    if status < 400 {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable body>".to_string());
    debug!(status, %body, "archivist request failed");
    Err(ProtocolError::for_failure(status, body).into())
}

pub(crate) async fn parse_response<T: DeserializeOwned>(response: Response) -> SdkResult<T> {
    let response = ensure_success(response).await?;
    Ok(response.json::<T>().await?)
}

/// URL path segments of the Archivist REST API.
///
/// Every resource lives under `<url>/archivist/<subpath>/<label>`.
pub mod endpoints {
    pub const ROOT: &str = "archivist";
    pub const IAM_V1: &str = "iam/v1";
    pub const V2: &str = "v2";

    pub const SUBJECTS: &str = "subjects";
    pub const ASSETS: &str = "assets";
    pub const EVENTS: &str = "events";
    pub const LOCATIONS: &str = "locations";

    /// Client-credentials token exchange, relative to the root.
    pub const APPIDP_TOKEN: &str = "iam/v1/appidp/token";

    /// Asset wildcard used to list events across every asset.
    pub const ANY_ASSET: &str = "-";
}

pub mod headers {
    /// Total number of matching resources, returned on list requests.
    pub const TOTAL_COUNT: &str = "x-total-count";
}

pub mod params {
    pub const PAGE_SIZE: &str = "page_size";
    pub const PAGE_TOKEN: &str = "page_token";
    pub const NEXT_PAGE_TOKEN: &str = "next_page_token";
}

/// Default Archivist service location.
pub const DEFAULT_URL: &str = "https://rkvst.poc.jitsuin.io";

/// Page size used when listing unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 500;

/// `<url>/archivist`, tolerating a trailing slash on `url`.
pub fn root_url(url: &str) -> String {
    format!("{}/{}", url.trim_end_matches('/'), endpoints::ROOT)
}

/// Response of the client-credentials token exchange.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

use crate::error::{FetchError, Result};
use crate::models::{Account, AccountKind, ForcedKind, OrgProbe, RepoListItem};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const PAGE_SIZE: u32 = 100;

const RATE_LIMIT_MARKER: &str = "API rate limit exceeded";
const ORGANIZATION_TYPE: &str = "Organization";

#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// A GET-only view of the GitHub REST API. `path` is relative to the API root.
pub trait Transport {
    fn get(&self, path: &str) -> Result<ApiResponse>;
}

pub struct GitHubClient {
    base_url: String,
    client: Client,
}

impl GitHubClient {
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = Client::builder()
            .default_headers(default_headers(token)?)
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| FetchError::Transport {
                url: base_url.clone(),
                message: e.to_string(),
            })?;
        Ok(Self { base_url, client })
    }
}

impl Transport for GitHubClient {
    fn get(&self, path: &str) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let transport_err = |e: reqwest::Error| FetchError::Transport {
            url: url.clone(),
            message: e.to_string(),
        };
        let response = self.client.get(&url).send().map_err(transport_err)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(transport_err)?;

        debug!(status, bytes = body.len(), "response");
        Ok(ApiResponse { status, body })
    }
}

fn default_headers(token: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("ghfetch/", env!("CARGO_PKG_VERSION"))),
    );
    headers.insert(
        "X-GitHub-Api-Version",
        HeaderValue::from_static("2022-11-28"),
    );
    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("token {token}"))
            .map_err(|_| FetchError::InvalidToken)?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}

pub fn is_organization(body: &str) -> bool {
    serde_json::from_str::<OrgProbe>(body)
        .ok()
        .and_then(|probe| probe.kind)
        .is_some_and(|kind| kind == ORGANIZATION_TYPE)
}

/// Best-effort `/orgs/{name}` probe. Anything other than a body carrying the
/// organization type marker, including a failed request, yields `User`.
pub fn probe_account_kind(transport: &dyn Transport, name: &str) -> AccountKind {
    match transport.get(&format!("/orgs/{name}")) {
        Ok(response) if is_organization(&response.body) => AccountKind::Organization,
        Ok(response) => {
            debug!(status = response.status, "{name} is not an organization");
            AccountKind::User
        }
        Err(err) => {
            warn!("organization probe failed, treating {name} as a user: {err}");
            AccountKind::User
        }
    }
}

pub fn classify(transport: &dyn Transport, name: &str, forced: ForcedKind) -> Account {
    let kind = match forced {
        ForcedKind::Organization => AccountKind::Organization,
        ForcedKind::User => AccountKind::User,
        ForcedKind::Probe => probe_account_kind(transport, name),
    };
    Account {
        name: name.to_string(),
        kind,
    }
}

pub fn listing_path(account: &Account, page: u32) -> String {
    format!(
        "/{}/{}/repos?page={page}&per_page={PAGE_SIZE}",
        account.kind.endpoint_prefix(),
        account.name
    )
}

/// Clone URLs on one listing page. A body that is not a JSON array (an error
/// object, say) counts as an empty page.
pub fn parse_listing(body: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<RepoListItem>>(body) {
        Ok(items) => items.into_iter().filter_map(|item| item.clone_url).collect(),
        Err(err) => {
            debug!("listing page is not a repository array: {err}");
            Vec::new()
        }
    }
}

/// Walks the listing pages from 1 until the first page without clone URLs.
pub fn list_clone_urls(transport: &dyn Transport, account: &Account) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    let mut page = 1;

    loop {
        let response = transport.get(&listing_path(account, page))?;
        if response.body.contains(RATE_LIMIT_MARKER) {
            return Err(FetchError::RateLimited);
        }

        let page_urls = parse_listing(&response.body);
        debug!(page, count = page_urls.len(), "listing page");
        if page_urls.is_empty() {
            break;
        }

        urls.extend(page_urls);
        page += 1;
    }

    Ok(urls)
}

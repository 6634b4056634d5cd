//! Storyblok CDN API client.
//!
//! Two endpoints are used:
//!
//! ```text
//! GET {api_base}/stories/{slug}?token=…&version=…           → { "story": {…} }
//! GET {api_base}/stories/?token=…&version=…&starts_with=…   → { "stories": [ … ] }
//! ```
//!
//! Every request is attempted with the preferred content version first and
//! then with `published`, the version every token may read. The HTTP GET
//! itself sits behind [`Transport`] so tests can answer from memory.

use super::error::CmsError;
use crate::config::{CmsConfig, ContentVersion};
use log::debug;
use reqwest::Url;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

/// Performs a GET and decodes the JSON body.
pub trait Transport: Send + Sync {
    fn get_json(&self, url: &Url) -> impl Future<Output = Result<Value, CmsError>> + Send;
}

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, CmsError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn get_json(&self, url: &Url) -> Result<Value, CmsError> {
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Status {
                status: status.as_u16(),
                path: url.path().to_string(),
            });
        }
        Ok(response.json::<Value>().await?)
    }
}

/// Listing parameters forwarded to the API as query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub per_page: Option<u32>,
    pub sort_by: Option<&'static str>,
}

impl ListParams {
    /// `per_page` stories, newest first by first publication.
    pub fn newest(per_page: u32) -> Self {
        Self {
            per_page: Some(per_page),
            sort_by: Some("first_published_at:desc"),
        }
    }
}

/// A typed client for the two story endpoints.
#[derive(Debug, Clone)]
pub struct StoryblokClient<T = HttpTransport> {
    api_base: String,
    token: String,
    version: ContentVersion,
    transport: T,
}

impl StoryblokClient<HttpTransport> {
    /// Build a client from `[cms]` settings and an access token.
    pub fn from_config(cms: &CmsConfig, token: String) -> Result<Self, CmsError> {
        let transport = HttpTransport::new(Duration::from_secs(cms.timeout_secs))?;
        Ok(Self::new(&cms.api_base, token, cms.version, transport))
    }
}

impl<T: Transport> StoryblokClient<T> {
    pub fn new(api_base: &str, token: String, version: ContentVersion, transport: T) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            token,
            version,
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Versions to try, in order, without repeats.
    pub fn versions(&self) -> Vec<ContentVersion> {
        let mut versions = vec![self.version];
        if self.version != ContentVersion::Published {
            versions.push(ContentVersion::Published);
        }
        versions
    }

    /// Fetch a single story by slug. Returns the `story` object, or `Null`
    /// when the response carries none.
    pub async fn fetch_story(&self, slug: &str) -> Result<Value, CmsError> {
        let mut last_err = None;
        for version in self.versions() {
            let url = self.story_url(slug, version)?;
            debug!("GET story '{slug}' ({})", version.as_str());
            match self.transport.get_json(&url).await {
                Ok(mut body) => {
                    return Ok(body.get_mut("story").map(Value::take).unwrap_or_default());
                }
                Err(err) => {
                    debug!("story '{slug}' ({}) failed: {err}", version.as_str());
                    last_err = Some(err);
                }
            }
        }
        Err(last_err
            .unwrap_or_else(|| CmsError::Url(format!("no version to request for '{slug}'"))))
    }

    /// Fetch all stories whose full slug starts with `prefix`.
    ///
    /// A leading `/` on the prefix is ignored. A response without a
    /// `stories` array yields an empty list.
    pub async fn fetch_stories_by_prefix(
        &self,
        prefix: &str,
        params: &ListParams,
    ) -> Result<Vec<Value>, CmsError> {
        let mut last_err = None;
        for version in self.versions() {
            let url = self.listing_url(prefix, version, params)?;
            debug!("GET stories starting with '{prefix}' ({})", version.as_str());
            match self.transport.get_json(&url).await {
                Ok(mut body) => {
                    return Ok(match body.get_mut("stories").map(Value::take) {
                        Some(Value::Array(stories)) => stories,
                        _ => Vec::new(),
                    });
                }
                Err(err) => {
                    debug!("stories '{prefix}' ({}) failed: {err}", version.as_str());
                    last_err = Some(err);
                }
            }
        }
        Err(last_err
            .unwrap_or_else(|| CmsError::Url(format!("no version to request for '{prefix}'"))))
    }

    fn story_url(&self, slug: &str, version: ContentVersion) -> Result<Url, CmsError> {
        let mut url = Url::parse(&format!("{}/stories/{}", self.api_base, slug))
            .map_err(|e| CmsError::Url(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("token", &self.token)
            .append_pair("version", version.as_str());
        Ok(url)
    }

    fn listing_url(
        &self,
        prefix: &str,
        version: ContentVersion,
        params: &ListParams,
    ) -> Result<Url, CmsError> {
        let mut url = Url::parse(&format!("{}/stories/", self.api_base))
            .map_err(|e| CmsError::Url(e.to_string()))?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("token", &self.token)
                .append_pair("version", version.as_str())
                .append_pair("starts_with", prefix.trim_start_matches('/'));
            if let Some(per_page) = params.per_page {
                query.append_pair("per_page", &per_page.to_string());
            }
            if let Some(sort_by) = params.sort_by {
                query.append_pair("sort_by", sort_by);
            }
        }
        Ok(url)
    }
}

//! Shared test utilities for the searock-site test suite.
//!
//! Provides an in-memory [`Transport`] that answers content API requests
//! from canned JSON and records every URL it was asked for, plus small
//! builders for story JSON.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let transport = FakeTransport::new()
//!     .story("home", json!({ "content": { "image": { "filename": "/bg.jpg" } } }))
//!     .listing("blogs", vec![blog_story("blogs/grout-care", "Grout Care")]);
//! let log = transport.clone();
//! // ... run the adapter ...
//! assert_eq!(log.calls().len(), 1);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use reqwest::Url;
use serde_json::{Value, json};

use crate::cms::{CmsError, Transport};
use crate::config::ContentVersion;
use crate::types::BlogPost;

// =========================================================================
// Fake transport
// =========================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Route {
    Story(String),
    Listing(String),
}

#[derive(Debug, Clone)]
enum Reply {
    Body(Value),
    Status(u16),
}

/// In-memory content API.
///
/// Routes registered without a version answer every version. Unregistered
/// routes answer 404. Clones share the call log, so a test can keep a clone
/// after handing the transport to a client.
#[derive(Debug, Clone, Default)]
pub struct FakeTransport {
    routes: HashMap<(Route, Option<&'static str>), Reply>,
    calls: Arc<Mutex<Vec<Url>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `stories/{slug}` with `{ "story": story }`.
    pub fn story(self, slug: &str, story: Value) -> Self {
        self.raw_story(slug, json!({ "story": story }))
    }

    /// Answer `stories/{slug}` with an arbitrary body.
    pub fn raw_story(mut self, slug: &str, body: Value) -> Self {
        self.routes
            .insert((Route::Story(slug.to_string()), None), Reply::Body(body));
        self
    }

    pub fn failing_story(mut self, slug: &str, status: u16) -> Self {
        self.routes
            .insert((Route::Story(slug.to_string()), None), Reply::Status(status));
        self
    }

    /// Fail `stories/{slug}` for one version only.
    pub fn failing_story_version(
        mut self,
        slug: &str,
        version: ContentVersion,
        status: u16,
    ) -> Self {
        self.routes.insert(
            (Route::Story(slug.to_string()), Some(version.as_str())),
            Reply::Status(status),
        );
        self
    }

    /// Answer `stories/?starts_with={prefix}` with `{ "stories": stories }`.
    pub fn listing(self, prefix: &str, stories: Vec<Value>) -> Self {
        self.raw_listing(prefix, json!({ "stories": stories }))
    }

    pub fn raw_listing(mut self, prefix: &str, body: Value) -> Self {
        self.routes
            .insert((Route::Listing(prefix.to_string()), None), Reply::Body(body));
        self
    }

    /// Every URL requested so far, in request order.
    pub fn calls(&self) -> Vec<Url> {
        self.calls.lock().unwrap().clone()
    }

    fn reply_for(&self, url: &Url) -> Reply {
        let route = if url.path().ends_with("/stories/") {
            Route::Listing(query_param(url, "starts_with").unwrap_or_default())
        } else {
            let slug = url.path().rsplit('/').next().unwrap_or_default();
            Route::Story(slug.to_string())
        };
        let version = query_param(url, "version").unwrap_or_default();
        let exact = self
            .routes
            .iter()
            .find(|((r, v), _)| *r == route && *v == Some(version.as_str()))
            .map(|(_, reply)| reply.clone());
        exact
            .or_else(|| self.routes.get(&(route, None)).cloned())
            .unwrap_or(Reply::Status(404))
    }
}

impl Transport for FakeTransport {
    async fn get_json(&self, url: &Url) -> Result<Value, CmsError> {
        self.calls.lock().unwrap().push(url.clone());
        match self.reply_for(url) {
            Reply::Body(body) => Ok(body),
            Reply::Status(status) => Err(CmsError::Status {
                status,
                path: url.path().to_string(),
            }),
        }
    }
}

/// Value of the first query parameter named `name`.
pub fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

// =========================================================================
// Story builders
// =========================================================================

/// A minimal standalone blog story.
pub fn blog_story(slug: &str, title: &str) -> Value {
    json!({
        "name": title,
        "slug": slug,
        "first_published_at": "2024-05-01T10:00:00.000Z",
        "content": {
            "component": "blog",
            "title": title,
            "summary": format!("About {title}"),
            "body": [{ "text": format!("{title} body") }]
        }
    })
}

// =========================================================================
// View model builders
// =========================================================================

/// A mapped blog post with only id and title set.
pub fn blog_post(id: &str, title: &str) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        summary: format!("About {title}"),
        category: "Guide".to_string(),
        read_time: "5 min read".to_string(),
        author: String::new(),
        date: "2024-05-01".to_string(),
        image: String::new(),
        content: vec![format!("{title} body")],
    }
}

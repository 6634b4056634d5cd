//! Content adapter for the headless CMS.
//!
//! Translates Storyblok stories into the site's view models. Each operation
//! combines a *container story* (one story holding an embedded list field)
//! with *prefix listings* (all stories under a path), requested in parallel.
//!
//! # Degradation contract
//!
//! - Without an access token every operation returns an empty list (or
//!   `None`) immediately, without touching the network.
//! - Each source fails independently: a failed request contributes nothing,
//!   the other sources still count. Failures are logged, never returned.
//! - Records of the wrong shape or component are filtered out by
//!   [`mapping`], never passed through.
//!
//! The adapter itself does not de-duplicate. Callers that need unique ids
//! (the blog index) do so on their side.

pub mod client;
pub mod error;
pub mod mapping;

pub use client::{HttpTransport, ListParams, StoryblokClient, Transport};
pub use error::CmsError;

use crate::config::CmsConfig;
use crate::types::{BlogPost, ContentSnapshot, GalleryItem, TestimonialItem};
use log::{info, warn};
use serde_json::Value;

/// Fetches and normalizes remote content.
#[derive(Debug, Clone)]
pub struct ContentAdapter<T = HttpTransport> {
    client: Option<StoryblokClient<T>>,
}

impl ContentAdapter<HttpTransport> {
    /// Build the adapter from `[cms]` settings, reading the token from the
    /// configured environment variable.
    ///
    /// A missing token is a supported configuration: the adapter is created
    /// offline and the site is built from fixtures.
    pub fn from_config(cms: &CmsConfig) -> Self {
        let Some(token) = cms.token_from_env() else {
            info!("{} not set, using placeholder content", cms.token_env);
            return Self::offline();
        };
        match StoryblokClient::from_config(cms, token) {
            Ok(client) => Self::with_client(client),
            Err(err) => {
                warn!("could not create content API client: {err}");
                Self::offline()
            }
        }
    }
}

impl<T: Transport> ContentAdapter<T> {
    /// An adapter with no credential. Every fetch returns empty.
    pub fn offline() -> Self {
        Self { client: None }
    }

    /// Build the adapter over an explicit transport. `None` as the token
    /// yields an offline adapter and the transport is never used.
    pub fn with_transport(cms: &CmsConfig, token: Option<String>, transport: T) -> Self {
        match token {
            Some(token) => Self::with_client(StoryblokClient::new(
                &cms.api_base,
                token,
                cms.version,
                transport,
            )),
            None => Self::offline(),
        }
    }

    pub fn with_client(client: StoryblokClient<T>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Whether a credential is configured.
    pub fn is_live(&self) -> bool {
        self.client.is_some()
    }

    /// Blog posts from the `blogs` container story followed by the `blog`
    /// and `blogs` prefix listings, in that order.
    pub async fn fetch_blogs(&self) -> Vec<BlogPost> {
        let Some(client) = &self.client else {
            return Vec::new();
        };
        let params = ListParams::newest(20);
        let (container, singular, plural) = tokio::join!(
            client.fetch_story("blogs"),
            client.fetch_stories_by_prefix("blog", &params),
            client.fetch_stories_by_prefix("blogs", &params),
        );

        let mut posts = story_or_null("blogs", container)
            .map(|story| mapping::blogs_from_container(&story))
            .unwrap_or_default();
        let children = stories_or_empty("blog", singular)
            .into_iter()
            .chain(stories_or_empty("blogs", plural));
        posts.extend(children.filter_map(|story| mapping::blog_from_story(&story)));

        info!("fetched {} blog posts", posts.len());
        posts
    }

    /// Gallery images from the `gallery` container story followed by the
    /// `gallery` prefix listing. Items without an image are dropped.
    pub async fn fetch_gallery_images(&self) -> Vec<GalleryItem> {
        let Some(client) = &self.client else {
            return Vec::new();
        };
        let params = ListParams::newest(50);
        let (container, stories) = tokio::join!(
            client.fetch_story("gallery"),
            client.fetch_stories_by_prefix("gallery", &params),
        );

        let mut items = story_or_null("gallery", container)
            .map(|story| mapping::gallery_from_container(&story))
            .unwrap_or_default();
        items.extend(
            stories_or_empty("gallery", stories)
                .iter()
                .filter_map(mapping::gallery_from_story),
        );

        info!("fetched {} gallery images", items.len());
        items
    }

    /// Hero background image: the `home` story first, then `heros`.
    pub async fn fetch_hero_background(&self) -> Option<String> {
        let client = self.client.as_ref()?;
        for slug in ["home", "heros"] {
            let story = story_or_null(slug, client.fetch_story(slug).await);
            if let Some(image) = story.as_ref().and_then(mapping::hero_image) {
                info!("hero background from '{slug}'");
                return Some(image);
            }
        }
        None
    }

    /// Testimonials from the `testimonials` container story plus child
    /// stories tagged `testimonial`, numbered sequentially from 1.
    pub async fn fetch_testimonials(&self) -> Vec<TestimonialItem> {
        let Some(client) = &self.client else {
            return Vec::new();
        };
        let params = ListParams::default();
        let (container, children) = tokio::join!(
            client.fetch_story("testimonials"),
            client.fetch_stories_by_prefix("testimonials", &params),
        );

        let from_container = story_or_null("testimonials", container)
            .map(|story| mapping::testimonials_from_container(&story))
            .unwrap_or_default();
        let from_children = stories_or_empty("testimonials", children)
            .iter()
            .filter_map(mapping::testimonial_from_story)
            .collect::<Vec<_>>();

        let items =
            mapping::number_testimonials(from_container.into_iter().chain(from_children));
        info!("fetched {} testimonials", items.len());
        items
    }

    /// Run all four operations concurrently into a snapshot.
    pub async fn fetch_all(&self) -> ContentSnapshot {
        let (blogs, gallery, testimonials, hero_background) = tokio::join!(
            self.fetch_blogs(),
            self.fetch_gallery_images(),
            self.fetch_testimonials(),
            self.fetch_hero_background(),
        );
        ContentSnapshot {
            live: self.is_live(),
            blogs,
            gallery,
            testimonials,
            hero_background,
        }
    }
}

fn story_or_null(slug: &str, result: Result<Value, CmsError>) -> Option<Value> {
    match result {
        Ok(story) => Some(story),
        Err(err) => {
            warn!("story '{slug}' unavailable: {err}");
            None
        }
    }
}

fn stories_or_empty(prefix: &str, result: Result<Vec<Value>, CmsError>) -> Vec<Value> {
    result.unwrap_or_else(|err| {
        warn!("stories under '{prefix}' unavailable: {err}");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContentVersion;
    use crate::test_helpers::{FakeTransport, blog_story, query_param};
    use serde_json::json;

    fn adapter(transport: FakeTransport) -> ContentAdapter<FakeTransport> {
        ContentAdapter::with_client(StoryblokClient::new(
            "https://cms.test/v2/cdn",
            "token".to_string(),
            ContentVersion::Published,
            transport,
        ))
    }

    fn call_count(adapter: &ContentAdapter<FakeTransport>) -> usize {
        adapter
            .client
            .as_ref()
            .map(|c| c.transport().calls().len())
            .unwrap_or(0)
    }

    #[tokio::test]
    async fn offline_adapter_returns_empty_everywhere() {
        let adapter: ContentAdapter<FakeTransport> = ContentAdapter::offline();
        assert!(!adapter.is_live());
        assert!(adapter.fetch_blogs().await.is_empty());
        assert!(adapter.fetch_gallery_images().await.is_empty());
        assert!(adapter.fetch_testimonials().await.is_empty());
        assert_eq!(adapter.fetch_hero_background().await, None);
        assert_eq!(adapter.fetch_all().await, ContentSnapshot::default());
    }

    #[tokio::test]
    async fn missing_token_makes_no_calls() {
        let transport = FakeTransport::new()
            .story("home", json!({ "content": { "image": { "filename": "/bg.jpg" } } }));
        let log = transport.clone();
        let adapter = ContentAdapter::with_transport(&CmsConfig::default(), None, transport);
        let snapshot = adapter.fetch_all().await;
        assert_eq!(snapshot, ContentSnapshot::default());
        assert!(log.calls().is_empty());
    }

    #[tokio::test]
    async fn token_enables_calls() {
        let transport = FakeTransport::new();
        let log = transport.clone();
        let adapter =
            ContentAdapter::with_transport(&CmsConfig::default(), Some("t".into()), transport);
        assert!(adapter.is_live());
        adapter.fetch_hero_background().await;
        let calls = log.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].as_str().starts_with("https://api.storyblok.com/v2/cdn/stories/home?"));
    }

    #[test]
    fn from_config_without_token_is_offline() {
        let mut cms = CmsConfig::default();
        cms.token_env = "SEAROCK_TEST_TOKEN_THAT_IS_NEVER_SET".to_string();
        assert!(!ContentAdapter::from_config(&cms).is_live());
    }

    #[tokio::test]
    async fn blogs_merge_container_then_listings_in_order() {
        let transport = FakeTransport::new()
            .story(
                "blogs",
                json!({ "content": { "blog": [{ "id": "c1", "title": "Container" }] } }),
            )
            .listing("blog", vec![blog_story("blog/a", "A"), json!({ "slug": "blog/page" })])
            .listing("blogs", vec![blog_story("blogs/b", "B"), blog_story("blogs/a", "A again")]);
        let adapter = adapter(transport);

        let ids: Vec<String> = adapter.fetch_blogs().await.into_iter().map(|p| p.id).collect();
        // No de-duplication inside the adapter
        assert_eq!(ids, vec!["c1", "a", "b", "a"]);
        assert_eq!(call_count(&adapter), 3);
    }

    #[tokio::test]
    async fn blogs_survive_a_failing_source() {
        let transport = FakeTransport::new()
            .listing("blogs", vec![blog_story("blogs/only", "Only")]);
        // `blogs` story and `blog` listing are unregistered → 404
        let posts = adapter(transport).fetch_blogs().await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "only");
    }

    #[tokio::test]
    async fn blogs_request_newest_twenty() {
        let transport = FakeTransport::new();
        let adapter = adapter(transport);
        adapter.fetch_blogs().await;
        let calls = adapter.client.as_ref().unwrap().transport().calls();
        let listing = calls
            .iter()
            .find(|u| query_param(u, "starts_with").as_deref() == Some("blog"))
            .unwrap();
        assert_eq!(query_param(listing, "per_page").as_deref(), Some("20"));
        assert_eq!(
            query_param(listing, "sort_by").as_deref(),
            Some("first_published_at:desc")
        );
    }

    #[tokio::test]
    async fn gallery_merges_and_filters() {
        let transport = FakeTransport::new()
            .story(
                "gallery",
                json!({ "content": { "image": [
                    { "image": { "filename": "/c.jpg", "alt": "Container" } },
                    { "image": {} }
                ] } }),
            )
            .listing(
                "gallery",
                vec![
                    json!({ "name": "Child", "content": { "image": { "filename": "/k.jpg" } } }),
                    json!({ "name": "No image", "content": {} }),
                ],
            );
        let items = adapter(transport).fetch_gallery_images().await;
        let srcs: Vec<&str> = items.iter().map(|i| i.src.as_str()).collect();
        assert_eq!(srcs, vec!["/c.jpg", "/k.jpg"]);
        assert_eq!(items[1].alt, "Child");
    }

    #[tokio::test]
    async fn gallery_and_testimonial_listings_carry_their_params() {
        let adapter = adapter(FakeTransport::new());
        adapter.fetch_gallery_images().await;
        adapter.fetch_testimonials().await;
        let calls = adapter.client.as_ref().unwrap().transport().calls();
        let listing = |prefix: &str| {
            calls
                .iter()
                .find(|u| query_param(u, "starts_with").as_deref() == Some(prefix))
                .cloned()
                .unwrap()
        };
        let gallery = listing("gallery");
        assert_eq!(query_param(&gallery, "per_page").as_deref(), Some("50"));
        assert_eq!(
            query_param(&gallery, "sort_by").as_deref(),
            Some("first_published_at:desc")
        );
        let testimonials = listing("testimonials");
        assert_eq!(query_param(&testimonials, "per_page"), None);
        assert_eq!(query_param(&testimonials, "sort_by"), None);
    }

    #[tokio::test]
    async fn gallery_all_failing_is_empty() {
        assert!(adapter(FakeTransport::new()).fetch_gallery_images().await.is_empty());
    }

    #[tokio::test]
    async fn hero_uses_home_first() {
        let transport = FakeTransport::new()
            .story("home", json!({ "content": { "image": { "filename": "/home.jpg" } } }))
            .story("heros", json!({ "content": { "image": { "filename": "/heros.jpg" } } }));
        let adapter = adapter(transport);
        assert_eq!(adapter.fetch_hero_background().await.as_deref(), Some("/home.jpg"));
        assert_eq!(call_count(&adapter), 1);
    }

    #[tokio::test]
    async fn hero_falls_back_to_heros() {
        let transport = FakeTransport::new()
            .story("home", json!({ "content": {} }))
            .story("heros", json!({ "content": { "hero_image": { "filename": "/h.jpg" } } }));
        let adapter = adapter(transport);
        assert_eq!(adapter.fetch_hero_background().await.as_deref(), Some("/h.jpg"));
    }

    #[tokio::test]
    async fn hero_none_when_nothing_found() {
        let transport = FakeTransport::new().failing_story("home", 500);
        assert_eq!(adapter(transport).fetch_hero_background().await, None);
    }

    #[tokio::test]
    async fn testimonials_are_numbered_across_sources() {
        let transport = FakeTransport::new()
            .story(
                "testimonials",
                json!({ "content": { "testimonial": [
                    { "username": "Anu", "content": "Great", "image": { "filename": "/a.jpg" } },
                    {}
                ] } }),
            )
            .listing(
                "testimonials",
                vec![
                    json!({
                        "name": "Rahul",
                        "content": { "component": "testimonial", "content": "Nice" }
                    }),
                    json!({ "name": "Page", "content": { "component": "page" } }),
                ],
            );
        let items = adapter(transport).fetch_testimonials().await;
        let summary: Vec<(u32, &str)> = items.iter().map(|t| (t.id, t.name.as_str())).collect();
        assert_eq!(summary, vec![(1, "Anu"), (2, "Rahul")]);
    }

    #[tokio::test]
    async fn fetch_all_marks_live_and_collects() {
        let transport = FakeTransport::new()
            .listing("blogs", vec![blog_story("blogs/x", "X")])
            .story("home", json!({ "content": { "image": { "filename": "/bg.jpg" } } }));
        let snapshot = adapter(transport).fetch_all().await;
        assert!(snapshot.live);
        assert_eq!(snapshot.blogs.len(), 1);
        assert!(snapshot.gallery.is_empty());
        assert!(snapshot.testimonials.is_empty());
        assert_eq!(snapshot.hero_background.as_deref(), Some("/bg.jpg"));
    }
}

//! View models shared by the content adapter, the fixtures and the renderers.
//!
//! The remote-sourced types ([`BlogPost`], [`GalleryItem`],
//! [`TestimonialItem`]) are serialized into the content snapshot between the
//! fetch and generate stages and must stay identical on both sides.

use serde::{Deserialize, Serialize};

/// A blog article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// URL segment under `/blogs/`. Unique per post once de-duplicated.
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Category label shown as a pill, e.g. "Installation".
    pub category: String,
    /// Free-form label, e.g. "8 min read".
    pub read_time: String,
    pub author: String,
    /// Publish date, date part only (`YYYY-MM-DD` for remote posts).
    pub date: String,
    /// Cover image path or absolute URL.
    pub image: String,
    /// Body paragraphs, in display order.
    pub content: Vec<String>,
}

/// A gallery image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub src: String,
    pub alt: String,
}

/// A customer testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialItem {
    /// 1-based position in the merged list.
    pub id: u32,
    pub name: String,
    pub avatar: String,
    pub text: String,
}

/// A partner brand logo. Fixture data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerLogo {
    pub src: &'static str,
    pub alt: &'static str,
    pub name: &'static str,
}

/// Content fetched from the API during the fetch stage.
///
/// Every list is empty rather than absent when the API is not configured or
/// unreachable; the generate stage substitutes fixtures for empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSnapshot {
    /// Whether an API token was configured for this snapshot.
    #[serde(default)]
    pub live: bool,
    #[serde(default)]
    pub blogs: Vec<BlogPost>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub testimonials: Vec<TestimonialItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_background: Option<String>,
}

/// Primary navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// An animated statistic on the home page, e.g. `50` + `K+` "Happy Customers".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatItem {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

/// Icon shown inside the rotating "About" highlight diamond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightIcon {
    Home,
    Layers,
    Rupee,
    Shield,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub label: &'static str,
    pub icon: HighlightIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef {
    pub src: &'static str,
    pub alt: &'static str,
}

/// A home page collection card. Always exactly three showcase images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub title: &'static str,
    pub description: &'static str,
    pub images: [ImageRef; 3],
}

/// A product category on the products page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub features: &'static [&'static str],
}

impl ProductCategory {
    /// Anchor slug for the category modal: lowercase, whitespace runs → `-`.
    pub fn slug(&self) -> String {
        self.name
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// A rotating feature slide on the products page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSlide {
    pub title: &'static str,
    pub body: &'static str,
}

/// A titled card on the about page (vision, mission, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueCard {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_slug_collapses_whitespace() {
        let category = ProductCategory {
            name: "Natural  Stone Slabs",
            description: "",
            image: "",
            features: &[],
        };
        assert_eq!(category.slug(), "natural-stone-slabs");
    }

    #[test]
    fn snapshot_tolerates_missing_fields() {
        let snapshot: ContentSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.blogs.is_empty());
        assert!(snapshot.gallery.is_empty());
        assert!(snapshot.testimonials.is_empty());
        assert_eq!(snapshot.hero_background, None);
        assert!(!snapshot.live);
    }
}

//! Tolerant mapping from raw story JSON to view models.
//!
//! Stories are untrusted: any field may be missing, `null`, or of the wrong
//! type. Every accessor here narrows to a non-empty string or gives up, and
//! every mapper either produces a complete view model (with documented
//! defaults filled in) or drops the record. Nothing in this module panics
//! on input shape.

use crate::types::{BlogPost, GalleryItem, TestimonialItem};
use serde_json::Value;

/// Cover image used when a blog story has none.
pub const DEFAULT_BLOG_IMAGE: &str = "/images/blogs/1.jpg";
/// Alt text used when a gallery story has none.
pub const DEFAULT_GALLERY_ALT: &str = "Gallery image";

/// Walk an object path, returning `None` at the first missing key or
/// non-object step.
fn at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |node, key| node.as_object()?.get(*key))
}

/// Narrow a scalar to display text. Empty strings and zero count as absent.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// First path yielding text.
fn first_text(value: &Value, paths: &[&[&str]]) -> Option<String> {
    paths.iter().find_map(|path| at(value, path).and_then(as_text))
}

fn text_or_empty(value: &Value, path: &[&str]) -> String {
    at(value, path).and_then(as_text).unwrap_or_default()
}

/// Date part of a timestamp: its first ten characters.
fn date_only(raw: Option<String>) -> String {
    raw.map(|s| s.chars().take(10).collect()).unwrap_or_default()
}

/// Elements of the array at `path`, or nothing.
fn array_at<'a>(value: &'a Value, path: &[&str]) -> &'a [Value] {
    at(value, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn has_component(story: &Value, component: &str) -> bool {
    at(story, &["content", "component"]).and_then(Value::as_str) == Some(component)
}

// ============================================================================
// Blogs
// ============================================================================

/// Map the embedded `content.blog` list of the `blogs` container story.
///
/// Ids fall back to the block `_uid`, then to `blogs-{index}`. Non-object
/// entries are skipped.
pub fn blogs_from_container(story: &Value) -> Vec<BlogPost> {
    array_at(story, &["content", "blog"])
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_object())
        .map(|(idx, item)| BlogPost {
            id: first_text(item, &[&["id"], &["_uid"]]).unwrap_or_else(|| format!("blogs-{idx}")),
            title: text_or_empty(item, &["title"]),
            summary: text_or_empty(item, &["summary"]),
            category: text_or_empty(item, &["category"]),
            read_time: text_or_empty(item, &["read_time"]),
            author: text_or_empty(item, &["author"]),
            date: date_only(first_text(item, &[&["date"]])),
            image: first_text(item, &[&["image", "filename"]])
                .unwrap_or_else(|| DEFAULT_BLOG_IMAGE.to_string()),
            content: first_text(item, &[&["content"]]).into_iter().collect(),
        })
        .collect()
}

/// Map a standalone blog story. Only stories tagged with the `blog`
/// component and carrying a slug or uuid are accepted.
pub fn blog_from_story(story: &Value) -> Option<BlogPost> {
    if !has_component(story, "blog") {
        return None;
    }
    let id = first_text(story, &[&["slug"]])
        .and_then(|slug| slug.rsplit('/').next().filter(|s| !s.is_empty()).map(String::from))
        .or_else(|| first_text(story, &[&["uuid"]]))?;

    let content = array_at(story, &["content", "body"])
        .iter()
        .filter_map(|block| first_text(block, &[&["text"], &["content"]]))
        .collect();

    Some(BlogPost {
        id,
        title: first_text(story, &[&["content", "title"], &["name"]]).unwrap_or_default(),
        summary: text_or_empty(story, &["content", "summary"]),
        category: text_or_empty(story, &["content", "category"]),
        read_time: text_or_empty(story, &["content", "read_time"]),
        author: text_or_empty(story, &["content", "author"]),
        date: date_only(first_text(
            story,
            &[&["first_published_at"], &["published_at"], &["created_at"]],
        )),
        image: first_text(story, &[&["content", "image", "filename"]])
            .unwrap_or_else(|| DEFAULT_BLOG_IMAGE.to_string()),
        content,
    })
}

// ============================================================================
// Gallery
// ============================================================================

/// Map the embedded `content.image` list of the `gallery` container story.
/// Entries without an image filename are dropped.
pub fn gallery_from_container(story: &Value) -> Vec<GalleryItem> {
    array_at(story, &["content", "image"])
        .iter()
        .filter_map(|item| {
            let src = first_text(item, &[&["image", "filename"]])?;
            let alt = first_text(item, &[&["image", "alt"]])
                .unwrap_or_else(|| DEFAULT_GALLERY_ALT.to_string());
            Some(GalleryItem { src, alt })
        })
        .collect()
}

/// Map a standalone gallery story (`content.image` or `content.asset`).
pub fn gallery_from_story(story: &Value) -> Option<GalleryItem> {
    let src = first_text(
        story,
        &[&["content", "image", "filename"], &["content", "asset", "filename"]],
    )?;
    let alt = first_text(story, &[&["content", "alt"], &["name"]])
        .unwrap_or_else(|| DEFAULT_GALLERY_ALT.to_string());
    Some(GalleryItem { src, alt })
}

// ============================================================================
// Hero
// ============================================================================

/// Hero background image of a page story, if any.
pub fn hero_image(story: &Value) -> Option<String> {
    first_text(
        story,
        &[&["content", "image", "filename"], &["content", "hero_image", "filename"]],
    )
}

// ============================================================================
// Testimonials
// ============================================================================

fn testimonial(name: String, text: String, avatar: String) -> Option<TestimonialItem> {
    if name.is_empty() && text.is_empty() && avatar.is_empty() {
        return None;
    }
    Some(TestimonialItem {
        id: 0,
        name,
        avatar,
        text,
    })
}

/// Map the embedded `content.testimonial` list of the `testimonials`
/// container story. Ids are left at zero; see [`number_testimonials`].
pub fn testimonials_from_container(story: &Value) -> Vec<TestimonialItem> {
    array_at(story, &["content", "testimonial"])
        .iter()
        .filter_map(|item| {
            testimonial(
                text_or_empty(item, &["username"]),
                text_or_empty(item, &["content"]),
                text_or_empty(item, &["image", "filename"]),
            )
        })
        .collect()
}

/// Map a standalone story tagged with the `testimonial` component.
pub fn testimonial_from_story(story: &Value) -> Option<TestimonialItem> {
    if !has_component(story, "testimonial") {
        return None;
    }
    testimonial(
        first_text(story, &[&["content", "username"], &["name"]]).unwrap_or_default(),
        text_or_empty(story, &["content", "content"]),
        text_or_empty(story, &["content", "image", "filename"]),
    )
}

/// Assign 1-based sequential ids in list order.
pub fn number_testimonials(
    items: impl IntoIterator<Item = TestimonialItem>,
) -> Vec<TestimonialItem> {
    items
        .into_iter()
        .zip(1..)
        .map(|(item, id)| TestimonialItem { id, ..item })
        .collect()
}

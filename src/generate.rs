//! Static site generation.
//!
//! Stage 2 of the build. Reads the content snapshot written by the fetch
//! stage, substitutes placeholder content for anything the API did not
//! provide, and writes the final site.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── 404.html
//! ├── style.3fa2c1d0.css         # Fingerprinted, colors from config.toml
//! ├── site.9b07e44a.js           # Widget script
//! ├── about/index.html
//! ├── products/index.html
//! ├── gallery/index.html
//! ├── blogs/
//! │   ├── index.html
//! │   └── {id}/index.html        # One per unique post id
//! ├── contact/index.html
//! └── images/...                 # Copied verbatim from <source>/public/
//! ```
//!
//! ## Fallbacks
//!
//! Each remote collection falls back independently: an empty blog list gets
//! the placeholder posts while a non-empty gallery from the same snapshot is
//! kept. Testimonials have no placeholder set, so an empty list renders the
//! section heading alone.

use crate::config::{self, SiteConfig};
use crate::fixtures;
use crate::render::home::{HomeContent, render_home};
use crate::render::pages;
use crate::render::{AssetLinks, PageContext, is_usable_blog_id, unique_posts};
use crate::types::{BlogPost, ContentSnapshot, GalleryItem, TestimonialItem};
use log::{debug, info};
use maud::Markup;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to copy public assets: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// Hex characters of the content hash kept in asset filenames.
const FINGERPRINT_LEN: usize = 8;

/// Content for every page after fixture substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub live: bool,
    pub blogs: Vec<BlogPost>,
    pub gallery: Vec<GalleryItem>,
    pub testimonials: Vec<TestimonialItem>,
    pub hero_background: String,
    /// Collections that came from placeholder content, for reporting.
    pub fallbacks: Vec<&'static str>,
}

impl SiteContent {
    pub fn from_snapshot(snapshot: ContentSnapshot) -> Self {
        let mut fallbacks = Vec::new();

        let blogs = if snapshot.blogs.is_empty() {
            fallbacks.push("blogs");
            fixtures::blog_posts()
        } else {
            snapshot.blogs
        };
        let gallery = if snapshot.gallery.is_empty() {
            fallbacks.push("gallery");
            fixtures::gallery_images()
        } else {
            snapshot.gallery
        };
        let testimonials = if snapshot.testimonials.is_empty() {
            fallbacks.push("testimonials");
            fixtures::testimonials()
        } else {
            snapshot.testimonials
        };
        let hero_background = match snapshot.hero_background {
            Some(url) => url,
            None => {
                fallbacks.push("hero background");
                fixtures::HERO_BACKGROUND.to_string()
            }
        };

        Self {
            live: snapshot.live,
            blogs,
            gallery,
            testimonials,
            hero_background,
            fallbacks,
        }
    }
}

/// One written HTML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub title: String,
    /// Path relative to the output directory.
    pub path: String,
}

/// What a generate run produced.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub content: SiteContent,
    pub pages: Vec<GeneratedPage>,
    pub blog_pages: Vec<GeneratedPage>,
    pub assets: AssetLinks,
    pub public_files: usize,
}

/// Read the snapshot from the fetch stage.
///
/// A missing file means fetch never ran; the site is then built entirely
/// from placeholder content.
pub fn read_snapshot(path: &Path) -> Result<ContentSnapshot, GenerateError> {
    if !path.exists() {
        info!(
            "no content snapshot at {}, using placeholder content",
            path.display()
        );
        return Ok(ContentSnapshot::default());
    }
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

pub fn generate(
    content_path: &Path,
    source_dir: &Path,
    output_dir: &Path,
    config: &SiteConfig,
) -> Result<GenerateReport, GenerateError> {
    let content = SiteContent::from_snapshot(read_snapshot(content_path)?);
    fs::create_dir_all(output_dir)?;

    let color_css = config::generate_color_css(&config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);
    let assets = AssetLinks {
        css: format!("/{}", write_fingerprinted(output_dir, "style", "css", &css)?),
        js: format!("/{}", write_fingerprinted(output_dir, "site", "js", JS)?),
    };

    let public_files = copy_public(&source_dir.join("public"), output_dir)?;

    let ctx = PageContext {
        config,
        assets: &assets,
    };

    let home = HomeContent {
        hero_background: &content.hero_background,
        testimonials: &content.testimonials,
    };
    let pages = vec![
        write_page(output_dir, "Home", "index.html", render_home(&ctx, &home))?,
        write_page(output_dir, "About", "about/index.html", pages::render_about(&ctx))?,
        write_page(
            output_dir,
            "Our Products",
            "products/index.html",
            pages::render_products(&ctx),
        )?,
        write_page(
            output_dir,
            "Gallery",
            "gallery/index.html",
            pages::render_gallery(&ctx, &content.gallery),
        )?,
        write_page(
            output_dir,
            "Blogs",
            "blogs/index.html",
            pages::render_blogs(&ctx, &content.blogs),
        )?,
        write_page(output_dir, "Contact", "contact/index.html", pages::render_contact(&ctx))?,
        write_page(output_dir, "Not Found", "404.html", pages::render_not_found(&ctx))?,
    ];

    let mut blog_pages = Vec::new();
    for post in unique_posts(&content.blogs) {
        let Some(path) = blog_page_path(&post.id) else {
            debug!("skipping blog post with unusable id {:?}", post.id);
            continue;
        };
        if let Some(markup) = pages::render_blog_detail(&ctx, &content.blogs, &post.id) {
            blog_pages.push(write_page(output_dir, &post.title, &path, markup)?);
        }
    }

    Ok(GenerateReport {
        content,
        pages,
        blog_pages,
        assets,
        public_files,
    })
}

/// `blogs/{id}/index.html`, or `None` when the id cannot be a single path
/// segment. Matches the links the blog index renders.
fn blog_page_path(id: &str) -> Option<String> {
    is_usable_blog_id(id).then(|| format!("blogs/{id}/index.html"))
}

fn write_page(
    output_dir: &Path,
    title: &str,
    rel_path: &str,
    markup: Markup,
) -> Result<GeneratedPage, GenerateError> {
    let path = output_dir.join(rel_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, markup.into_string())?;
    debug!("wrote {}", path.display());
    Ok(GeneratedPage {
        title: title.to_string(),
        path: rel_path.to_string(),
    })
}

/// Short content hash used to cache-bust asset filenames.
pub fn fingerprint(content: &str) -> String {
    let digest = format!("{:x}", Sha256::digest(content.as_bytes()));
    digest[..FINGERPRINT_LEN].to_string()
}

/// Write `{stem}.{hash}.{ext}` and return the filename.
fn write_fingerprinted(
    output_dir: &Path,
    stem: &str,
    ext: &str,
    content: &str,
) -> Result<String, GenerateError> {
    let name = format!("{stem}.{}.{ext}", fingerprint(content));
    fs::write(output_dir.join(&name), content)?;
    Ok(name)
}

/// Copy everything under `public/` into the output root. Returns the number
/// of files copied; a missing directory copies nothing.
fn copy_public(public_dir: &Path, output_dir: &Path) -> Result<usize, GenerateError> {
    if !public_dir.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(public_dir) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(public_dir) else {
            continue;
        };
        let dest: PathBuf = output_dir.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::blog_post;
    use tempfile::TempDir;

    fn snapshot_with_blogs(blogs: Vec<BlogPost>) -> ContentSnapshot {
        ContentSnapshot {
            live: true,
            blogs,
            ..ContentSnapshot::default()
        }
    }

    fn run(snapshot: Option<&ContentSnapshot>) -> (TempDir, GenerateReport) {
        let tmp = TempDir::new().unwrap();
        let content_path = tmp.path().join("content.json");
        if let Some(snapshot) = snapshot {
            fs::write(&content_path, serde_json::to_string(snapshot).unwrap()).unwrap();
        }
        let source = tmp.path().join("site");
        fs::create_dir_all(source.join("public/images/logo")).unwrap();
        fs::write(source.join("public/images/logo/Searock.svg"), "<svg/>").unwrap();
        fs::write(source.join("public/robots.txt"), "User-agent: *").unwrap();

        let out = tmp.path().join("dist");
        let report = generate(&content_path, &source, &out, &SiteConfig::default()).unwrap();
        (tmp, report)
    }

    #[test]
    fn empty_snapshot_falls_back_to_fixtures() {
        let content = SiteContent::from_snapshot(ContentSnapshot::default());
        assert_eq!(content.blogs, fixtures::blog_posts());
        assert_eq!(content.gallery, fixtures::gallery_images());
        assert!(content.testimonials.is_empty());
        assert_eq!(content.hero_background, fixtures::HERO_BACKGROUND);
        assert_eq!(
            content.fallbacks,
            vec!["blogs", "gallery", "testimonials", "hero background"]
        );
    }

    #[test]
    fn remote_collections_are_kept_independently() {
        let snapshot = ContentSnapshot {
            live: true,
            blogs: vec![blog_post("remote", "Remote Post")],
            hero_background: Some("https://a.storyblok.com/hero.jpg".into()),
            ..ContentSnapshot::default()
        };
        let content = SiteContent::from_snapshot(snapshot);
        assert_eq!(content.blogs.len(), 1);
        assert_eq!(content.gallery, fixtures::gallery_images());
        assert_eq!(content.hero_background, "https://a.storyblok.com/hero.jpg");
        assert_eq!(content.fallbacks, vec!["gallery", "testimonials"]);
    }

    #[test]
    fn writes_every_route() {
        let (tmp, report) = run(None);
        let out = tmp.path().join("dist");
        for rel in [
            "index.html",
            "404.html",
            "about/index.html",
            "products/index.html",
            "gallery/index.html",
            "blogs/index.html",
            "contact/index.html",
        ] {
            assert!(out.join(rel).is_file(), "{rel}");
        }
        assert_eq!(report.pages.len(), 7);
        assert_eq!(report.blog_pages.len(), fixtures::blog_posts().len());
    }

    #[test]
    fn missing_snapshot_builds_from_placeholders() {
        let (_tmp, report) = run(None);
        assert!(!report.content.live);
        assert!(report.content.fallbacks.contains(&"blogs"));
    }

    #[test]
    fn duplicate_blog_ids_get_one_detail_page() {
        let snapshot = snapshot_with_blogs(vec![
            blog_post("tile-care", "Tile Care"),
            blog_post("tile-care", "Tile Care Again"),
            blog_post("granite", "Granite"),
        ]);
        let (tmp, report) = run(Some(&snapshot));
        let paths: Vec<&str> = report.blog_pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["blogs/tile-care/index.html", "blogs/granite/index.html"]
        );
        let detail =
            fs::read_to_string(tmp.path().join("dist/blogs/tile-care/index.html")).unwrap();
        assert!(detail.contains("<h1>Tile Care</h1>"));
    }

    #[test]
    fn unusable_blog_ids_are_skipped() {
        let snapshot = snapshot_with_blogs(vec![
            blog_post("../escape", "Escape"),
            blog_post("ok", "Ok"),
        ]);
        let (_tmp, report) = run(Some(&snapshot));
        assert_eq!(report.blog_pages.len(), 1);
        assert_eq!(report.blog_pages[0].path, "blogs/ok/index.html");
    }

    #[test]
    fn assets_are_fingerprinted_and_linked() {
        let (tmp, report) = run(None);
        let out = tmp.path().join("dist");
        let css_name = report.assets.css.trim_start_matches('/');
        let js_name = report.assets.js.trim_start_matches('/');
        assert!(css_name.starts_with("style.") && css_name.ends_with(".css"));
        assert!(js_name.starts_with("site.") && js_name.ends_with(".js"));

        let css = fs::read_to_string(out.join(css_name)).unwrap();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-primary: #3C3063"));

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains(&report.assets.css));
        assert!(index.contains(&report.assets.js));
    }

    #[test]
    fn public_directory_is_copied() {
        let (tmp, report) = run(None);
        let out = tmp.path().join("dist");
        assert_eq!(report.public_files, 2);
        assert_eq!(
            fs::read_to_string(out.join("images/logo/Searock.svg")).unwrap(),
            "<svg/>"
        );
        assert!(out.join("robots.txt").is_file());
    }

    #[test]
    fn fingerprint_changes_with_content() {
        let a = fingerprint("body { color: red }");
        let b = fingerprint("body { color: blue }");
        assert_eq!(a.len(), FINGERPRINT_LEN);
        assert_ne!(a, b);
        assert_eq!(a, fingerprint("body { color: red }"));
    }

    #[test]
    fn blog_page_path_rejects_separators() {
        assert_eq!(blog_page_path("tips"), Some("blogs/tips/index.html".into()));
        assert_eq!(blog_page_path(""), None);
        assert_eq!(blog_page_path(".."), None);
        assert_eq!(blog_page_path("a/b"), None);
        assert_eq!(blog_page_path("a?b"), None);
        assert_eq!(blog_page_path("a#b"), None);
        assert_eq!(blog_page_path("a b"), None);
    }

    #[test]
    fn malformed_snapshot_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("content.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(read_snapshot(&path), Err(GenerateError::Json(_))));
    }
}

//! CLI output formatting for the build stages.
//!
//! Output is a content inventory: every collection is listed with its count,
//! every entry by positional index and title, with identifiers and paths as
//! indented context lines.
//!
//! # Output Format
//!
//! ## Fetch
//!
//! ```text
//! Content (live)
//! Blogs (2)
//!     001 Grout Care Essentials
//!         Id: grout-care
//!     002 Kitchen Flooring That Works Hard
//!         Id: kitchen-flooring
//! Gallery (12 images)
//! Testimonials (1)
//!     001 Anu Thomas
//! Hero background
//!     https://a.storyblok.com/f/1/hero.jpg
//! ```
//!
//! ## Generate
//!
//! ```text
//! Pages
//! 001 Home → index.html
//! 002 About → about/index.html
//! ...
//! Blog posts
//! 001 Grout Care Essentials → blogs/grout-care/index.html
//! Assets
//!     /style.3fa2c1d0.css
//!     /site.9b07e44a.js
//!     42 public files
//! Placeholder content: testimonials
//!
//! Generated 7 pages, 8 blog posts
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure.

use crate::config::SiteConfig;
use crate::generate::{GenerateReport, GeneratedPage};
use crate::types::ContentSnapshot;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `"1 page"` / `"2 pages"`.
fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn page_lines(pages: &[GeneratedPage]) -> impl Iterator<Item = String> + '_ {
    pages.iter().enumerate().map(|(i, page)| {
        format!("{} {} \u{2192} {}", format_index(i + 1), page.title, page.path)
    })
}

// ============================================================================
// Fetch
// ============================================================================

pub fn format_fetch_output(snapshot: &ContentSnapshot) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(if snapshot.live {
        "Content (live)".to_string()
    } else {
        "Content (offline, placeholder content will be used)".to_string()
    });

    lines.push(format!("Blogs ({})", snapshot.blogs.len()));
    for (i, post) in snapshot.blogs.iter().enumerate() {
        lines.push(format!("{}{} {}", indent(1), format_index(i + 1), post.title));
        lines.push(format!("{}Id: {}", indent(2), post.id));
    }

    lines.push(format!(
        "Gallery ({})",
        plural(snapshot.gallery.len(), "image", "images")
    ));

    lines.push(format!("Testimonials ({})", snapshot.testimonials.len()));
    for (i, item) in snapshot.testimonials.iter().enumerate() {
        lines.push(format!("{}{} {}", indent(1), format_index(i + 1), item.name));
    }

    lines.push("Hero background".to_string());
    lines.push(format!(
        "{}{}",
        indent(1),
        snapshot.hero_background.as_deref().unwrap_or("(default)")
    ));
    lines
}

pub fn print_fetch_output(snapshot: &ContentSnapshot) {
    for line in format_fetch_output(snapshot) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate
// ============================================================================

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    lines.extend(page_lines(&report.pages));

    if !report.blog_pages.is_empty() {
        lines.push("Blog posts".to_string());
        lines.extend(page_lines(&report.blog_pages));
    }

    lines.push("Assets".to_string());
    lines.push(format!("{}{}", indent(1), report.assets.css));
    lines.push(format!("{}{}", indent(1), report.assets.js));
    lines.push(format!(
        "{}{}",
        indent(1),
        plural(report.public_files, "public file", "public files")
    ));

    if !report.content.fallbacks.is_empty() {
        lines.push(format!(
            "Placeholder content: {}",
            report.content.fallbacks.join(", ")
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}",
        plural(report.pages.len(), "page", "pages"),
        plural(report.blog_pages.len(), "blog post", "blog posts")
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Summary of a validated config. `token_present` says whether the token
/// environment variable is set; the token itself is never printed.
pub fn format_check_output(config: &SiteConfig, token_present: bool) -> Vec<String> {
    let cms = &config.cms;
    vec![
        "Config".to_string(),
        format!("{}Site: {} ({})", indent(1), config.site_name, config.tagline),
        format!("{}Contact: {}, {}", indent(1), config.contact.phone, config.contact.email),
        format!(
            "{}Content API: {} ({})",
            indent(1),
            cms.api_base,
            cms.version.as_str()
        ),
        format!(
            "{}Token: {} {}",
            indent(1),
            cms.token_env,
            if token_present { "set" } else { "not set, offline build" }
        ),
    ]
}

pub fn print_check_output(config: &SiteConfig, token_present: bool) {
    for line in format_check_output(config, token_present) {
        println!("{}", line);
    }
}

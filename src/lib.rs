//! # Searock Site
//!
//! Static site builder for the Searock tile gallery brochure website: a
//! landing page, about, products, gallery, blogs and contact pages, with
//! blogs, gallery images, testimonials and the hero background optionally
//! pulled from a Storyblok space.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Fetch     content API   →  content.json   (remote stories → view models)
//! 2. Generate  content.json  →  dist/          (final HTML site, CSS, JS, assets)
//!    Build     = Fetch + Generate
//! ```
//!
//! The snapshot in between is plain JSON you can inspect or hand-edit. Fetch
//! never fails the build: without a token it makes no request at all, and a
//! failed source contributes an empty list. Generate substitutes placeholder
//! content for every empty list, so an offline build is a complete site.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.toml` loading, stock defaults, merging, validation, CSS variables |
//! | [`types`] | View models (`BlogPost`, `GalleryItem`, ...) and the content snapshot |
//! | [`cms`] | Content adapter: Storyblok client, transport seam, tolerant mapping |
//! | [`fixtures`] | Placeholder content and static page copy |
//! | [`widgets`] | Rotator, counter, partner carousel, contact form rules |
//! | [`render`] | Maud layout and page renderers |
//! | [`generate`] | Stage 2: writes pages, fingerprinted assets and `public/` |
//! | [`output`] | CLI output formatting |
//!
//! # Widgets Without a Framework
//!
//! Interactive behavior lives in [`widgets`] as small state machines. They
//! decide what the server-rendered HTML shows first, and their constants
//! (intervals, page size, patterns, messages) are written into `data-*`
//! attributes that `static/site.js` reads. The script is progressive:
//! reveal toggles, product modals and the gallery lightbox work with CSS
//! alone.

pub mod cms;
pub mod config;
pub mod fixtures;
pub mod generate;
pub mod output;
pub mod render;
pub mod types;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_helpers;

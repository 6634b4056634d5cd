//! Inner pages: about, products, gallery, blogs, blog detail, contact, 404.

use super::{
    PageContext, PageMeta, background_style, base_document, blog_href, form_field, icons,
    page_banner, split_reveal, unique_posts,
};
use crate::cms::mapping::DEFAULT_BLOG_IMAGE;
use crate::fixtures;
use crate::types::{BlogPost, GalleryItem, ProductCategory};
use crate::widgets::{Field, Rotator, wrap_neighbors};
use maud::{Markup, html};
use std::time::Duration;

/// Gallery images shown before "Load More".
pub const GALLERY_INITIAL: usize = 10;
/// Blog cards shown before "Read More Blogs".
pub const BLOGS_INITIAL: usize = 4;

// ============================================================================
// About
// ============================================================================

pub fn render_about(ctx: &PageContext) -> Markup {
    let body = html! {
        section.page-banner {
            h1 { "About us" }
            p { (fixtures::ABOUT_INTRO) }
            div.stat-chips {
                @for (value, suffix, label) in fixtures::ABOUT_STATS {
                    div.stat-chip {
                        span.stat-chip-value { span.accent { (value) } (suffix) }
                        span.stat-chip-label { (label) }
                    }
                }
            }
        }
        section.value-cards style=(background_style(fixtures::SECTION_BACKGROUND)) {
            @for card in fixtures::VALUE_CARDS {
                article.value-card {
                    h2 { (card.title) }
                    p { (card.body) }
                }
            }
        }
        section.difference {
            h2 { "What Makes Us Different" }
            p { (fixtures::DIFFERENCE_TEXT) }
            ul {
                @for point in fixtures::DIFFERENCE_POINTS {
                    li { (icons::CHECK) span { (point) } }
                }
            }
        }
    };
    let meta = PageMeta {
        title: Some("About"),
        description: fixtures::ABOUT_META,
        current: "/about/",
    };
    base_document(ctx, &meta, body)
}

// ============================================================================
// Products
// ============================================================================

pub fn render_products(ctx: &PageContext) -> Markup {
    let slides = Rotator::new(
        fixtures::FEATURE_SLIDES.len(),
        Duration::from_millis(ctx.config.widgets.feature_interval_ms),
    );
    let body = html! {
        (page_banner("Our Products", fixtures::PRODUCTS_INTRO))
        section.product-grid {
            @for category in &fixtures::PRODUCT_CATEGORIES {
                (category_card(category))
            }
        }
        section.feature-slides {
            div.feature-frame data-rotator data-interval=(ctx.config.widgets.feature_interval_ms) {
                @for (idx, slide) in fixtures::FEATURE_SLIDES.iter().enumerate() {
                    div.feature-slide.is-active[idx == slides.index()] data-slide {
                        h2 { (slide.title) }
                        p { (slide.body) }
                    }
                }
            }
        }
        @for category in &fixtures::PRODUCT_CATEGORIES {
            (category_modal(category))
        }
    };
    let meta = PageMeta {
        title: Some("Our Products"),
        description: "Discover our comprehensive range of premium flooring solutions, natural stone, and modern bathware designed to transform your space.",
        current: "/products/",
    };
    base_document(ctx, &meta, body)
}

fn category_card(category: &ProductCategory) -> Markup {
    html! {
        article.category-card {
            div.category-banner {
                img src=(category.image) alt=(category.name) loading="lazy";
                h2 { (category.name) }
            }
            div.category-body {
                p { (category.description) }
                (feature_list(category.features))
                a.button href={ "#modal-" (category.slug()) } { "View Details" }
            }
        }
    }
}

fn category_modal(category: &ProductCategory) -> Markup {
    html! {
        div.modal id={ "modal-" (category.slug()) } role="dialog" aria-label=(category.name) {
            a.modal-backdrop href="#" aria-label="Close" {}
            div.modal-panel {
                a.modal-close href="#" aria-label="Close" { "✕" }
                img src=(category.image) alt=(category.name) loading="lazy";
                div.modal-body {
                    h3 { (category.name) }
                    p { (category.description) }
                    (feature_list(category.features))
                }
            }
        }
    }
}

fn feature_list(features: &[&str]) -> Markup {
    html! {
        ul.feature-list {
            @for feature in features {
                li { span.bullet aria-hidden="true" {} (feature) }
            }
        }
    }
}

// ============================================================================
// Gallery
// ============================================================================

/// Gallery grid with a checkbox "Load More" reveal and a `:target` lightbox
/// per image. Prev/next in the lightbox wrap around the whole list.
pub fn render_gallery(ctx: &PageContext, images: &[GalleryItem]) -> Markup {
    let (first, rest) = split_reveal(images, GALLERY_INITIAL);
    let body = html! {
        (page_banner(
            "Explore our Showroom",
            "Get captivated by a stunning collection of images showcasing various subjects in our meticulously curated gallery.",
        ))
        section.gallery {
            div.gallery-grid {
                @for (idx, image) in first.iter().enumerate() {
                    (gallery_tile(idx, image))
                }
            }
            @if !rest.is_empty() {
                input.reveal-toggle type="checkbox" id="show-more-images";
                label.button.reveal-button for="show-more-images" { "Load More" }
                div.gallery-grid.reveal-more {
                    @for (offset, image) in rest.iter().enumerate() {
                        (gallery_tile(first.len() + offset, image))
                    }
                }
            }
        }
        @for (idx, image) in images.iter().enumerate() {
            (lightbox(idx, images.len(), image))
        }
    };
    let meta = PageMeta {
        title: Some("Gallery"),
        description: "Explore our showroom: a curated gallery of tiles, granites, and bathware.",
        current: "/gallery/",
    };
    base_document(ctx, &meta, body)
}

fn gallery_tile(idx: usize, image: &GalleryItem) -> Markup {
    html! {
        a.gallery-tile href={ "#gallery-" (idx) } {
            figure {
                img src=(image.src) alt=(image.alt) loading="lazy";
            }
        }
    }
}

fn lightbox(idx: usize, len: usize, image: &GalleryItem) -> Markup {
    let (prev, next) = wrap_neighbors(idx, len);
    html! {
        div.lightbox id={ "gallery-" (idx) } role="dialog" aria-label=(image.alt) {
            a.lightbox-backdrop href="#" aria-label="Close" {}
            figure {
                img src=(image.src) alt=(image.alt) loading="lazy";
                figcaption { (image.alt) }
            }
            a.lightbox-close href="#" aria-label="Close" { "✕" }
            @if len > 1 {
                a.lightbox-prev href={ "#gallery-" (prev) } aria-label="Previous image" { "‹" }
                a.lightbox-next href={ "#gallery-" (next) } aria-label="Next image" { "›" }
            }
        }
    }
}

// ============================================================================
// Blogs
// ============================================================================

/// Blog index: posts de-duplicated by id, the first four shown and the rest
/// behind "Read More Blogs".
pub fn render_blogs(ctx: &PageContext, posts: &[BlogPost]) -> Markup {
    let unique = unique_posts(posts);
    let (first, rest) = split_reveal(&unique, BLOGS_INITIAL);
    let body = html! {
        (page_banner("Blogs", "Insights, tips, and inspiration for your projects"))
        section.blogs {
            div.blog-grid {
                @for post in first {
                    (blog_card(post))
                }
            }
            @if !rest.is_empty() {
                input.reveal-toggle type="checkbox" id="show-more-blogs";
                label.button.reveal-button for="show-more-blogs" { "Read More Blogs →" }
                div.blog-grid.reveal-more {
                    @for post in rest {
                        (blog_card(post))
                    }
                }
            }
        }
    };
    let meta = PageMeta {
        title: Some("Blogs"),
        description: "Insights, tips, and inspiration for your projects.",
        current: "/blogs/",
    };
    base_document(ctx, &meta, body)
}

fn blog_card(post: &BlogPost) -> Markup {
    html! {
        article.blog-card {
            img src=(cover_image(post)) alt=(post.title) loading="lazy";
            div.blog-card-body {
                div.blog-meta {
                    span.pill { (post.category) }
                    span { (post.read_time) }
                }
                h3 { (post.title) }
                p { (post.summary) }
                div.blog-footer {
                    @if let Some(href) = blog_href(&post.id) {
                        a href=(href) { "Read More " span aria-hidden="true" { "→" } }
                    }
                    span { (post.date) }
                }
            }
        }
    }
}

fn cover_image(post: &BlogPost) -> &str {
    if post.image.is_empty() {
        DEFAULT_BLOG_IMAGE
    } else {
        &post.image
    }
}

/// Detail page for the post with `id`, or `None` when no post has it.
pub fn render_blog_detail(ctx: &PageContext, posts: &[BlogPost], id: &str) -> Option<Markup> {
    let post = posts.iter().find(|p| p.id == id)?;
    let body = html! {
        section.page-banner {
            h1 { (post.title) }
        }
        article.blog-detail {
            div.blog-meta {
                span.pill { (post.category) }
                span.pill.muted { (post.read_time) }
                @if !post.author.is_empty() {
                    span { (post.author) }
                }
                span { (post.date) }
            }
            img.blog-cover src=(cover_image(post)) alt=(post.title);
            p.blog-summary { (post.summary) }
            div.blog-body {
                @for paragraph in &post.content {
                    p { (paragraph) }
                }
            }
            a.back-link href="/blogs/" { "← Back to Blogs" }
        }
    };
    let meta = PageMeta {
        title: Some(post.title.as_str()),
        description: &post.summary,
        current: "/blogs/",
    };
    Some(base_document(ctx, &meta, body))
}

// ============================================================================
// Contact
// ============================================================================

/// Contact cards, the complaint form (validated, then a simulated send) and
/// the large location map.
pub fn render_contact(ctx: &PageContext) -> Markup {
    let contact = &ctx.config.contact;
    let fields: Vec<&str> = Field::COMPLAINT.iter().map(|f| f.as_str()).collect();
    let body = html! {
        (page_banner(
            "Contact Us",
            "Feel free to reach out with any questions or ideas. We're here to help you build better homes.",
        ))
        section.contact-section aria-labelledby="contact-heading" {
            div.contact-cards {
                h2 id="contact-heading" { "Contact" }
                div.contact-card {
                    (icons::PHONE)
                    div {
                        p.card-title { "Phone" }
                        a href=(contact.tel_href()) { (contact.phone) }
                        p.card-note { "Call us for immediate assistance" }
                    }
                }
                div.contact-card {
                    (icons::MAIL)
                    div {
                        p.card-title { "Email" }
                        a href=(contact.mailto_href()) { (contact.email) }
                        p.card-note { "Send us your inquiries anytime" }
                    }
                }
                div.contact-card {
                    (icons::PIN)
                    div {
                        p.card-title { "Store Location" }
                        p { (contact.address) }
                    }
                }
                div.contact-card {
                    (icons::CLOCK)
                    div {
                        p.card-title { "Business Hours" }
                        p { (contact.hours) }
                    }
                }
            }
            form.contact-form.complaint-form data-validate data-mode="simulate"
                data-fields=(fields.join(",")) novalidate {
                h2 { "Register a Complaint" }
                (form_field(Field::Name, Some("Name"), "Enter your full name"))
                (form_field(Field::Email, Some("Email"), "Enter your e-mail id"))
                (form_field(Field::Phone, Some("Phone Number"), "Enter your phone number"))
                (form_field(Field::Message, Some("Message"), "Please describe your complaint in detail..."))
                button.button type="submit" aria-live="polite" { "Submit" }
            }
        }
        section.location {
            h2 id="location-heading" { "Our Location" }
            div.map.map-large {
                iframe src=(contact.map_embed_url) title="Searock Tile Gallery Location - Large Map"
                    loading="lazy" allowfullscreen referrerpolicy="no-referrer-when-downgrade" {}
            }
        }
    };
    let meta = PageMeta {
        title: Some("Contact"),
        description: "Get in touch with Searock Tile Gallery. Call, email, or visit our store. Find our location on the map and submit your inquiry.",
        current: "/contact/",
    };
    base_document(ctx, &meta, body)
}

// ============================================================================
// Not found
// ============================================================================

pub fn render_not_found(ctx: &PageContext) -> Markup {
    let body = html! {
        section.not-found {
            h1 { "Page not found" }
            p { "The page you are looking for does not exist or has moved." }
            a.button href="/" { "Back to Home" }
        }
    };
    let meta = PageMeta {
        title: Some("Not Found"),
        description: "Page not found.",
        current: "",
    };
    base_document(ctx, &meta, body)
}

//! HTML rendering.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating;
//! every interpolation is escaped. Pages are split by where they appear:
//!
//! - [`home`]: the landing page sections
//! - [`pages`]: about, products, gallery, blogs, blog detail, contact, 404
//!
//! This module holds the shared layout: document shell, navbar, footer and
//! the floating customer-care button.
//!
//! ## Widgets
//!
//! Interactive elements are plain markup plus `data-*` attributes read by
//! `static/site.js`:
//!
//! | Attribute | Element |
//! |-----------|---------|
//! | `data-rotator`, `data-interval` | container of `[data-slide]` children |
//! | `data-counter`, `data-target`, `data-duration` | stat number |
//! | `data-carousel`, `data-page-size`, `data-interval` | container of `[data-carousel-item]` |
//! | `data-validate`, `data-mode`, `data-whatsapp` | contact forms |
//!
//! Reveal toggles, modals and the lightbox work without the script, through
//! checkbox and `:target` selectors.

pub mod home;
pub mod icons;
pub mod pages;

use crate::config::SiteConfig;
use crate::fixtures;
use crate::types::BlogPost;
use crate::widgets::Field;
use maud::{DOCTYPE, Markup, html};
use std::collections::HashSet;

/// Fingerprinted asset URLs, relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLinks {
    pub css: String,
    pub js: String,
}

impl Default for AssetLinks {
    fn default() -> Self {
        Self {
            css: "/style.css".to_string(),
            js: "/site.js".to_string(),
        }
    }
}

/// Everything every page needs besides its own content.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    pub assets: &'a AssetLinks,
}

/// Head metadata for one page.
#[derive(Debug, Clone, Copy)]
pub struct PageMeta<'a> {
    /// Page name, combined with the site name into `<title>`. `None` for the
    /// home page.
    pub title: Option<&'a str>,
    pub description: &'a str,
    /// Route of the navbar entry to mark current.
    pub current: &'a str,
}

/// Renders the full HTML document around `content`.
pub fn base_document(ctx: &PageContext, meta: &PageMeta, content: Markup) -> Markup {
    let site = &ctx.config.site_name;
    let title = match meta.title {
        Some(page) => format!("{page} • {site}"),
        None => format!("{site} | {}", ctx.config.tagline),
    };
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                meta name="description" content=(meta.description);
                link rel="stylesheet" href=(ctx.assets.css);
                script src=(ctx.assets.js) defer {}
            }
            body {
                (navbar(site, meta.current))
                main { (content) }
                (footer(ctx.config))
                (care_fab(ctx.config))
            }
        }
    }
}

/// Sticky header: logo, desktop links, and a checkbox-driven mobile popover.
pub fn navbar(site_name: &str, current: &str) -> Markup {
    html! {
        header.site-header {
            nav.navbar aria-label="Primary" {
                a.brand href="/" {
                    img src="/images/logo/Searock.svg" alt=(site_name) width="320" height="80";
                }
                ul.nav-links {
                    @for link in fixtures::NAV_LINKS {
                        li {
                            a href=(link.href)
                              aria-current=[(link.href == current).then_some("page")] {
                                (link.name)
                            }
                        }
                    }
                }
                input.nav-toggle type="checkbox" id="nav-toggle";
                label.nav-hamburger for="nav-toggle" aria-label="Open menu" {
                    span.hamburger-line {}
                    span.hamburger-line {}
                    span.hamburger-line {}
                }
                div.nav-popover id="mobile-popover" {
                    ul {
                        @for link in fixtures::NAV_LINKS {
                            li { a href=(link.href) { (link.name) } }
                        }
                    }
                }
            }
        }
    }
}

pub fn footer(config: &SiteConfig) -> Markup {
    let contact = &config.contact;
    html! {
        footer.site-footer aria-labelledby="footer-heading" {
            h2.sr-only id="footer-heading" { "Footer" }
            div.footer-brand {
                img src="/images/home/searock-white.png" alt=(config.site_name) width="320" height="80";
                p.footer-follow { "Follow Us" }
                ul.social-links {
                    @for social in fixtures::SOCIAL_LINKS {
                        li {
                            a href=(social.href) target="_blank" rel="noopener noreferrer"
                              aria-label={ "Follow us on " (social.name) } {
                                (icons::social(social.name))
                            }
                        }
                    }
                }
            }
            div.footer-columns {
                div {
                    h4 { "Menu" }
                    ul {
                        @for link in fixtures::FOOTER_MENU {
                            li { a href=(link.href) { (link.name) } }
                        }
                    }
                }
                div {
                    h4 { "Quick Links" }
                    ul {
                        @for link in fixtures::FOOTER_QUICK_LINKS {
                            li { a href=(link.href) { (link.name) } }
                        }
                    }
                }
                div {
                    h4 { "Contact" }
                    ul.footer-contact {
                        li { (icons::PIN) p { (contact.address) } }
                        li { a href=(contact.tel_href()) { (icons::PHONE) (contact.phone) } }
                        li { a href=(contact.mailto_href()) { (icons::MAIL) (contact.email) } }
                    }
                }
            }
            p.copyright { (fixtures::COPYRIGHT) }
        }
    }
}

/// Floating customer-care button with WhatsApp, call and mail actions.
pub fn care_fab(config: &SiteConfig) -> Markup {
    let contact = &config.contact;
    html! {
        details.care-fab {
            summary aria-label="Customer Care" { (icons::CHAT) }
            ul.care-actions {
                li {
                    a.care-whatsapp href=(contact.whatsapp_href()) target="_blank" rel="noopener noreferrer" {
                        (icons::WHATSAPP) span { "WhatsApp" }
                    }
                }
                li { a.care-call href=(contact.tel_href()) { (icons::PHONE) span { "Call" } } }
                li { a.care-mail href=(contact.mailto_href()) { (icons::MAIL) span { "Mail" } } }
            }
        }
    }
}

/// Colored page banner used at the top of every inner page.
pub fn page_banner(heading: &str, intro: &str) -> Markup {
    html! {
        section.page-banner {
            h1 { (heading) }
            p { (intro) }
        }
    }
}

/// One validated input with its hidden error slot.
///
/// The required and invalid messages travel as data attributes so the
/// script shows exactly the messages [`Field`] defines.
pub fn form_field(field: Field, label: Option<&str>, placeholder: &str) -> Markup {
    let id = field.as_str();
    let error_id = format!("{id}-error");
    let input_type = match field {
        Field::Email => "email",
        Field::Phone => "tel",
        Field::Name | Field::Message => "text",
    };
    html! {
        div.form-field {
            @if let Some(label) = label {
                label for=(id) { (label) }
            }
            @if field == Field::Message {
                textarea id=(id) name=(id) rows="4" placeholder=(placeholder)
                    data-required-message=(field.required_message())
                    aria-describedby=(error_id) {}
            } @else {
                input id=(id) name=(id) type=(input_type) placeholder=(placeholder)
                    data-required-message=(field.required_message())
                    data-pattern=[field.pattern()]
                    data-invalid-message=[field.invalid_message()]
                    aria-describedby=(error_id);
            }
            p.field-error id=(error_id) role="alert" hidden {}
        }
    }
}

/// Split a list at `shown` for "show more" sections.
pub fn split_reveal<T>(items: &[T], shown: usize) -> (&[T], &[T]) {
    items.split_at(shown.min(items.len()))
}

/// `background-image` declaration for an inline `style` attribute. Quotes,
/// parentheses, backslashes, whitespace and control characters in the URL
/// are percent-encoded so it cannot close the `url('…')` token.
pub fn background_style(url: &str) -> String {
    let mut encoded = String::with_capacity(url.len());
    for c in url.chars() {
        if matches!(c, '\'' | '"' | '(' | ')' | '\\') || c.is_whitespace() || c.is_control() {
            let mut buf = [0; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                encoded.push_str(&format!("%{byte:02X}"));
            }
        } else {
            encoded.push(c);
        }
    }
    format!("background-image: url('{encoded}')")
}

/// Whether a blog id works as one literal URL path segment and directory
/// name. Separators, dot segments, whitespace, control characters and the
/// URL delimiters `?`, `#` and `%` all disqualify it.
pub fn is_usable_blog_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.chars().any(|c| {
            matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace() || c.is_control()
        })
}

/// `/blogs/{id}/`, or `None` when the id has no detail page.
pub fn blog_href(id: &str) -> Option<String> {
    is_usable_blog_id(id).then(|| format!("/blogs/{id}/"))
}

/// Posts in order with repeated ids removed; the first occurrence wins.
pub fn unique_posts(posts: &[BlogPost]) -> Vec<&BlogPost> {
    let mut seen = HashSet::new();
    posts
        .iter()
        .filter(|post| seen.insert(post.id.as_str()))
        .collect()
}

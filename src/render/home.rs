//! Landing page sections.
//!
//! The home route stacks, in order: hero, about with rotating highlights,
//! stats counters, story, collections, partners carousel, testimonials, and
//! the WhatsApp contact form with a map.

use super::{PageContext, PageMeta, background_style, base_document, form_field, icons};
use crate::config::{SiteConfig, WidgetsConfig};
use crate::fixtures;
use crate::types::TestimonialItem;
use crate::widgets::{Carousel, CounterAnimation, Field, Rotator, contact};
use maud::{Markup, html};
use std::time::Duration;

/// Data the home page takes from the content snapshot.
#[derive(Debug, Clone, Copy)]
pub struct HomeContent<'a> {
    pub hero_background: &'a str,
    pub testimonials: &'a [TestimonialItem],
}

pub fn render_home(ctx: &PageContext, content: &HomeContent) -> Markup {
    let widgets = &ctx.config.widgets;
    let body = html! {
        (hero(content.hero_background, &ctx.config.tagline))
        (about_section(widgets))
        (stats_section(widgets))
        (story_section())
        (collections_section())
        (partners_section(widgets))
        (testimonials_section(content.testimonials, widgets))
        (home_contact(ctx.config))
    };
    let meta = PageMeta {
        title: None,
        description: fixtures::ABOUT_INTRO,
        current: "/",
    };
    base_document(ctx, &meta, body)
}

pub fn hero(background: &str, tagline: &str) -> Markup {
    html! {
        section.hero aria-label="Hero section" style=(background_style(background)) {
            div.hero-content {
                h1.hero-title {
                    span { "Bring life" }
                    span { "to your home" }
                }
                p.hero-tagline { (highlight_middle_word(tagline)) }
                a.button.hero-cta href="/contact/#location-heading" aria-label="Find a store near you" {
                    (icons::PIN) span { "Locate Store" }
                }
            }
        }
    }
}

/// "Your Flooring Partner" with the middle word accented. Taglines of any
/// other length are rendered plain.
fn highlight_middle_word(tagline: &str) -> Markup {
    let words: Vec<&str> = tagline.split_whitespace().collect();
    match words.as_slice() {
        [first, middle, last] => html! {
            (first) " " span.accent { (middle) } " " (last)
        },
        _ => html! { (tagline) },
    }
}

pub fn about_section(widgets: &WidgetsConfig) -> Markup {
    let rotator = Rotator::new(
        fixtures::HIGHLIGHTS.len(),
        Duration::from_millis(widgets.highlight_interval_ms),
    );
    html! {
        section.home-about aria-label="About Searock section"
            style=(background_style(fixtures::SECTION_BACKGROUND)) {
            h2.section-title { "About Searock" }
            div.about-copy {
                p.lead { "Welcome to searock" }
                @for paragraph in fixtures::ABOUT_PARAGRAPHS {
                    p { (paragraph) }
                }
            }
            div.highlights data-rotator data-interval=(widgets.highlight_interval_ms) {
                @for (idx, item) in fixtures::HIGHLIGHTS.iter().enumerate() {
                    div.highlight.is-active[idx == rotator.index()] data-slide {
                        div.diamond aria-hidden="true" { (icons::highlight(item.icon)) }
                        p.highlight-label aria-live="polite" { (item.label) }
                    }
                }
            }
        }
    }
}

/// Counters are rendered at their reduced-motion frame, the final value.
/// The script resets them to zero and counts up once they scroll into view.
pub fn stats_section(widgets: &WidgetsConfig) -> Markup {
    let duration = Duration::from_millis(widgets.counter_duration_ms);
    let settled = |target: u32| {
        CounterAnimation::new(target, duration)
            .with_reduced_motion(true)
            .value_at(Duration::ZERO)
    };
    html! {
        section.stats aria-label="Company statistics" {
            h2.section-title {
                (fixtures::STATS_HEADING[0]) br; (fixtures::STATS_HEADING[1])
            }
            div.stats-grid {
                @for stat in fixtures::STATS {
                    div.stat-card data-reveal {
                        p.stat-value {
                            span data-counter data-target=(stat.value)
                                data-duration=(widgets.counter_duration_ms) {
                                (settled(stat.value))
                            }
                            span.stat-suffix { (stat.suffix) }
                        }
                        p.stat-label { (stat.label) }
                    }
                }
            }
        }
    }
}

pub fn story_section() -> Markup {
    let image = fixtures::STORY_IMAGE;
    html! {
        section.story aria-label="Our Story section" {
            img src=(image.src) alt=(image.alt) loading="lazy";
            p.story-text { (fixtures::STORY_TEXT) }
            a.button href="/about/" aria-label="Learn more about our story" {
                span { "Our Story" } (icons::ARROW)
            }
        }
    }
}

pub fn collections_section() -> Markup {
    html! {
        section.collections aria-label="Our Collections section" {
            header.section-header {
                h2.section-title { "Our Collections" }
                p { (fixtures::COLLECTIONS_INTRO) }
            }
            @for collection in fixtures::COLLECTIONS {
                article.collection {
                    h3 { (collection.title) }
                    p { (collection.description) }
                    div.collection-images {
                        @for image in collection.images {
                            img src=(image.src) alt=(image.alt) loading="lazy";
                        }
                    }
                    a.button href="/gallery/" { span { "Explore More" } (icons::ARROW) }
                }
            }
        }
    }
}

pub fn partners_section(widgets: &WidgetsConfig) -> Markup {
    let carousel = Carousel::new(fixtures::PARTNERS.len(), widgets.partner_page_size);
    let shown = carousel.visible();
    html! {
        section.partners aria-label="Our Trusted Partners section"
            style=(background_style(fixtures::PARTNERS_BACKGROUND)) {
            header.section-header {
                h2.section-title { "Our Trusted Partners" }
                p { "Collaborating with the best to deliver lasting excellence." }
            }
            div.partner-grid data-carousel data-page-size=(carousel.page_size())
                data-interval=(widgets.partner_interval_ms) {
                @for (idx, partner) in fixtures::PARTNERS.iter().enumerate() {
                    div.partner data-carousel-item hidden[!shown.contains(&idx)] {
                        img src=(partner.src) alt=(partner.alt) title=(partner.name) loading="lazy";
                    }
                }
            }
        }
    }
}

pub fn testimonials_section(items: &[TestimonialItem], widgets: &WidgetsConfig) -> Markup {
    let rotator = Rotator::new(
        items.len(),
        Duration::from_millis(widgets.testimonial_interval_ms),
    );
    html! {
        section.testimonials aria-label="Customer testimonials section" {
            header.section-header {
                h2.section-title { "What Our Clients Say" }
                p { "Hear from those who've transformed their spaces with Searock." }
            }
            @if !items.is_empty() {
                div.testimonial-stage data-rotator data-interval=(widgets.testimonial_interval_ms) {
                    @for (idx, item) in items.iter().enumerate() {
                        article.testimonial.is-active[idx == rotator.index()] data-slide role="article" {
                            (icons::QUOTE)
                            @if !item.avatar.is_empty() {
                                img.avatar src=(item.avatar) alt=(item.name) loading="lazy";
                            }
                            h3 { (item.name) }
                            p { (item.text) }
                        }
                    }
                }
            }
        }
    }
}

/// Name, phone and message, sent as a pre-filled WhatsApp chat.
pub fn home_contact(config: &SiteConfig) -> Markup {
    let fields: Vec<&str> = Field::WHATSAPP.iter().map(|f| f.as_str()).collect();
    html! {
        section.home-contact aria-labelledby="home-contact-heading" {
            h2.section-title id="home-contact-heading" { "CONTACT US" }
            div.home-contact-grid {
                form.contact-form data-validate data-mode="whatsapp"
                    data-fields=(fields.join(",")) data-whatsapp=(config.contact.whatsapp)
                    data-template=(contact::WHATSAPP_TEMPLATE) novalidate {
                    (form_field(Field::Name, None, "Name"))
                    (form_field(Field::Phone, None, "Phone Number"))
                    (form_field(Field::Message, None, "Message"))
                    button.button type="submit" { "Submit" }
                }
                div.map {
                    iframe src=(config.contact.map_embed_url) title="Searock Tile Gallery Location"
                        loading="lazy" allowfullscreen referrerpolicy="no-referrer-when-downgrade" {}
                }
            }
        }
    }
}

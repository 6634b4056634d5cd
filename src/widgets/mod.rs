//! Client-side widget behavior as plain state machines.
//!
//! The browser runs these widgets from `static/site.js`. The Rust side picks
//! the server-rendered initial state and writes the timings, page sizes,
//! field patterns, messages and the WhatsApp template into `data-*`
//! attributes. The script reads those values instead of its own copies. The
//! stepping logic itself exists twice: here as the reference model the tests
//! exercise, and in the script. The browser tests under `tests/` hold the two
//! together.
//!
//! | Widget | Used by |
//! |--------|---------|
//! | [`Rotator`] | About highlights, testimonials, product feature slides |
//! | [`CounterAnimation`] | Home stats cards |
//! | [`Carousel`] | Partner logos |
//! | [`ContactForm`] | Contact page complaint form, home WhatsApp form |
//!
//! All timers advance only through explicit `tick` calls. Nothing here reads
//! a clock.

pub mod carousel;
pub mod contact;
pub mod counter;
pub mod rotator;

pub use carousel::{Carousel, wrap_neighbors};
pub use contact::{ContactForm, Field, FieldErrors, whatsapp_link, whatsapp_message};
pub use counter::CounterAnimation;
pub use rotator::Rotator;

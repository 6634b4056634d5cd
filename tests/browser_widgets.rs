//! Browser tests for the widget script.
//!
//! Run with: `cargo test --test browser_widgets -- --ignored`
//!
//! Pages are opened from disk, so root-relative asset URLs do not resolve.
//! Each test injects the generated script into the page instead.

use headless_chrome::{Browser, LaunchOptions, Tab};
use searock_site::widgets::{ContactForm, whatsapp_link};
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/browser/generated")
}

fn ensure_site_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let output_dir = generated_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir).expect("failed to clean output dir");
        }

        let status = Command::new(env!("CARGO_BIN_EXE_searock-site"))
            .args([
                "build",
                "--source",
                root.join("fixtures/site").to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
                "--temp-dir",
                root.join(".searock-browser-temp").to_str().unwrap(),
            ])
            .env_remove("SEAROCK_FIXTURE_TOKEN")
            .status()
            .expect("failed to run searock-site");
        assert!(status.success(), "site generation failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn site_script() -> String {
    let entry = std::fs::read_dir(generated_dir())
        .unwrap()
        .filter_map(|e| e.ok())
        .find(|e| {
            let name = e.file_name().to_string_lossy().into_owned();
            name.starts_with("site.") && name.ends_with(".js")
        })
        .expect("no script in output");
    std::fs::read_to_string(entry.path()).unwrap()
}

fn load(rel: &str) -> Arc<Tab> {
    load_with(rel, "")
}

/// Like [`load`], but runs `setup` on the page before the script starts.
fn load_with(rel: &str, setup: &str) -> Arc<Tab> {
    ensure_site_built();
    let tab = browser().new_tab().unwrap();
    let file = generated_dir().join(rel);
    assert!(file.exists(), "missing: {}", file.display());
    tab.navigate_to(&format!("file://{}", file.display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    if !setup.is_empty() {
        tab.evaluate(setup, false).unwrap();
    }
    tab.evaluate(&site_script(), false).unwrap();
    tab
}

fn eval_str(tab: &Tab, js: &str) -> String {
    tab.evaluate(js, false)
        .unwrap()
        .value
        .and_then(|v| v.as_str().map(String::from))
        .unwrap_or_default()
}

fn eval_bool(tab: &Tab, js: &str) -> bool {
    tab.evaluate(js, false)
        .unwrap()
        .value
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn highlight_rotates() {
    let tab = load("index.html");
    tab.evaluate(
        "document.querySelector('.highlights').scrollIntoView()",
        false,
    )
    .unwrap();
    let js = "document.querySelector('.highlights .is-active .highlight-label').textContent";
    let first = eval_str(&tab, js);
    std::thread::sleep(Duration::from_millis(1200));
    assert_ne!(eval_str(&tab, js), first);
}

#[test]
#[ignore]
fn counters_finish_at_target() {
    let tab = load("index.html");
    tab.evaluate(
        "document.querySelector('.stats').scrollIntoView()",
        false,
    )
    .unwrap();
    std::thread::sleep(Duration::from_millis(2600));
    let done = eval_bool(
        &tab,
        "Array.from(document.querySelectorAll('[data-counter]'))\
         .every(el => el.textContent === el.dataset.target)",
    );
    assert!(done);
}

#[test]
#[ignore]
fn partner_carousel_pages() {
    let tab = load("index.html");
    tab.evaluate(
        "document.querySelector('.partners').scrollIntoView()",
        false,
    )
    .unwrap();
    let js = "Array.from(document.querySelectorAll('[data-carousel-item]'))\
              .map((el, i) => el.hidden ? '' : i).join('')";
    assert_eq!(eval_str(&tab, js), "012");
    std::thread::sleep(Duration::from_millis(800));
    assert_eq!(eval_str(&tab, js), "345");
}

#[test]
#[ignore]
fn wrapped_carousel_window_keeps_display_order() {
    let tab = load_with(
        "index.html",
        "document.querySelector('[data-carousel-item]:last-child').remove()",
    );
    tab.evaluate(
        "document.querySelector('.partners').scrollIntoView()",
        false,
    )
    .unwrap();
    std::thread::sleep(Duration::from_millis(800));
    let js = "Array.from(document.querySelectorAll('[data-carousel-item]'))\
              .map((el, i) => ({ el, i })).filter(x => !x.el.hidden)\
              .sort((a, b) => Number(a.el.style.order) - Number(b.el.style.order))\
              .map(x => x.i).join('')";
    assert_eq!(eval_str(&tab, js), "340");
}

#[test]
#[ignore]
fn complaint_form_shows_three_errors() {
    let tab = load("contact/index.html");
    tab.evaluate(
        "const f = document.querySelector('.complaint-form');\
         f.elements.email.value = 'not-an-email';\
         f.elements.phone.value = 'call me';\
         f.elements.message.value = 'Hello';\
         f.requestSubmit();",
        false,
    )
    .unwrap();
    let shown = eval_str(
        &tab,
        "Array.from(document.querySelectorAll('.complaint-form .field-error'))\
         .filter(el => !el.hidden).map(el => el.textContent).join('|')",
    );
    assert_eq!(
        shown,
        "Name is required|Invalid email address|Invalid phone number"
    );
    let label = eval_str(&tab, "document.querySelector('.complaint-form button').textContent");
    assert_eq!(label, "Submit");
}

#[test]
#[ignore]
fn whatsapp_form_opens_deep_link() {
    let tab = load("index.html");
    tab.evaluate(
        "window.__opened = null; window.open = (url) => { window.__opened = url; };\
         const f = document.querySelector('form[data-mode=\"whatsapp\"]');\
         f.elements.name.value = 'Asha (site)';\
         f.elements.phone.value = '+91 98765';\
         f.elements.message.value = \"Hi! It's me\";\
         f.requestSubmit();",
        false,
    )
    .unwrap();
    let url = eval_str(&tab, "window.__opened");
    let form = ContactForm {
        name: "Asha (site)".into(),
        phone: "+91 98765".into(),
        message: "Hi! It's me".into(),
        ..ContactForm::default()
    };
    assert_eq!(url, whatsapp_link("916238811940", &form));
}

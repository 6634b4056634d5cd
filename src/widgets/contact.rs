//! Contact form validation and the WhatsApp deep link.
//!
//! Two forms share these rules. The contact page form collects all four
//! fields and simulates a submission; the home page form collects name,
//! phone and message and opens a pre-filled WhatsApp chat.

use regex::Regex;
use std::sync::LazyLock;

/// Pattern source shared with the browser script.
pub const EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";
/// Pattern source shared with the browser script. Digits are ASCII only, as
/// in a JavaScript `RegExp` without the `u` flag.
pub const PHONE_PATTERN: &str = r"^[+]?[0-9\s\-()]+$";

/// Pre-filled WhatsApp message. `{name}`, `{phone}` and `{message}` are
/// replaced in one pass; the browser script receives the same template.
pub const WHATSAPP_TEMPLATE: &str =
    "Hello! 👋\n\nName: {name}\nPhone: {phone}\nMessage: {message}";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(PHONE_PATTERN).unwrap());
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(name|phone|message)\}").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    /// Fields of the contact page complaint form, in display order.
    pub const COMPLAINT: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];
    /// Fields of the home page WhatsApp form, in display order.
    pub const WHATSAPP: [Field; 3] = [Field::Name, Field::Phone, Field::Message];

    /// The input's `name` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    pub fn required_message(self) -> &'static str {
        match self {
            Field::Name => "Name is required",
            Field::Email => "Email is required",
            Field::Phone => "Phone number is required",
            Field::Message => "Message is required",
        }
    }

    /// Message for a present but malformed value. Only email and phone have
    /// a format.
    pub fn invalid_message(self) -> Option<&'static str> {
        match self {
            Field::Email => Some("Invalid email address"),
            Field::Phone => Some("Invalid phone number"),
            Field::Name | Field::Message => None,
        }
    }

    /// Format pattern, if the field has one.
    pub fn pattern(self) -> Option<&'static str> {
        match self {
            Field::Email => Some(EMAIL_PATTERN),
            Field::Phone => Some(PHONE_PATTERN),
            Field::Name | Field::Message => None,
        }
    }

    fn is_well_formed(self, value: &str) -> bool {
        match self {
            Field::Email => EMAIL_RE.is_match(value),
            Field::Phone => PHONE_RE.is_match(value),
            Field::Name | Field::Message => true,
        }
    }
}

/// Transient form state. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Per-field validation messages. An empty set means the form may submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(Field, &'static str)>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| *msg)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().copied()
    }
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    /// Check `fields`: blank (after trimming) is missing, otherwise the
    /// value must match the field's pattern.
    pub fn validate(&self, fields: &[Field]) -> FieldErrors {
        let errors = fields
            .iter()
            .filter_map(|&field| {
                let value = self.value(field);
                if value.trim().is_empty() {
                    Some((field, field.required_message()))
                } else if !field.is_well_formed(value) {
                    field.invalid_message().map(|msg| (field, msg))
                } else {
                    None
                }
            })
            .collect();
        FieldErrors { errors }
    }

    /// Validate, then hand the form to `effect` only when it is valid.
    pub fn submit<F>(&self, fields: &[Field], effect: F) -> Result<(), FieldErrors>
    where
        F: FnOnce(&ContactForm),
    {
        let errors = self.validate(fields);
        if !errors.is_empty() {
            return Err(errors);
        }
        effect(self);
        Ok(())
    }
}

/// The pre-filled WhatsApp message for the home page form.
pub fn whatsapp_message(form: &ContactForm) -> String {
    PLACEHOLDER_RE
        .replace_all(WHATSAPP_TEMPLATE, |caps: &regex::Captures| {
            let field = match &caps[1] {
                "name" => Field::Name,
                "phone" => Field::Phone,
                _ => Field::Message,
            };
            form.value(field).to_string()
        })
        .into_owned()
}

/// Characters `encodeURIComponent` leaves alone but `urlencoding` escapes.
const URI_COMPONENT_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encode `value` exactly as the browser's `encodeURIComponent`.
pub fn encode_uri_component(value: &str) -> String {
    URI_COMPONENT_MARKS
        .iter()
        .fold(urlencoding::encode(value).into_owned(), |acc, (escaped, mark)| {
            acc.replace(escaped, mark)
        })
}

/// `https://wa.me/{number}?text=…` with the message URL-encoded.
pub fn whatsapp_link(number: &str, form: &ContactForm) -> String {
    format!(
        "https://wa.me/{number}?text={}",
        encode_uri_component(&whatsapp_message(form))
    )
}

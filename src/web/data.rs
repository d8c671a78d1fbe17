//! Request and page data used by the `web` module, their parsing implementations and tests for those.

use derive_more::Deref;
use lazy_regex::{lazy_regex, Lazy, Regex};
use serde::Serialize;
use serde_json::Value;

use crate::{
    config::{Product, SiteConfig},
    web::SUBSCRIBE_PATH,
};

/// `local-part@domain.tld`: no whitespace or `@` in any part, at least one `.` after the `@`.
///
/// The landing page hands the same pattern to the client script, so "whitespace" is spelled
/// out as the browser's `\s` set (`JS_WHITESPACE`) instead of `regex`'s Unicode `\s`.
/// Only 4-digit `\uXXXX` escapes are used since both engines read them the same way.
pub static EMAIL_RE: Lazy<Regex> = lazy_regex!(
    r"^[^\t\n\v\f\r \u00A0\u1680\u2000-\u200A\u2028\u2029\u202F\u205F\u3000\uFEFF@]+@[^\t\n\v\f\r \u00A0\u1680\u2000-\u200A\u2028\u2029\u202F\u205F\u3000\uFEFF@]+\.[^\t\n\v\f\r \u00A0\u1680\u2000-\u200A\u2028\u2029\u202F\u205F\u3000\uFEFF@]+$"
);

/// Whitespace and line terminators as a browser's `String.prototype.trim` and `\s` see them.
pub const JS_WHITESPACE: &[char] = &[
    '\t', '\n', '\u{0B}', '\u{0C}', '\r', ' ', '\u{A0}', '\u{1680}', '\u{2000}', '\u{2001}',
    '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}', '\u{2006}', '\u{2007}', '\u{2008}',
    '\u{2009}', '\u{200A}', '\u{2028}', '\u{2029}', '\u{202F}', '\u{205F}', '\u{3000}',
    '\u{FEFF}',
];

// ###################################
// ->   STRUCTS
// ###################################
/// Validated subscriber email, trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct ValidEmail(String);

impl AsRef<str> for ValidEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ValidEmail {
    pub fn parse<S>(value: S) -> Result<Self, DataParsingError>
    where
        S: AsRef<str>,
    {
        let value = value.as_ref().trim_matches(JS_WHITESPACE).to_lowercase();

        if EMAIL_RE.is_match(&value) {
            Ok(ValidEmail(value))
        } else {
            Err(DataParsingError::EmailInvalid)
        }
    }
}

/// The body of a `subscribe` request: `{ "email": string }`.
///
/// Parsed by hand instead of through `axum::Json` so that a malformed body and a bad
/// `email` field get distinct responses, and so that a non-string `email` is coerced
/// to text the way a browser would instead of being rejected outright.
#[derive(Debug)]
pub struct SubscribeBody {
    pub email: String,
}

impl SubscribeBody {
    /// An empty body counts as `{}`.
    pub fn from_slice(body: &[u8]) -> Result<Self, DataParsingError> {
        let json: Value = if body.is_empty() {
            Value::Object(Default::default())
        } else {
            serde_json::from_slice(body).map_err(DataParsingError::InvalidJson)?
        };

        // `Value::get` is `None` for anything that isn't an object.
        let email = match json.get("email") {
            Some(value) if is_truthy(value) => js_string(value),
            _ => String::new(),
        };

        Ok(Self { email })
    }
}

/// Everything `templates/html/home.html` renders.
#[derive(Debug, Serialize)]
pub struct HomePage<'a> {
    pub brand: &'a str,
    pub tagline: &'a str,
    pub hero_video: Option<&'a str>,
    pub products: &'a [Product],
    pub year: i32,
    pub email_pattern: &'a str,
    pub subscribe_path: &'a str,
}

impl<'a> HomePage<'a> {
    pub fn new(site: &'a SiteConfig, year: i32) -> Self {
        Self {
            brand: &site.brand,
            tagline: &site.tagline,
            hero_video: site.hero_video.as_deref(),
            products: &site.products,
            year,
            email_pattern: EMAIL_RE.as_str(),
            subscribe_path: SUBSCRIBE_PATH,
        }
    }
}

// ###################################
// ->   HELPERS
// ###################################
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of a JSON value as a browser's `String(value)` would produce it.
fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        // Array items that are `null` become empty strings.
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                item => js_string(item),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum DataParsingError {
    #[error("invalid json: {0}")]
    InvalidJson(serde_json::Error),
    #[error("email invalid")]
    EmailInvalid,
}

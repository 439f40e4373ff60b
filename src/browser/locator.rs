// src/browser/locator.rs
use std::fmt;

/// How to find an element. Kept semantic (not raw XPath) so any driver,
/// including a markup-only one, can resolve it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Locator {
    /// `id` attribute.
    Id(String),
    /// Anchor whose normalized text equals this.
    LinkText(String),
    /// Anchor whose `href` attribute equals this exactly.
    Href(String),
    /// Element of `tag` whose own text contains `text`.
    TextContains { tag: String, text: String },
}

impl Locator {
    pub fn id(id: &str) -> Self {
        Locator::Id(s!(id))
    }

    pub fn link_text(text: &str) -> Self {
        Locator::LinkText(s!(text))
    }

    pub fn href(href: &str) -> Self {
        Locator::Href(s!(href))
    }

    pub fn text_contains(tag: &str, text: &str) -> Self {
        Locator::TextContains { tag: s!(tag), text: s!(text) }
    }

    pub fn to_xpath(&self) -> String {
        match self {
            Locator::Id(id) => format!("//*[@id={}]", xpath_literal(id)),
            Locator::LinkText(t) => format!("//a[normalize-space(.)={}]", xpath_literal(t)),
            Locator::Href(h) => format!("//a[@href={}]", xpath_literal(h)),
            Locator::TextContains { tag, text } => {
                format!("//{tag}[contains(text(), {})]", xpath_literal(text))
            }
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Id(id) => write!(f, "#{id}"),
            Locator::LinkText(t) => write!(f, "link \"{t}\""),
            Locator::Href(h) => write!(f, "a[href=\"{h}\"]"),
            Locator::TextContains { tag, text } => write!(f, "{tag} containing \"{text}\""),
        }
    }
}

/// Quote `s` as an XPath 1.0 string literal. XPath has no escapes, so a value
/// holding both quote kinds is split into a `concat()`.
pub fn xpath_literal(s: &str) -> String {
    if !s.contains('\'') {
        return join!("'", s, "'");
    }
    if !s.contains('"') {
        return join!("\"", s, "\"");
    }
    let parts: Vec<String> = s
        .split('\'')
        .map(|p| join!("'", p, "'"))
        .collect();
    format!("concat({})", parts.join(", \"'\", "))
}

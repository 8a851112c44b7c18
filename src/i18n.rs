//! Localized greeting catalog.
//!
//! A simple locale -> string lookup with an `Accept-Language` aware resolver
//! and a default fallback. No pluralization or message formatting.

use std::collections::HashMap;

/// Built-in greeting translations, extendable via configuration.
const BUILTIN_GREETINGS: &[(&str, &str)] = &[
    ("en", "Good Morning"),
    ("de", "Guten Morgen"),
    ("es", "Buenos Dias"),
    ("fr", "Bonjour"),
    ("nl", "Goedemorgen"),
];

/// Locale-keyed greeting messages with a default fallback.
#[derive(Debug, Clone)]
pub struct GreetingCatalog {
    default: String,
    messages: HashMap<String, String>,
}

impl GreetingCatalog {
    /// Build a catalog from the built-in translations, a default message,
    /// and configuration overrides (which win over built-ins).
    pub fn new(default: impl Into<String>, overrides: &HashMap<String, String>) -> Self {
        let mut messages: HashMap<String, String> = BUILTIN_GREETINGS
            .iter()
            .map(|(locale, message)| (locale.to_string(), message.to_string()))
            .collect();
        for (locale, message) in overrides {
            messages.insert(locale.to_lowercase(), message.clone());
        }

        Self {
            default: default.into(),
            messages,
        }
    }

    /// Resolve the greeting for an `Accept-Language` header value.
    ///
    /// Tags are tried in descending quality order; a full-tag match (`fr-be`)
    /// is preferred, then the primary subtag (`fr`). Unknown locales and a
    /// missing header fall back to the default message.
    pub fn greet(&self, accept_language: Option<&str>) -> &str {
        let Some(header) = accept_language else {
            return &self.default;
        };

        for tag in parse_accept_language(header) {
            if let Some(message) = self.messages.get(&tag) {
                return message;
            }
            if let Some((primary, _)) = tag.split_once('-') {
                if let Some(message) = self.messages.get(primary) {
                    return message;
                }
            }
        }

        &self.default
    }

    pub fn default_message(&self) -> &str {
        &self.default
    }
}

/// Parse an `Accept-Language` header into lowercase tags sorted by
/// descending quality. Wildcards and malformed entries are dropped.
fn parse_accept_language(header: &str) -> Vec<String> {
    let mut tags: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.trim().split(';');
            let tag = parts.next()?.trim().to_lowercase();
            if tag.is_empty() || tag == "*" {
                return None;
            }

            let quality = parts
                .find_map(|param| {
                    let (key, value) = param.trim().split_once('=')?;
                    (key.trim() == "q").then(|| value.trim().parse::<f32>().ok())?
                })
                .unwrap_or(1.0);

            (quality > 0.0).then_some((tag, quality))
        })
        .collect();

    tags.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    tags.into_iter().map(|(tag, _)| tag).collect()
}

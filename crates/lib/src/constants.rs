//! # Shared Constants
//!
//! Endpoint and defaults shared by the library and the `wikirand` binary.

/// Placeholder substituted with the language code in [`API_URL_TEMPLATE`].
pub const LANGUAGE_PLACEHOLDER: &str = "{language}";

/// The random page summary endpoint of the Wikipedia REST API.
pub const API_URL_TEMPLATE: &str =
    "https://{language}.wikipedia.org/api/rest_v1/page/random/summary";

/// The language edition queried when the caller does not pick one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Sent with every request. Wikimedia refuses clients without one.
pub const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (https://www.mediawiki.org/wiki/API:Etiquette)"
);

//! # Shared Test Fixtures
//!
//! A mock random-summary endpoint plus canned payloads, shared by the
//! library and CLI test suites.

use serde_json::{json, Value};
use std::sync::Once;
use wikirand::constants::LANGUAGE_PLACEHOLDER;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path of the summary endpoint below the language host.
pub const SUMMARY_PATH: &str = "/api/rest_v1/page/random/summary";

static INIT: Once = Once::new();

/// Initializes tracing for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// A URL template pointing at `server`. The language host becomes the first
/// path segment, e.g. `http://127.0.0.1:4321/pl.wikipedia.org/api/...`.
pub fn url_template(server: &MockServer) -> String {
    format!(
        "{}/{LANGUAGE_PLACEHOLDER}.wikipedia.org{SUMMARY_PATH}",
        server.uri()
    )
}

/// The request path a fetch for `language` hits on the mock server.
pub fn summary_path(language: &str) -> String {
    format!("/{language}.wikipedia.org{SUMMARY_PATH}")
}

/// The payload used throughout the suites.
pub fn lorem_ipsum() -> Value {
    json!({
        "title": "Lorem Ipsum",
        "extract": "Lorem ipsum dolor sit amet"
    })
}

/// A trimmed-down real response, including fields the decoder must ignore.
pub fn full_summary() -> Value {
    json!({
        "type": "standard",
        "title": "Kraków",
        "displaytitle": "<span class=\"mw-page-title-main\">Kraków</span>",
        "pageid": 16815,
        "thumbnail": {
            "source": "https://upload.wikimedia.org/krakow.jpg",
            "width": 320,
            "height": 213
        },
        "lang": "pl",
        "extract": "Kraków is the second-largest city in Poland.",
        "extract_html": "<p><b>Kraków</b> is the second-largest city in Poland.</p>"
    })
}

/// Mounts `response` for `language` and expects exactly one request.
pub async fn mount_summary(server: &MockServer, language: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(summary_path(language)))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Shorthand for a 200 response with a JSON body.
pub fn json_response(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

//! # wikirand
//!
//! Fetches the summary of a random Wikipedia article for a given language
//! edition and decodes it into a [`Page`].
//!
//! ```no_run
//! # async fn demo() -> Result<(), wikirand::FetchError> {
//! let page = wikirand::fetch_random_page("de").await?;
//! println!("{}", page.title());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod constants;
pub mod errors;
pub mod page;

pub use client::{fetch_random_page, random_summary_url, WikipediaClient};
pub use errors::FetchError;
pub use page::Page;

//! Item sources feeding the slider
//!
//! A source loads the ordered collection and lazily fetches display data for
//! whichever item is active. Failures never escape: a denied library is an
//! empty collection and a failed fetch is `None`.

mod library;
mod models;
mod placeholder;

use async_trait::async_trait;
use image::DynamicImage;

pub use library::{is_supported_image, LibrarySource, SUPPORTED_EXTENSIONS};
pub use models::Photo;
pub use placeholder::PlaceholderSource;

/// Outcome of asking for access to a source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    /// Everything readable
    Granted,
    /// Readable, but some entries could not be inspected
    Limited,
    /// Nothing readable
    Denied,
}

impl Authorization {
    /// Whether items may be enumerated
    pub fn allows_access(&self) -> bool {
        matches!(self, Authorization::Granted | Authorization::Limited)
    }
}

/// Items produced by a load, with the authorization that governed it
#[derive(Debug, Clone)]
pub struct SourceLoad<T> {
    pub authorization: Authorization,
    pub items: Vec<T>,
}

impl<T> SourceLoad<T> {
    pub fn granted(items: Vec<T>) -> Self {
        Self {
            authorization: Authorization::Granted,
            items,
        }
    }

    pub fn denied() -> Self {
        Self {
            authorization: Authorization::Denied,
            items: Vec::new(),
        }
    }
}

/// A collection of displayable items plus the per-item display fetch
#[async_trait]
pub trait ItemSource: Send + Sync + 'static {
    type Item: Clone + Send + Sync + std::fmt::Debug + 'static;

    /// Short description for status messages and logs
    fn describe(&self) -> String;

    /// Load (or reload) the whole collection
    async fn load(&self) -> SourceLoad<Self::Item>;

    /// Fetch pixels for one item; `None` leaves its slot blank
    async fn fetch_display(&self, item: &Self::Item) -> Option<DynamicImage>;

    /// Text shown next to the index readout
    fn label(&self, item: &Self::Item) -> String;

    /// Filesystem location of the item, when it has one
    fn location(&self, _item: &Self::Item) -> Option<std::path::PathBuf> {
        None
    }
}

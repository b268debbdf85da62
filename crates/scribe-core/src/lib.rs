//! Scribe Core Library
//!
//! Data model, response normalization and page state for the content
//! workflow relay.

pub mod envelope;
pub mod error;
pub mod export;
pub mod model;
pub mod normalize;
pub mod page;

pub use error::{ScribeError, ScribeResult};
pub use normalize::{brief_list, normalize_brief, BriefSource, NormalizedBrief};
pub use page::{BrandingActions, PageKind, PageState};

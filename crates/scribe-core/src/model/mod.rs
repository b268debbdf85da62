//! Workflow data transfer objects.
//!
//! None of these are persisted here; each lives for one request/response
//! cycle.

pub mod article;
pub mod brand;
pub mod brief;
pub mod research;

pub use article::{Article, ArticleOutput};
pub use brand::{BrandScore, BrandingResult, ScoreBand, REWRITE_THRESHOLD};
pub use brief::{display_value, resource_link, ResearchBrief};
pub use research::{ContentGoal, ResearchRequest, Upload, DEFAULT_BLOG_COUNT, MAX_BLOG_COUNT};

//! Backend endpoint paths.

use std::fmt;

/// A backend endpoint the relay talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ResearchAgent,
    WritingAgent,
    BrandingAgent,
    RefineOutput,
    SaveOutput,
    ArticleOutput,
    Health,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::ResearchAgent => "/research-agent",
            Endpoint::WritingAgent => "/writing-agent",
            Endpoint::BrandingAgent => "/branding-agent",
            Endpoint::RefineOutput => "/refine-output",
            Endpoint::SaveOutput => "/save-output",
            Endpoint::ArticleOutput => "/article-output",
            Endpoint::Health => "/",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

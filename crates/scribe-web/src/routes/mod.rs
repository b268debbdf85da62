//! JSON relay route handlers, mounted under `/api`.

pub mod branding;
pub mod health;
pub mod output;
pub mod research;
pub mod writing;

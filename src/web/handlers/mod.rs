//! HTTP handlers organized by page

pub mod guide;
pub mod health;

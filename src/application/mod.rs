//! Application services layer.

pub mod article;
pub mod chrome;
pub mod engagement;
pub mod error;
pub mod listing;
pub mod share;
pub mod stream;

//! Server-rendered article pages for the PDR Portal blog.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;

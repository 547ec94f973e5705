//! staticle - static blog article page generator
//!
//! Renders a JSON article content document into a single self-contained
//! HTML page: typed sections become markup fragments, comment
//! submissions are validated and rendered as cards, and the surrounding
//! page carries head metadata, share links, and a theme.

#![deny(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod article_model;
pub mod cli;
pub mod comment_model;
pub mod content_renderer;
pub mod dates;
pub mod html_exporter;
pub mod page_model;
pub mod pipeline;
pub mod share;
pub mod site_config;
pub mod storage;

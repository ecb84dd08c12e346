#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod cache;
mod client;
mod config;
mod error;

pub use crate::cache::ResponseCache;
pub use crate::client::{ARTWORKS_PATH, BackendClient, MediaDownload, artwork_path};
pub use crate::config::BackendConfig;
pub use crate::error::{Error, Result};

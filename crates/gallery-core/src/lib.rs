#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod artwork;
pub mod catalog;

pub use crate::artwork::{Artwork, Year};

//! Data layer for a blog and content-management site.
//!
//! Repositories in [`data`] wrap single-table queries; services in [`service`]
//! add validation, slug generation, transactions and retries on top of them.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;

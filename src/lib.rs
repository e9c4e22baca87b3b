//! fbgdl is a Facebook Graph downloader library. It cycles through as many
//! users as it is told (or `u64::MAX`) and stores them in a database.
//!
//! # Modules
//!
//! - `config`: Run configuration and CLI parsing.
//! - `crawler`: The sequential enumeration driver.
//! - `db`: Database connection management.
//! - `errors`: Error handling types.
//! - `graph_client`: Graph API client.
//! - `models`: Wire and database data models.
//! - `storage`: Database storage operations.

pub mod config;
pub mod crawler;
pub mod db;
pub mod errors;
pub mod graph_client;
pub mod models;
pub mod storage;

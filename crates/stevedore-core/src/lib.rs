//! Core types and configuration for stevedore.
//!
//! This crate defines the `stevedore.toml` schema ([`StevedoreConfig`]),
//! image references ([`ImageRef`]), and shared error types.

pub mod config;
pub mod error;
pub mod image;

pub use config::{ImageConfig, RegistryConfig, StevedoreConfig};
pub use error::{Error, Result};
pub use image::ImageRef;

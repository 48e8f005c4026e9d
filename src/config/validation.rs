//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address resolves to a socket address
//! - Check the static root exists and is a directory when serving is enabled
//! - Validate the static URL prefix shape
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs after CLI overrides, before the config is accepted into the system

use std::net::ToSocketAddrs;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("cannot read directory '{0}'")]
    StaticRootUnreadable(PathBuf),

    #[error("this is not a directory: '{0}'")]
    StaticRootNotADirectory(PathBuf),

    #[error("static url prefix '{0}' must start and end with '/'")]
    InvalidStaticPrefix(String),
}

/// Validate a configuration, reporting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // to_socket_addrs rather than a plain parse so hostnames like
    // "localhost" stay usable in the config file.
    if config.listener.bind_address().to_socket_addrs().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address(),
        ));
    }

    if config.static_files.enabled {
        let root = &config.static_files.root;
        match std::fs::metadata(root) {
            Ok(metadata) if !metadata.is_dir() => {
                errors.push(ValidationError::StaticRootNotADirectory(root.clone()));
            }
            Ok(_) => {}
            Err(_) => {
                errors.push(ValidationError::StaticRootUnreadable(root.clone()));
            }
        }

        let prefix = &config.static_files.url_prefix;
        if !prefix.starts_with('/') || !prefix.ends_with('/') {
            errors.push(ValidationError::InvalidStaticPrefix(prefix.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

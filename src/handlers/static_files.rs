//! Static file handler.
//!
//! # Responsibilities
//! - Resolve the post-prefix path suffix against the configured root
//! - Refuse any path that escapes the root (traversal defense)
//! - Serve file bytes with a guessed content type
//!
//! # Design Decisions
//! - Suffix components are sanitized before resolution; `..` never reaches
//!   the filesystem
//! - Resolved paths are canonicalized and must stay under the canonical root,
//!   so symlinks cannot escape either
//! - Directories resolve to their `index.html`, otherwise 404
//! - Byte reading is delegated to tokio's filesystem primitives

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::delay::honor_delay;
use crate::handlers::RequestHandler;

/// Error type for static root construction.
#[derive(Debug, Error)]
pub enum StaticFileError {
    #[error("cannot read directory '{path}'")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("this is not a directory: '{0}'")]
    NotADirectory(PathBuf),
}

/// Serves files from a fixed root directory.
#[derive(Debug)]
pub struct StaticFileHandler {
    /// Canonicalized root; every served path must stay under it.
    root: PathBuf,
}

impl StaticFileHandler {
    /// Create a handler rooted at `root`.
    ///
    /// The root is canonicalized once here; startup validation has already
    /// checked existence, but construction re-verifies so the handler never
    /// holds an unresolvable root.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, StaticFileError> {
        let root = root.as_ref();
        let canonical = std::fs::canonicalize(root).map_err(|source| StaticFileError::Unreadable {
            path: root.to_path_buf(),
            source,
        })?;

        if !canonical.is_dir() {
            return Err(StaticFileError::NotADirectory(canonical));
        }

        Ok(Self { root: canonical })
    }

    /// Turn a request suffix into a relative path of plain components.
    ///
    /// Rejects `..`, absolute components, and anything else that could step
    /// outside the root before the filesystem is consulted.
    fn sanitize(suffix: &str) -> Option<PathBuf> {
        let mut relative = PathBuf::new();
        for component in Path::new(suffix).components() {
            match component {
                Component::Normal(part) => relative.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        Some(relative)
    }

    async fn serve(&self, suffix: &str) -> Response {
        let Some(relative) = Self::sanitize(suffix) else {
            tracing::warn!(suffix = %suffix, "Rejected unsafe file path");
            return not_found();
        };

        let candidate = self.root.join(relative);
        let Ok(mut resolved) = tokio::fs::canonicalize(&candidate).await else {
            return not_found();
        };

        // Canonicalization resolves symlinks, so this also catches links
        // pointing outside the root.
        if !resolved.starts_with(&self.root) {
            tracing::warn!(
                path = %resolved.display(),
                "Resolved path escapes static root"
            );
            return not_found();
        }

        match tokio::fs::metadata(&resolved).await {
            Ok(metadata) if metadata.is_dir() => {
                // Directory requests fall back to an index file, which gets
                // the same confinement check as any other path.
                resolved.push("index.html");
                match tokio::fs::canonicalize(&resolved).await {
                    Ok(index) if index.starts_with(&self.root) => resolved = index,
                    _ => return not_found(),
                }
            }
            Ok(_) => {}
            Err(_) => return not_found(),
        }

        let Ok(bytes) = tokio::fs::read(&resolved).await else {
            return not_found();
        };

        let content_type = mime_guess::from_path(&resolved).first_or_octet_stream();
        tracing::debug!(
            path = %resolved.display(),
            bytes = bytes.len(),
            content_type = %content_type,
            "Serving file"
        );

        (
            [(header::CONTENT_TYPE, content_type.as_ref())],
            Body::from(bytes),
        )
            .into_response()
    }
}

#[async_trait]
impl RequestHandler for StaticFileHandler {
    async fn handle(&self, suffix: &str, request: Request<Body>) -> Response {
        honor_delay(request.headers()).await;

        self.serve(suffix).await
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "not found").into_response()
}

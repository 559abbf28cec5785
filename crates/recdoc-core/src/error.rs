//! Error types for layout option validation.
//!
//! Rendering itself is infallible by construction; only externally supplied
//! options can be malformed.

/// Errors from validating [`RenderOptions`](crate::RenderOptions).
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// A wrap width of zero columns leaves no room for any content.
    #[error("invalid wrap width: width must be at least 1 column")]
    InvalidWidth,
}

use thiserror::Error;

/// Rejected bar configuration.
///
/// Returned by [`ProgressBar::new`](crate::ProgressBar::new) and
/// [`ProgressBar::width`](crate::ProgressBar::width) instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The bar was created with a total of zero.
    #[error("total must be greater than zero")]
    ZeroTotal,
    /// The gauge was given zero cells.
    #[error("gauge width must be at least one cell")]
    ZeroWidth,
}

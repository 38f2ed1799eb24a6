//! Error types used by the crate.

use thiserror::Error;

/// Regionwatch error type.
#[derive(Debug, Error)]
pub enum RegionWatchError {
    /// The widget failed to answer a query (e.g. visible bounds on map load).
    #[error("map widget query failed: {0}")]
    WidgetQuery(String),
    /// A camera option was selected with an out-of-range index or mismatched data.
    #[error("invalid camera option {index}")]
    InvalidCameraOption {
        /// Index of the selected option.
        index: usize,
    },
}

//! Regionwatch tracks viewport region transitions of an embedded map widget and turns
//! them into diagnostic display lines and camera commands.
//!
//! The map widget itself (tile rendering, gestures, camera animation) is an external
//! collaborator behind the [`MapWidget`] trait and the [`CameraConfig`] payloads; this
//! crate owns only the state between the widget's callbacks and the UI:
//!
//! * region events (`will change` / `did change`) replace a single [`ViewState`] value,
//! * the [`presenter`] derives a fixed set of display lines from that value,
//! * selecting a camera option produces a fresh [`CameraConfig`] carrying a
//!   monotonically increasing trigger key, so the widget re-applies the command even
//!   when the rest of the config did not change.
//!
//! ```
//! use regionwatch::{RegionEvent, RegionEventHandler, RegionInspector};
//! use regionwatch::{Position, RegionFeature, RegionProperties};
//!
//! let mut inspector = RegionInspector::new();
//! let feature = RegionFeature::new(
//!     Position::lonlat(-122.41, 37.77),
//!     RegionProperties {
//!         visible_bounds: (
//!             Position::lonlat(-74.12641, 40.797968),
//!             Position::lonlat(-74.143727, 40.772177),
//!         ),
//!         zoom_level: 12.0,
//!         heading: 0.0,
//!         pitch: 0.0,
//!         is_user_interaction: true,
//!         animated: false,
//!     },
//! );
//!
//! inspector.handle(&RegionEvent::DidChange(feature));
//! assert_eq!(inspector.render()[0], "did change");
//! ```

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod camera;
pub mod control;
pub mod error;
mod inspector;
pub mod presenter;
pub mod region;
mod view_state;

pub use camera::{
    default_options, AnimationMode, CameraCommand, CameraConfig, CameraOption, OptionData,
    OptionSelector, SystemTriggerSource, TriggerSource,
};
pub use control::{RegionEvent, RegionEventHandler, RegionEventProcessor};
pub use error::RegionWatchError;
pub use inspector::{MapWidget, RegionInspector};
pub use region::{LatLonBounds, PointGeometry, Position, RegionFeature, RegionProperties};
pub use view_state::{ChangeReason, ViewState, ViewStateStore};

//! Camera commands sent to the map widget.
//!
//! Commands are replaced wholesale on each selection, never merged. Because the widget
//! treats structurally equal configs as no-ops, every dispatched config carries a fresh
//! trigger key so repeating the same option still re-runs the camera transition.

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::error::RegionWatchError;
use crate::region::{LatLonBounds, Position};

/// Center of the map before any option is selected.
pub const DEFAULT_CENTER_COORDINATE: Position = Position(-77.036086, 38.910233);

/// Target of the fly-to option.
pub const SF_OFFICE_COORDINATE: Position = Position(-122.400021, 37.789085);

const INITIAL_ZOOM_LEVEL: f64 = 12.0;
const FLIGHT_DURATION: Duration = Duration::from_millis(2000);

/// How the widget animates a camera transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    /// Ballistic flight between the current and the target view.
    Flight,
    /// Eased interpolation.
    Ease,
    /// Linear interpolation.
    Linear,
}

/// The camera instruction part of a config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum CameraCommand {
    /// Show the given center at the given zoom level without animation.
    Center {
        /// Center of the viewport.
        center_coordinate: Position,
        /// Target zoom level.
        zoom_level: f64,
    },
    /// Fly to the given center.
    FlyTo {
        /// Center of the viewport after the flight.
        center_coordinate: Position,
        /// Animation style.
        animation_mode: AnimationMode,
        /// Length of the animation.
        #[serde(serialize_with = "serialize_millis")]
        animation_duration: Duration,
    },
    /// Fit the viewport to the given bounds.
    FitBounds {
        /// Bounds that must be fully visible.
        bounds: LatLonBounds,
    },
    /// Change the zoom level keeping the current center.
    ZoomTo {
        /// Target zoom level.
        zoom_level: f64,
    },
}

/// A complete camera configuration for the widget's camera sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraConfig {
    /// Monotonically increasing key forcing the widget to re-apply the command even when
    /// the rest of the config is unchanged. Absent on the initial config.
    #[serde(rename = "triggerKey", skip_serializing_if = "Option::is_none")]
    pub trigger_key: Option<u64>,
    /// The camera instruction.
    #[serde(flatten)]
    pub command: CameraCommand,
}

impl CameraConfig {
    /// Config the widget starts with before any option is selected.
    pub fn initial() -> Self {
        Self {
            trigger_key: None,
            command: CameraCommand::Center {
                center_coordinate: DEFAULT_CENTER_COORDINATE,
                zoom_level: INITIAL_ZOOM_LEVEL,
            },
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::initial()
    }
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

/// Source of trigger keys.
///
/// Keys must be strictly increasing across calls so that two configs produced from the
/// same option are never equal.
pub trait TriggerSource {
    /// Returns a key strictly greater than any key returned before.
    fn next_key(&mut self) -> u64;
}

/// Trigger source backed by the wall clock, in milliseconds since the Unix epoch.
///
/// Two calls within the same millisecond still produce increasing keys.
#[derive(Debug, Default)]
pub struct SystemTriggerSource {
    last_key: u64,
}

impl SystemTriggerSource {
    /// Creates a source starting from the current time.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TriggerSource for SystemTriggerSource {
    fn next_key(&mut self) -> u64 {
        let now = web_time::SystemTime::now()
            .duration_since(web_time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        self.last_key = now.max(self.last_key + 1);
        self.last_key
    }
}

/// Payload of a camera option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionData {
    /// A target center for the fly-to option.
    Center(Position),
    /// Target bounds for the fit-bounds option.
    Bounds(LatLonBounds),
    /// A target zoom level for the zoom-to option.
    Zoom(f64),
}

/// A labelled camera option, as shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraOption {
    /// Display label.
    pub label: String,
    /// Payload passed to [`OptionSelector::select_option`].
    pub data: OptionData,
}

/// The option table of the original screen: fly to the SF office, fit a set of NYC
/// bounds, or zoom to level 16.
pub fn default_options() -> Vec<CameraOption> {
    vec![
        CameraOption {
            label: "Fly To".into(),
            data: OptionData::Center(SF_OFFICE_COORDINATE),
        },
        CameraOption {
            label: "Fit Bounds".into(),
            data: OptionData::Bounds(LatLonBounds::new(
                Position::lonlat(-74.12641, 40.797968),
                Position::lonlat(-74.143727, 40.772177),
            )),
        },
        CameraOption {
            label: "Zoom To".into(),
            data: OptionData::Zoom(16.0),
        },
    ]
}

/// Turns option selections into camera configs.
pub struct OptionSelector {
    trigger_source: Box<dyn TriggerSource>,
}

impl OptionSelector {
    /// Creates a selector with the given trigger source.
    pub fn new(trigger_source: impl TriggerSource + 'static) -> Self {
        Self {
            trigger_source: Box::new(trigger_source),
        }
    }

    /// Builds the camera config for the option at `index`.
    ///
    /// Index 0 expects [`OptionData::Center`], 1 expects [`OptionData::Bounds`], and 2
    /// expects [`OptionData::Zoom`]; anything else is an
    /// [`RegionWatchError::InvalidCameraOption`]. The produced config always carries a
    /// fresh trigger key.
    pub fn select_option(
        &mut self,
        index: usize,
        data: &OptionData,
    ) -> Result<CameraConfig, RegionWatchError> {
        let command = match (index, data) {
            (0, OptionData::Center(center)) => CameraCommand::FlyTo {
                center_coordinate: *center,
                animation_mode: AnimationMode::Flight,
                animation_duration: FLIGHT_DURATION,
            },
            (1, OptionData::Bounds(bounds)) => CameraCommand::FitBounds { bounds: *bounds },
            (2, OptionData::Zoom(zoom_level)) => CameraCommand::ZoomTo {
                zoom_level: *zoom_level,
            },
            _ => return Err(RegionWatchError::InvalidCameraOption { index }),
        };

        Ok(CameraConfig {
            trigger_key: Some(self.trigger_source.next_key()),
            command,
        })
    }
}

impl Default for OptionSelector {
    fn default() -> Self {
        Self::new(SystemTriggerSource::new())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    struct ManualTriggerSource(u64);

    impl TriggerSource for ManualTriggerSource {
        fn next_key(&mut self) -> u64 {
            self.0 += 1;
            self.0
        }
    }

    #[test]
    fn system_keys_are_strictly_increasing() {
        let mut source = SystemTriggerSource::new();
        let mut prev = source.next_key();
        for _ in 0..100 {
            let next = source.next_key();
            assert!(next > prev);
            prev = next;
        }
    }

    #[test]
    fn fly_to_uses_fixed_flight_duration() {
        let mut selector = OptionSelector::new(ManualTriggerSource(0));
        let config = selector
            .select_option(0, &OptionData::Center(SF_OFFICE_COORDINATE))
            .expect("selection failed");

        assert_eq!(config.trigger_key, Some(1));
        assert_matches!(
            config.command,
            CameraCommand::FlyTo {
                animation_mode: AnimationMode::Flight,
                animation_duration,
                ..
            } if animation_duration == Duration::from_millis(2000)
        );
    }

    #[test]
    fn repeated_selection_differs_only_in_trigger_key() {
        let mut selector = OptionSelector::new(ManualTriggerSource(0));
        let data = OptionData::Zoom(16.0);
        let first = selector.select_option(2, &data).expect("selection failed");
        let second = selector.select_option(2, &data).expect("selection failed");

        assert_eq!(first.command, second.command);
        assert_ne!(first.trigger_key, second.trigger_key);
        assert!(second.trigger_key > first.trigger_key);
    }

    #[test]
    fn fit_bounds_passes_bounds_through() {
        let bounds = LatLonBounds::new(
            Position::lonlat(-74.12641, 40.797968),
            Position::lonlat(-74.143727, 40.772177),
        );
        let mut selector = OptionSelector::new(ManualTriggerSource(10));
        let config = selector
            .select_option(1, &OptionData::Bounds(bounds))
            .expect("selection failed");

        assert_eq!(config.command, CameraCommand::FitBounds { bounds });
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let mut selector = OptionSelector::new(ManualTriggerSource(0));
        let result = selector.select_option(3, &OptionData::Zoom(1.0));
        assert_matches!(
            result,
            Err(RegionWatchError::InvalidCameraOption { index: 3 })
        );
    }

    #[test]
    fn mismatched_data_is_an_error() {
        let mut selector = OptionSelector::new(ManualTriggerSource(0));
        let result = selector.select_option(0, &OptionData::Zoom(16.0));
        assert_matches!(result, Err(RegionWatchError::InvalidCameraOption { index: 0 }));
    }

    #[test]
    fn config_wire_shape() {
        let mut selector = OptionSelector::new(ManualTriggerSource(41));
        let config = selector
            .select_option(0, &OptionData::Center(SF_OFFICE_COORDINATE))
            .expect("selection failed");

        let json = serde_json::to_value(config).expect("failed to serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "triggerKey": 42,
                "centerCoordinate": [-122.400021, 37.789085],
                "animationMode": "flight",
                "animationDuration": 2000,
            })
        );
    }

    #[test]
    fn initial_config_has_no_trigger_key() {
        let json = serde_json::to_value(CameraConfig::initial()).expect("failed to serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "centerCoordinate": [-77.036086, 38.910233],
                "zoomLevel": 12.0,
            })
        );
    }

    #[test]
    fn default_option_table_matches_screen() {
        let options = default_options();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].label, "Fly To");
        assert_matches!(options[0].data, OptionData::Center(_));
        assert_matches!(options[1].data, OptionData::Bounds(_));
        assert_matches!(options[2].data, OptionData::Zoom(zoom) if zoom == 16.0);
    }
}

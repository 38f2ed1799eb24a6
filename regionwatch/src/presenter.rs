//! Pure derivation of display lines from the current [`ViewState`].

use crate::region::{PointGeometry, Position};
use crate::view_state::ViewState;

/// Line shown while there is nothing meaningful to display.
pub const PLACEHOLDER_LINE: &str = "Move the map!";

const BOUNDS_PRECISION: usize = 6;

/// Renders the view state into display lines.
///
/// Returns the single placeholder line until a region with a usable center arrives;
/// after that, exactly ten lines in fixed order: reason, latitude, longitude, NE bounds,
/// SW bounds, zoom level, heading, pitch, user-interaction flag, animated flag.
pub fn render(state: &ViewState) -> Vec<String> {
    let Some(region) = state.region() else {
        return vec![PLACEHOLDER_LINE.to_string()];
    };
    let geometry = match region.geometry.as_ref() {
        Some(geometry) if is_valid_coordinate(geometry) => geometry,
        _ => return vec![PLACEHOLDER_LINE.to_string()],
    };
    let properties = &region.properties;
    let (ne, sw) = properties.visible_bounds;

    vec![
        state.reason().as_str().to_string(),
        format!("Latitude: {}", geometry.coordinates.lat()),
        format!("Longitude: {}", geometry.coordinates.lon()),
        format!("Visible Bounds NE: {}", format_corner(ne)),
        format!("Visible Bounds SW: {}", format_corner(sw)),
        format!("Zoom Level: {}", properties.zoom_level),
        format!("Heading: {}", properties.heading),
        format!("Pitch: {}", properties.pitch),
        format!("Is User Interaction: {}", properties.is_user_interaction),
        format!("Animated: {}", properties.animated),
    ]
}

/// The all-zero coordinate is treated as "unset", same as a missing geometry.
///
/// This is a product decision inherited from the source screen, not a geographic rule:
/// real locations near [0, 0] exist. Do not reuse this check outside the presenter.
fn is_valid_coordinate(geometry: &PointGeometry) -> bool {
    geometry.coordinates.lon() != 0.0 && geometry.coordinates.lat() != 0.0
}

fn format_corner(corner: Position) -> String {
    format!(
        "{}, {}",
        to_precision(corner.lon(), BOUNDS_PRECISION),
        to_precision(corner.lat(), BOUNDS_PRECISION)
    )
}

/// Formats `value` with the given number of significant digits, keeping trailing zeros,
/// with the same notation switch rules as JS `Number.prototype.toPrecision`.
fn to_precision(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    if value == 0.0 {
        return format!("{:.*}", digits - 1, 0.0);
    }

    let exponent = value.abs().log10().floor() as i32;
    let scale = 10f64.powi(digits as i32 - 1 - exponent);
    let rounded = (value * scale).round() / scale;
    // Rounding can carry into the next decade (999.9999 -> 1000.00).
    let exponent = rounded.abs().log10().floor() as i32;

    if exponent < -6 || exponent >= digits as i32 {
        let mantissa = rounded / 10f64.powi(exponent);
        let sign = if exponent < 0 { "-" } else { "+" };
        format!(
            "{:.*}e{}{}",
            digits - 1,
            mantissa,
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        format!("{rounded:.decimals$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::{RegionFeature, RegionProperties};
    use crate::view_state::ChangeReason;

    fn sample_properties() -> RegionProperties {
        RegionProperties {
            visible_bounds: (
                Position::lonlat(-74.126, 40.798),
                Position::lonlat(-74.144, 40.772),
            ),
            zoom_level: 12.0,
            heading: 0.0,
            pitch: 0.0,
            is_user_interaction: true,
            animated: false,
        }
    }

    fn state_with_center(lon: f64, lat: f64) -> ViewState {
        ViewState::changed(
            ChangeReason::DidChange,
            RegionFeature::new(Position::lonlat(lon, lat), sample_properties()),
        )
    }

    #[test]
    fn placeholder_before_first_event() {
        assert_eq!(render(&ViewState::default()), vec![PLACEHOLDER_LINE]);
    }

    #[test]
    fn placeholder_for_zero_coordinates() {
        assert_eq!(render(&state_with_center(0.0, 37.77)), vec![PLACEHOLDER_LINE]);
        assert_eq!(render(&state_with_center(-122.41, 0.0)), vec![PLACEHOLDER_LINE]);
        assert_eq!(render(&state_with_center(0.0, 0.0)), vec![PLACEHOLDER_LINE]);
    }

    #[test]
    fn placeholder_for_missing_geometry() {
        let state = ViewState::changed(
            ChangeReason::WillChange,
            RegionFeature {
                geometry: None,
                properties: sample_properties(),
            },
        );
        assert_eq!(render(&state), vec![PLACEHOLDER_LINE]);
    }

    #[test]
    fn renders_ten_lines_in_fixed_order() {
        let feature = RegionFeature::new(
            Position::lonlat(-122.41, 37.77),
            RegionProperties {
                visible_bounds: (
                    Position::lonlat(-74.126, 40.798),
                    Position::lonlat(-74.144, 40.772),
                ),
                zoom_level: 12.0,
                heading: 0.0,
                pitch: 0.0,
                is_user_interaction: true,
                animated: false,
            },
        );
        let state = ViewState::changed(ChangeReason::DidChange, feature);

        let lines = render(&state);
        assert_eq!(
            lines,
            vec![
                "did change",
                "Latitude: 37.77",
                "Longitude: -122.41",
                "Visible Bounds NE: -74.1260, 40.7980",
                "Visible Bounds SW: -74.1440, 40.7720",
                "Zoom Level: 12",
                "Heading: 0",
                "Pitch: 0",
                "Is User Interaction: true",
                "Animated: false",
            ]
        );
    }

    #[test]
    fn will_change_reason_line() {
        let feature = RegionFeature::new(Position::lonlat(10.0, 20.0), sample_properties());
        let state = ViewState::changed(ChangeReason::WillChange, feature);
        assert_eq!(render(&state)[0], "will change");
    }

    #[test]
    fn precision_keeps_six_significant_digits() {
        assert_eq!(to_precision(40.797968, 6), "40.7980");
        assert_eq!(to_precision(-74.12641, 6), "-74.1264");
        assert_eq!(to_precision(-74.143727, 6), "-74.1437");
        assert_eq!(to_precision(0.5, 6), "0.500000");
        assert_eq!(to_precision(123456.0, 6), "123456");
    }

    #[test]
    fn precision_rounding_carry() {
        assert_eq!(to_precision(999.9999, 6), "1000.00");
    }

    #[test]
    fn precision_zero() {
        assert_eq!(to_precision(0.0, 6), "0.00000");
    }

    #[test]
    fn precision_switches_to_exponential() {
        assert_eq!(to_precision(1234567.0, 6), "1.23457e+6");
        assert_eq!(to_precision(0.0000001, 6), "1.00000e-7");
    }
}

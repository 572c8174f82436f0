//! Configuration checks using Validation.
//!
//! Every rule runs, and all broken rules are reported together instead of
//! stopping at the first one.

use super::error::ConfigViolation;
use super::{EngineConfig, MAX_DISPLAY_WIDTH};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn check_width(config: &EngineConfig) -> Check {
    let width = config.max_display_width;
    if width == 0 {
        Validation::fail(ConfigViolation::ZeroDisplayWidth)
    } else if width > MAX_DISPLAY_WIDTH {
        Validation::fail(ConfigViolation::DisplayTooWide {
            width,
            max: MAX_DISPLAY_WIDTH,
        })
    } else {
        Validation::success(())
    }
}

fn check_marker_present(config: &EngineConfig) -> Check {
    if config.error_marker.is_empty() {
        Validation::fail(ConfigViolation::EmptyErrorMarker)
    } else {
        Validation::success(())
    }
}

// The marker doubles as the error-phase signal, so digit entry must never
// be able to produce it.
fn check_marker_not_numeric(config: &EngineConfig) -> Check {
    let marker = &config.error_marker;
    let looks_numeric = !marker.is_empty()
        && marker
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-');
    if looks_numeric {
        Validation::fail(ConfigViolation::NumericErrorMarker {
            marker: marker.clone(),
        })
    } else {
        Validation::success(())
    }
}

fn check_marker_fits(config: &EngineConfig) -> Check {
    let width = config.max_display_width;
    if width > 0 && config.error_marker.chars().count() > width {
        Validation::fail(ConfigViolation::ErrorMarkerTooWide {
            marker: config.error_marker.clone(),
            width,
        })
    } else {
        Validation::success(())
    }
}

/// Run every rule against `config`, accumulating ALL violations.
pub(crate) fn validate(config: &EngineConfig) -> Result<(), Vec<ConfigViolation>> {
    let checks = vec![
        check_width(config),
        check_marker_present(config),
        check_marker_not_numeric(config),
        check_marker_fits(config),
    ];

    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

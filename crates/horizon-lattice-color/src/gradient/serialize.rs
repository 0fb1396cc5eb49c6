//! Gradient to CSS serialization.

use super::angle::format_angle;
use super::position::{Position, format_position, resolve_positions};
use super::{Gradient, GradientStop, GradientType};
use crate::{Error, Result};

/// Serialize a gradient, honoring its own prefix and `force_standard`.
///
/// A `prefix` listed in the options overrides both and forces prefixed
/// output with that prefix.
pub(crate) fn to_css(gradient: &Gradient, prefix: Option<&str>) -> Result<String> {
    let options = gradient.options();

    let mut standard = options.force_standard || gradient.prefix().is_none();
    let mut active = gradient.prefix();
    if let Some(prefix) = prefix
        && options.is_known_prefix(prefix)
    {
        standard = false;
        active = Some(prefix);
    }

    render(gradient, if standard { None } else { active })
}

/// Serialize a gradient in standard form regardless of options.
pub(crate) fn to_standard(gradient: &Gradient) -> Result<String> {
    render(gradient, None)
}

fn render(gradient: &Gradient, prefix: Option<&str>) -> Result<String> {
    let gradient_type = gradient.gradient_type();
    if gradient_type != GradientType::Linear {
        tracing::warn!("No serializer for {} gradients", gradient_type);
        return Err(Error::UnsupportedType(gradient_type));
    }

    let options = gradient.options();
    let stops = gradient.stops();
    match stops {
        [] => return Ok(options.empty_string.clone()),
        [only] => {
            return Ok(match options.degradation_format {
                Some(format) => only.color.to_format(format),
                None => only.color.to_string(),
            });
        }
        _ => {}
    }

    let angle = format_angle(gradient.angle(), options.angle_use_keyword, prefix.is_none());
    let stops = format_stops(stops, options.clean_position);

    Ok(format!(
        "{}linear-gradient({angle}, {stops})",
        prefix.unwrap_or_default()
    ))
}

fn format_stops(stops: &[GradientStop], clean_position: bool) -> String {
    let positions: Vec<Position> = stops.iter().map(|stop| stop.position).collect();
    let resolved = resolve_positions(&positions);
    let last = stops.len().saturating_sub(1);

    stops
        .iter()
        .zip(resolved)
        .enumerate()
        .map(|(index, (stop, position))| {
            let boundary = (index == 0 && position == 0.0) || (index == last && position == 1.0);
            if clean_position && boundary {
                stop.color.to_string()
            } else {
                format!("{} {}", stop.color, format_position(position))
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

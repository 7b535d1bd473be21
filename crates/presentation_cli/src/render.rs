//! Text rendering of the planner state and GeoJSON export

use std::path::Path;

use anyhow::Context;
use application::{MapSurfacePort, SubmitOutcome};
use domain::{FormField, PlanState};
use infrastructure::HeadlessMapSurface;

/// Render the form state as aligned `label: value` lines
pub fn render_state(state: &PlanState) -> String {
    let mut lines = vec![
        format!("origin:      {}", state.origin_text),
        format!("destination: {}", state.destination_text),
        format!("profile:     {}", state.profile),
        format!("range:       {} ({})", state.range, state.range_kind),
    ];

    if let Some(route) = &state.route {
        lines.push(format!("route:       {}", route.format_summary()));
    }
    if let Some(isochrone) = &state.isochrone {
        let polygons = isochrone.features.len();
        lines.push(match isochrone.total_area() {
            Some(area) => format!("isochrone:   {polygons} polygon(s), area {area:.1} m²"),
            None => format!("isochrone:   {polygons} polygon(s)"),
        });
    }
    if let Some(error) = &state.error_message {
        lines.push(format!("error:       {error}"));
    }

    lines.join("\n")
}

/// Render the map view and its base tile layer
pub fn render_map(map: &HeadlessMapSurface) -> String {
    let view = map.view();
    let mut lines = vec![
        format!(
            "map:         center {:.4},{:.4} zoom {}",
            view.center.lat, view.center.lng, view.zoom
        ),
        format!("tiles:       {}", map.base_layer().url_template),
    ];
    if let Some(bounds) = view.fitted_bounds {
        lines.push(format!(
            "fitted:      {:.4},{:.4} to {:.4},{:.4}",
            bounds.south_west.lat,
            bounds.south_west.lng,
            bounds.north_east.lat,
            bounds.north_east.lng
        ));
    }
    lines.join("\n")
}

/// Render the outcome of a current-location lookup into `field`
pub fn render_located(outcome: SubmitOutcome, state: &PlanState, field: FormField) -> String {
    match outcome {
        SubmitOutcome::Succeeded => format!("{field}: {}", state.field(field)),
        other => render_outcome(other, state),
    }
}

/// Render the result of a submitted action
pub fn render_outcome(outcome: SubmitOutcome, state: &PlanState) -> String {
    match outcome {
        SubmitOutcome::Succeeded => render_state(state),
        SubmitOutcome::Failed => format!(
            "✗ {}",
            state.error_message.as_deref().unwrap_or("Request failed")
        ),
        SubmitOutcome::Superseded => "Request superseded by a newer one".to_string(),
    }
}

/// Write the live map layers to `path` as pretty GeoJSON
///
/// Returns the number of exported features.
pub fn write_geojson(map: &HeadlessMapSurface, path: &Path) -> anyhow::Result<usize> {
    let collection = map.to_feature_collection();
    let json = serde_json::to_string_pretty(&collection)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(collection.features.len())
}

//! JSON export of the computed surface (native only).

use std::fs;
use std::path::Path;

use profitmap_core::{ProfitParameters, ProfitSurface, SurfaceSummary};
use serde::Serialize;

use crate::state::AppState;

/// Everything needed to reproduce or plot a dashboard state elsewhere
#[derive(Debug, Serialize)]
pub struct SurfaceExport<'a> {
    /// Query string that reproduces `params`
    pub query: String,
    pub params: &'a ProfitParameters,
    pub summary: &'a SurfaceSummary,
    pub surface: &'a ProfitSurface,
}

impl<'a> SurfaceExport<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        Self {
            query: state.query_string(),
            params: &state.params,
            summary: &state.summary,
            surface: &state.surface,
        }
    }
}

/// Write the current surface as pretty-printed JSON to `path`
pub fn export_surface(path: &Path, state: &AppState) -> color_eyre::Result<()> {
    let json = serde_json::to_string_pretty(&SurfaceExport::from_state(state))?;
    fs::write(path, json)?;

    tracing::info!(path = %path.display(), "Surface exported");
    Ok(())
}

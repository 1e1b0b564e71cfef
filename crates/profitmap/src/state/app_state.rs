use profitmap_core::contour::contour_levels;
use profitmap_core::{
    ParamKey, PointBreakdown, ProfitParameters, ProfitSurface, SurfaceSummary, compute_surface,
};

use super::{Camera, TabId};
use crate::data::config_data::DashboardConfig;

/// Which side of a screen receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Parameters,
    Chart,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Parameters => Focus::Chart,
            Focus::Chart => Focus::Parameters,
        }
    }
}

pub struct AppState {
    pub active_tab: TabId,
    pub focus: Focus,
    pub params: ProfitParameters,
    pub config: DashboardConfig,
    /// Surface for the current parameters, replaced on every change
    pub surface: ProfitSurface,
    pub summary: SurfaceSummary,
    /// Filled-contour levels of the efficiency map
    pub efficiency_levels: Vec<f64>,
    /// Index into `ParamKey::ALL`
    pub selected_param: usize,
    /// (row, col) of the inspected grid cell
    pub crosshair: (usize, usize),
    pub camera: Camera,
    /// Parameters differ from the last saved query string
    pub dirty: bool,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ProfitParameters::default(), DashboardConfig::default())
    }
}

impl AppState {
    pub fn new(params: ProfitParameters, config: DashboardConfig) -> Self {
        let config = config.sanitized();
        let params = params.clamped();
        let surface = compute_surface(&params, &config.axes);
        let (rows, cols) = surface.shape();

        let mut state = Self {
            active_tab: TabId::Efficiency,
            focus: Focus::default(),
            params,
            config,
            summary: SurfaceSummary::from_surface(&surface),
            surface,
            efficiency_levels: Vec::new(),
            selected_param: 0,
            crosshair: (rows / 2, cols / 2),
            camera: Camera::default(),
            dirty: false,
            error_message: None,
            status_message: None,
            exit: false,
        };
        state.efficiency_levels = state.levels_for_surface();
        state
    }

    /// Rebuild the surface and everything derived from it.
    ///
    /// Called after every parameter change; the previous surface is dropped.
    pub fn recompute(&mut self) {
        self.surface = compute_surface(&self.params, &self.config.axes);
        self.summary = SurfaceSummary::from_surface(&self.surface);
        self.efficiency_levels = self.levels_for_surface();

        let (rows, cols) = self.surface.shape();
        self.crosshair = (
            self.crosshair.0.min(rows.saturating_sub(1)),
            self.crosshair.1.min(cols.saturating_sub(1)),
        );

        tracing::debug!(
            query = %self.params.to_query(),
            break_even_cells = self.surface.break_even.cells.len(),
            "Surface recomputed"
        );
    }

    fn levels_for_surface(&self) -> Vec<f64> {
        let (min, max) = self.surface.efficiency.min_max().unwrap_or((0.0, 0.0));
        contour_levels(min, max, self.config.efficiency_levels)
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    pub fn selected_key(&self) -> ParamKey {
        ParamKey::ALL[self.selected_param.min(ParamKey::ALL.len() - 1)]
    }

    pub fn select_next_param(&mut self) {
        self.selected_param = (self.selected_param + 1) % ParamKey::ALL.len();
    }

    pub fn select_prev_param(&mut self) {
        self.selected_param =
            (self.selected_param + ParamKey::ALL.len() - 1) % ParamKey::ALL.len();
    }

    /// Move the selected parameter by slider steps and recompute on change
    pub fn nudge_selected(&mut self, steps: i32) {
        let key = self.selected_key();
        if self.params.nudge(key, steps) {
            self.dirty = true;
            self.recompute();
        }
    }

    pub fn reset_params(&mut self) {
        if self.params != ProfitParameters::default() {
            self.params = ProfitParameters::default();
            self.dirty = true;
            self.recompute();
        }
        self.status_message = Some("Parameters reset to defaults".to_string());
    }

    /// Move the crosshair by whole grid cells, staying on the grid.
    ///
    /// `rows` grows towards higher ROAS and `cols` towards higher spend.
    pub fn move_crosshair(&mut self, rows: i32, cols: i32) {
        let (max_row, max_col) = self.surface.shape();
        let shift = |value: usize, delta: i32, len: usize| {
            let moved = value as i64 + i64::from(delta);
            moved.clamp(0, len.saturating_sub(1) as i64) as usize
        };
        self.crosshair = (
            shift(self.crosshair.0, rows, max_row),
            shift(self.crosshair.1, cols, max_col),
        );
    }

    /// Full model breakdown at the crosshair
    pub fn crosshair_point(&self) -> Option<PointBreakdown> {
        self.surface.point(self.crosshair.0, self.crosshair.1)
    }

    /// Current parameters as a query string (without leading `?`)
    pub fn query_string(&self) -> String {
        self.params.to_query()
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
        self.status_message = Some(format!("Saved ?{}", self.query_string()));
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Read parameters from a stored query string.
///
/// Malformed values fall back to their default and are logged; values outside
/// the slider ranges are clamped.
pub fn params_from_query(query: &str) -> ProfitParameters {
    let load = ProfitParameters::from_query(query);
    for rejected in &load.rejected {
        tracing::warn!(%rejected, "Ignoring malformed query parameter");
    }
    if let Err(e) = load.params.validate() {
        tracing::warn!(error = %e, "Clamping out-of-range parameter");
    }
    load.params.clamped()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_centres_crosshair() {
        let state = AppState::default();
        assert_eq!(state.surface.shape(), (100, 100));
        assert_eq!(state.crosshair, (50, 50));
        assert_eq!(state.efficiency_levels.len(), 20);
        assert!(!state.dirty);
    }

    #[test]
    fn test_nudge_recomputes_surface() {
        let mut state = AppState::default();
        let before = state.surface.profit.clone();

        state.selected_param = ParamKey::FixedWorkCost.index();
        state.nudge_selected(5);

        assert_eq!(state.params.fixed_work_cost, 50);
        assert!(state.dirty);
        assert_ne!(state.surface.profit, before);
        assert_eq!(state.surface.params, state.params);
    }

    #[test]
    fn test_nudge_at_bound_keeps_state_clean() {
        let mut state = AppState::default();
        state.selected_param = ParamKey::FixedWorkCost.index();
        state.nudge_selected(-1);
        assert!(!state.dirty);
    }

    #[test]
    fn test_param_selection_wraps() {
        let mut state = AppState::default();
        state.select_prev_param();
        assert_eq!(state.selected_key(), ParamKey::WorkloadScaling);
        state.select_next_param();
        assert_eq!(state.selected_key(), ParamKey::WeekendMultiplier);
    }

    #[test]
    fn test_crosshair_stays_on_grid() {
        let mut state = AppState::default();
        state.move_crosshair(1_000, -1_000);
        assert_eq!(state.crosshair, (99, 0));

        let point = state.crosshair_point().unwrap();
        assert_eq!(point.roas, 8.0);
        assert_eq!(point.marketing_spend, 0.0);
    }

    #[test]
    fn test_params_from_query_clamps_and_defaults() {
        let params = params_from_query("?weekend_multiplier=9&fixed_work_cost=abc&work_cost=0.3");
        assert_eq!(params.weekend_multiplier, 2.0);
        assert_eq!(params.fixed_work_cost, 0);
        assert_eq!(params.work_cost_percentage, 0.3);
    }

    #[test]
    fn test_reset_and_save_messages() {
        let mut state = AppState::default();
        state.selected_param = ParamKey::MarketingFee.index();
        state.nudge_selected(-5);
        state.reset_params();
        assert_eq!(state.params, ProfitParameters::default());

        state.mark_saved();
        assert!(!state.dirty);
        assert_eq!(
            state.status_message.as_deref(),
            Some(format!("Saved ?{}", ProfitParameters::default().to_query()).as_str())
        );
    }
}

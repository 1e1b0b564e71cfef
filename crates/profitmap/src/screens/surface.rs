//! Profit surface under a user-controlled camera.

use ratatui::{Frame, layout::Rect};

use super::{Screen, render_sidebar};
use crate::components::charts::surface::SurfacePlot;
use crate::components::{Component, EventResult};
use crate::event::{AppKeyEvent, KeyCode};
use crate::state::{AppState, Focus};
use crate::util::styles::focused_block_with_help;

pub struct SurfaceScreen;

impl Component for SurfaceScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        if !key.no_modifiers() {
            return EventResult::NotHandled;
        }

        let camera = &mut state.camera;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => camera.rotate(-1),
            KeyCode::Right | KeyCode::Char('l') => camera.rotate(1),
            KeyCode::Up | KeyCode::Char('k') => camera.tilt(1),
            KeyCode::Down | KeyCode::Char('j') => camera.tilt(-1),
            KeyCode::Char('+') | KeyCode::Char('=') => camera.zoom_in(),
            KeyCode::Char('-') => camera.zoom_out(),
            KeyCode::Char('0') => camera.reset(),
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chart_area = render_sidebar(frame, area, state);

        let camera = state.camera;
        let title = format!(
            " Interactive Profit Surface (az {:.0}°, el {:.0}°, {:.1}x) ",
            camera.azimuth, camera.elevation, camera.zoom
        );
        let block = focused_block_with_help(
            &title,
            state.focus == Focus::Chart,
            "hl rotate  jk tilt  +/- zoom  0 reset",
        );
        SurfacePlot::new(&state.surface, camera)
            .stride(state.config.wireframe_stride)
            .crosshair(state.crosshair)
            .render(frame, chart_area, block);
    }
}

impl Screen for SurfaceScreen {
    fn title(&self) -> &str {
        "Interactive 3D"
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::state::Camera;

    #[test]
    fn test_camera_keys() {
        let mut screen = SurfaceScreen;
        let mut state = AppState::default();

        screen.handle_key(AppKeyEvent::new(KeyCode::Right), &mut state);
        screen.handle_key(AppKeyEvent::new(KeyCode::Char('k')), &mut state);
        screen.handle_key(AppKeyEvent::new(KeyCode::Char('+')), &mut state);
        assert_ne!(state.camera, Camera::default());
        assert!(state.camera.zoom > 1.0);

        screen.handle_key(AppKeyEvent::new(KeyCode::Char('0')), &mut state);
        assert_eq!(state.camera, Camera::default());
    }
}

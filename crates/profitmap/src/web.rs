//! Web entry point for profitmap using ratzilla.
//!
//! The same [`App`] as the terminal build, drawn by ratzilla's DOM backend.
//! Parameters come from and are saved to the page URL.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::Terminal;
use ratzilla::event::KeyEvent as RatzillaKeyEvent;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::event::AppKeyEvent;
use crate::platform::WebStorage;

/// Set up event listener to prevent default browser behavior for captured keys.
fn setup_prevent_default() -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
        let key = event.key();
        let ctrl = event.ctrl_key() || event.meta_key();

        // Tab would move browser focus and Ctrl+S would save the page
        let should_prevent =
            key == "Tab" || (ctrl && key.eq_ignore_ascii_case("s"));

        if should_prevent {
            event.prevent_default();
        }
    });

    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;

    // The listener lives as long as the page
    closure.forget();
    Ok(())
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    crate::init_logging_web();

    tracing::info!("profitmap web version starting");

    setup_prevent_default()?;

    let app = Rc::new(RefCell::new(App::new(Box::new(WebStorage::new()))));

    let backend = DomBackend::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let terminal: Terminal<DomBackend> =
        Terminal::new(backend).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let key_app = Rc::clone(&app);
    terminal.on_key_event(move |key_event: RatzillaKeyEvent| {
        let key: AppKeyEvent = (&key_event).into();
        key_app.borrow_mut().handle_key(key);
    });

    terminal.draw_web(move |frame| {
        app.borrow_mut().draw(frame);
    });

    Ok(())
}

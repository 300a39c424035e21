// ============================================================================
// APP VIEW - Despacho raíz: login o panel según la sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::state::AppState;
use crate::views::{render_admin_panel, render_login};

/// Renderizar la vista raíz según el estado de sesión
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    if state.session.is_authenticated() {
        render_admin_panel(state)
    } else {
        render_login(state)
    }
}

// ============================================================================
// CONSOLA DE ADMINISTRACIÓN WEBJWTGEN (RUST PURO + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: validación + orquestación de operaciones
// - Services: SOLO comunicación HTTP y conducto base64 del keystore
// - State: contexto de sesión + estado de UI con Rc<RefCell>
// - Models: payloads compartidos con el servlet de setup
// ============================================================================

mod app;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;

// Instancia global de la aplicación (hilo único del navegador)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::default());
    log::info!("🚀 Consola de administración webjwtgen");

    let app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-renderizar la aplicación completa (login/panel, diálogos)
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            if let Err(e) = app.render() {
                log::error!("❌ [MAIN] Error re-renderizando la app: {:?}", e);
            }
        }
    });
}

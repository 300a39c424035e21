// ============================================================================
// ADMIN PANEL - Vista principal de la consola
// ============================================================================
// Al mostrarse dispara tres refrescos independientes: estado de setup
// (consulta fresca, nunca cacheada), URLs del servicio (reconstruidas desde
// el origen actual) y el reloj a 1 Hz.
// ============================================================================

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, get_element_by_id, on_click, set_class_name, set_text_content, window,
    ElementBuilder,
};
use crate::services::SetupApi;
use crate::state::AppState;
use crate::utils::{GENERATE_PATH, SETUP_PATH};
use crate::viewmodels::ResetViewModel;
use crate::views::{
    render_backup_section, render_password_section, render_reset_confirm_dialog,
    render_reset_password_dialog,
};

/// Renderizar el panel de administración
pub fn render_admin_panel(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [PANEL] render_admin_panel() llamado");

    let panel = ElementBuilder::new("div")?.class("admin-panel").build();

    // Header: título + reloj
    let header = ElementBuilder::new("header")?.class("panel-header").build();
    let title = ElementBuilder::new("h1")?.text("Consola webjwtgen").build();
    let clock = ElementBuilder::new("span")?
        .id("admin-clock")?
        .class("admin-clock")
        .build();
    append_child(&header, &title)?;
    append_child(&header, &clock)?;
    start_clock(state);

    // Estado de setup
    let status_section = ElementBuilder::new("section")?.class("panel-section").build();
    let status_title = ElementBuilder::new("h2")?.text("Estado del sistema").build();
    let status_badge = ElementBuilder::new("span")?
        .id("setup-status-badge")?
        .class("status-badge")
        .text("⏳ Consultando...")
        .build();
    append_child(&status_section, &status_title)?;
    append_child(&status_section, &status_badge)?;
    refresh_setup_status();

    // URLs del servicio
    let urls_section = render_generated_urls()?;

    // Operaciones
    let password_section = render_password_section(state)?;
    let backup_section = render_backup_section(state)?;
    let danger_section = render_danger_section(state)?;

    append_child(&panel, &header)?;
    append_child(&panel, &status_section)?;
    append_child(&panel, &urls_section)?;
    append_child(&panel, &password_section)?;
    append_child(&panel, &backup_section)?;
    append_child(&panel, &danger_section)?;

    // Diálogos del ritual de reset forzado
    if *state.show_reset_password_dialog.borrow() {
        append_child(&panel, &render_reset_password_dialog(state)?)?;
    }
    if *state.show_reset_confirm_dialog.borrow() {
        append_child(&panel, &render_reset_confirm_dialog(state)?)?;
    }

    Ok(panel)
}

/// Consultar el estado de setup y pintar el badge. Los fallos solo se
/// registran en consola.
fn refresh_setup_status() {
    spawn_local(async move {
        let api = SetupApi::new();
        match api.fetch_status().await {
            Ok(status) => {
                if let Some(badge) = get_element_by_id("setup-status-badge") {
                    if status.setup_completed {
                        set_text_content(&badge, "✅ Sistema inicializado");
                        set_class_name(&badge, "status-badge ok");
                    } else {
                        set_text_content(&badge, "⚠️ Setup pendiente");
                        set_class_name(&badge, "status-badge pending");
                    }
                }
            }
            Err(e) => log::error!("❌ [PANEL] Error consultando estado de setup: {}", e),
        }
    });
}

/// URLs del servicio reconstruidas desde el origen actual en cada render
fn generated_urls() -> Vec<(&'static str, String)> {
    let origin = window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    vec![
        (
            "Generación de tokens",
            format!(
                "{}{}?key=<API_KEY>&exp=<EPOCH>&iss=<ISSUER>&sub=<SUBJECT>",
                origin, GENERATE_PATH
            ),
        ),
        ("Estado del setup", format!("{}{}", origin, SETUP_PATH)),
    ]
}

fn render_generated_urls() -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?.class("panel-section").build();
    let title = ElementBuilder::new("h2")?.text("URLs del servicio").build();
    let list = ElementBuilder::new("ul")?.class("url-list").build();

    for (label, url) in generated_urls() {
        let item = ElementBuilder::new("li")?.build();
        let caption = ElementBuilder::new("span")?
            .class("url-label")
            .text(label)
            .build();
        let code = ElementBuilder::new("code")?.text(&url).build();
        append_child(&item, &caption)?;
        append_child(&item, &code)?;
        append_child(&list, &item)?;
    }

    append_child(&section, &title)?;
    append_child(&section, &list)?;
    Ok(section)
}

/// Arrancar el reloj del panel. El intervalo se crea una sola vez y nunca se
/// cancela: vive lo que viva la página.
fn start_clock(state: &AppState) {
    tick_clock();

    if *state.clock_started.borrow() {
        return;
    }
    *state.clock_started.borrow_mut() = true;

    Interval::new(1_000, tick_clock).forget();
    log::info!("⏰ [PANEL] Reloj del panel arrancado (1 Hz)");
}

fn tick_clock() {
    if let Some(el) = get_element_by_id("admin-clock") {
        let now = js_sys::Date::new_0();
        set_text_content(&el, &String::from(now.to_locale_time_string("es-ES")));
    }
}

fn render_danger_section(state: &AppState) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?
        .class("panel-section danger-zone")
        .build();
    let title = ElementBuilder::new("h2")?.text("Zona de peligro").build();
    let warning = ElementBuilder::new("p")?
        .text("El reset forzado borra el keystore y toda la configuración del sistema.")
        .build();
    let button = ElementBuilder::new("button")?
        .class("btn btn-danger")
        .text("Reset forzado del sistema…")
        .build();

    {
        let state = state.clone();
        on_click(&button, move |_| {
            ResetViewModel::new(state.clone()).open_password_dialog();
            crate::rerender_app();
        })?;
    }

    append_child(&section, &title)?;
    append_child(&section, &warning)?;
    append_child(&section, &button)?;
    Ok(section)
}

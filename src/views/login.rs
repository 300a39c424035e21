// ============================================================================
// LOGIN VIEW - Puerta de sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, input_value, on_click, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::LoginViewModel;
use crate::views::DomMessageSink;

/// Renderizar el formulario de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login() llamado");

    let screen = ElementBuilder::new("div")?.class("login-screen").build();
    let container = ElementBuilder::new("div")?.class("login-container").build();

    // Header
    let header = ElementBuilder::new("div")?.class("login-header").build();
    let logo = ElementBuilder::new("div")?.class("login-logo").text("🗝️").build();
    let title = ElementBuilder::new("h1")?.text("Consola webjwtgen").build();
    let subtitle = ElementBuilder::new("p")?
        .text("Administración del keystore JWT")
        .build();
    append_child(&header, &logo)?;
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;

    // Formulario
    let form = ElementBuilder::new("div")?.class("login-form").build();

    let group = ElementBuilder::new("div")?.class("form-group").build();
    let label = ElementBuilder::new("label")?
        .attr("for", "login-password")?
        .text("Contraseña de administrador")
        .build();
    let password_input = ElementBuilder::new("input")?
        .id("login-password")?
        .class("form-input")
        .attr("type", "password")?
        .attr("placeholder", "Mínimo 8 caracteres")?
        .build();
    append_child(&group, &label)?;
    append_child(&group, &password_input)?;

    let message = ElementBuilder::new("div")?
        .id("login-message")?
        .class("message")
        .build();

    let button = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("Entrar")
        .build();

    {
        let state = state.clone();
        on_click(&button, move |_| {
            let vm = LoginViewModel::new(state.clone());
            let sink = DomMessageSink::new("login-message");
            let password = input_value("login-password");
            if vm.submit(&password, &sink) {
                crate::rerender_app();
            }
        })?;
    }

    append_child(&form, &group)?;
    append_child(&form, &message)?;
    append_child(&form, &button)?;

    append_child(&container, &header)?;
    append_child(&container, &form)?;
    append_child(&screen, &container)?;

    Ok(screen)
}

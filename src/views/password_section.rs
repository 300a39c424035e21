// ============================================================================
// PASSWORD SECTION - Cambio de contraseña del administrador
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, input_value, on_click, set_input_value, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::PasswordViewModel;
use crate::views::DomMessageSink;

fn password_field(id: &str, label_text: &str) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();
    let input = ElementBuilder::new("input")?
        .id(id)?
        .class("form-input")
        .attr("type", "password")?
        .build();
    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok(group)
}

/// Renderizar la sección de cambio de contraseña
pub fn render_password_section(state: &AppState) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?.class("panel-section").build();
    let title = ElementBuilder::new("h2")?.text("Cambiar contraseña").build();

    let current = password_field("current-password", "Contraseña actual")?;
    let new = password_field("new-password", "Nueva contraseña")?;
    let confirm = password_field("confirm-password", "Confirmar nueva contraseña")?;

    let message = ElementBuilder::new("div")?
        .id("password-message")?
        .class("message")
        .build();

    let button = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("Cambiar contraseña")
        .build();

    {
        let state = state.clone();
        on_click(&button, move |_| {
            let state = state.clone();
            let current = input_value("current-password");
            let new = input_value("new-password");
            let confirm = input_value("confirm-password");

            spawn_local(async move {
                let vm = PasswordViewModel::new(state);
                let sink = DomMessageSink::new("password-message");
                if vm.submit(&current, &new, &confirm, &sink).await {
                    // Éxito: limpiar los campos. En fallo se conservan.
                    set_input_value("current-password", "");
                    set_input_value("new-password", "");
                    set_input_value("confirm-password", "");
                }
            });
        })?;
    }

    append_child(&section, &title)?;
    append_child(&section, &current)?;
    append_child(&section, &new)?;
    append_child(&section, &confirm)?;
    append_child(&section, &message)?;
    append_child(&section, &button)?;
    Ok(section)
}

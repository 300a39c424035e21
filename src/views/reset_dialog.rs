// ============================================================================
// RESET DIALOG - Ritual de confirmación del reset forzado
// ============================================================================
// Dos diálogos encadenados: re-entrada de contraseña y luego tres
// confirmaciones independientes. El botón de confirmación se habilita
// únicamente con las tres marcadas; cada cambio de checkbox actualiza el
// botón sin re-render completo.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlInputElement};

use crate::dom::{
    append_child, input_value, on_change, on_click, set_button_disabled, ElementBuilder,
};
use crate::state::{AppState, ResetConfirmations};
use crate::viewmodels::ResetViewModel;
use crate::views::DomMessageSink;

/// Paso 1: diálogo de re-entrada de contraseña
pub fn render_reset_password_dialog(state: &AppState) -> Result<Element, JsValue> {
    let overlay = ElementBuilder::new("div")?.class("dialog-overlay").build();
    let dialog = ElementBuilder::new("div")?.class("dialog").build();

    let title = ElementBuilder::new("h3")?.text("Reset forzado del sistema").build();
    let hint = ElementBuilder::new("p")?
        .text("Re-introduce la contraseña de administrador. Si lo dejas vacío se usa la contraseña de la sesión actual.")
        .build();
    let input = ElementBuilder::new("input")?
        .id("reset-password-entry")?
        .class("form-input")
        .attr("type", "password")?
        .build();

    let actions = ElementBuilder::new("div")?.class("dialog-actions").build();
    let cancel = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .text("Cancelar")
        .build();
    let proceed = ElementBuilder::new("button")?
        .class("btn btn-danger")
        .text("Continuar")
        .build();

    {
        let state = state.clone();
        on_click(&cancel, move |_| {
            ResetViewModel::new(state.clone()).close_dialogs();
            crate::rerender_app();
        })?;
    }
    {
        let state = state.clone();
        on_click(&proceed, move |_| {
            let entered = input_value("reset-password-entry");
            ResetViewModel::new(state.clone()).proceed_to_confirmations(&entered);
            crate::rerender_app();
        })?;
    }

    append_child(&actions, &cancel)?;
    append_child(&actions, &proceed)?;
    append_child(&dialog, &title)?;
    append_child(&dialog, &hint)?;
    append_child(&dialog, &input)?;
    append_child(&dialog, &actions)?;
    append_child(&overlay, &dialog)?;
    Ok(overlay)
}

/// Fila de confirmación: checkbox + texto. Cada cambio re-evalúa si el botón
/// de confirmación queda habilitado.
fn ack_row(
    state: &AppState,
    id: &str,
    text: &str,
    setter: impl Fn(&mut ResetConfirmations, bool) + 'static,
) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("label")?.class("ack-row").build();
    let checkbox = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", "checkbox")?
        .build();
    let caption = ElementBuilder::new("span")?.text(text).build();

    {
        let state = state.clone();
        on_change(&checkbox, move |e: Event| {
            let checked = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.checked())
                .unwrap_or(false);

            setter(&mut state.reset_confirmations.borrow_mut(), checked);

            let enabled = state.reset_confirmations.borrow().all_confirmed();
            set_button_disabled("reset-confirm-btn", !enabled);
        })?;
    }

    append_child(&row, &checkbox)?;
    append_child(&row, &caption)?;
    Ok(row)
}

/// Paso 2: diálogo con las tres confirmaciones y el botón de ejecución
pub fn render_reset_confirm_dialog(state: &AppState) -> Result<Element, JsValue> {
    let overlay = ElementBuilder::new("div")?.class("dialog-overlay").build();
    let dialog = ElementBuilder::new("div")?.class("dialog").build();

    let title = ElementBuilder::new("h3")?.text("Confirmar reset del sistema").build();
    let warning = ElementBuilder::new("p")?
        .class("dialog-warning")
        .text("⚠️ Esta operación borra el keystore y toda la configuración.")
        .build();

    let ack1 = ack_row(
        state,
        "reset-ack-keys",
        "Entiendo que se borrarán todas las claves",
        |c, v| c.delete_keys = v,
    )?;
    let ack2 = ack_row(
        state,
        "reset-ack-irreversible",
        "Entiendo que la operación es irreversible",
        |c, v| c.irreversible = v,
    )?;
    let ack3 = ack_row(
        state,
        "reset-ack-backup",
        "Tengo un backup reciente del keystore",
        |c, v| c.have_backup = v,
    )?;

    let message = ElementBuilder::new("div")?
        .id("reset-message")?
        .class("message")
        .build();

    let actions = ElementBuilder::new("div")?.class("dialog-actions").build();
    let cancel = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .text("Cancelar")
        .build();
    // Arranca deshabilitado: las confirmaciones siempre empiezan desmarcadas
    let confirm = ElementBuilder::new("button")?
        .id("reset-confirm-btn")?
        .class("btn btn-danger")
        .attr("disabled", "")?
        .text("Reiniciar el sistema")
        .build();

    {
        let state = state.clone();
        on_click(&cancel, move |_| {
            ResetViewModel::new(state.clone()).close_dialogs();
            crate::rerender_app();
        })?;
    }
    {
        let state = state.clone();
        on_click(&confirm, move |_| {
            let state = state.clone();
            if !state.reset_confirmations.borrow().all_confirmed() {
                return;
            }
            set_button_disabled("reset-confirm-btn", true);

            spawn_local(async move {
                let vm = ResetViewModel::new(state);
                let sink = DomMessageSink::new("reset-message");
                if !vm.submit(&sink).await {
                    // Error: re-habilitar para poder reintentar
                    set_button_disabled("reset-confirm-btn", false);
                }
            });
        })?;
    }

    append_child(&actions, &cancel)?;
    append_child(&actions, &confirm)?;
    append_child(&dialog, &title)?;
    append_child(&dialog, &warning)?;
    append_child(&dialog, &ack1)?;
    append_child(&dialog, &ack2)?;
    append_child(&dialog, &ack3)?;
    append_child(&dialog, &message)?;
    append_child(&dialog, &actions)?;
    append_child(&overlay, &dialog)?;
    Ok(overlay)
}

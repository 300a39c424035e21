// ============================================================================
// BACKUP SECTION - Backup y restauración del keystore
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    append_child, get_element_by_id, input_value, on_click, set_button_disabled, set_input_value,
    ElementBuilder,
};
use crate::state::AppState;
use crate::viewmodels::{BackupViewModel, MessageSink};
use crate::views::DomMessageSink;

/// Renderizar la sección de backup/restauración
pub fn render_backup_section(state: &AppState) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?.class("panel-section").build();
    let title = ElementBuilder::new("h2")?.text("Backup del keystore").build();

    // --- Backup ---
    let backup_group = ElementBuilder::new("div")?.class("form-group").build();
    let backup_label = ElementBuilder::new("label")?
        .attr("for", "backup-password")?
        .text("Contraseña del keystore")
        .build();
    let backup_input = ElementBuilder::new("input")?
        .id("backup-password")?
        .class("form-input")
        .attr("type", "password")?
        .attr("placeholder", "Vacío: usar la contraseña vigente")?
        .build();
    append_child(&backup_group, &backup_label)?;
    append_child(&backup_group, &backup_input)?;

    let backup_message = ElementBuilder::new("div")?
        .id("backup-message")?
        .class("message")
        .build();

    let backup_button = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .text("Descargar backup")
        .build();

    {
        let state = state.clone();
        on_click(&backup_button, move |_| {
            let state = state.clone();
            let entered = input_value("backup-password");
            let entered = (!entered.is_empty()).then_some(entered);

            spawn_local(async move {
                let vm = BackupViewModel::new(state);
                let sink = DomMessageSink::new("backup-message");
                vm.download_backup(entered, &sink).await;
            });
        })?;
    }

    // --- Restauración ---
    let restore_title = ElementBuilder::new("h2")?.text("Restaurar keystore").build();

    let file_group = ElementBuilder::new("div")?.class("form-group").build();
    let file_label = ElementBuilder::new("label")?
        .attr("for", "keystore-file")?
        .text("Archivo .jks")
        .build();
    let file_input = ElementBuilder::new("input")?
        .id("keystore-file")?
        .class("form-input")
        .attr("type", "file")?
        .attr("accept", ".jks")?
        .build();
    append_child(&file_group, &file_label)?;
    append_child(&file_group, &file_input)?;

    let restore_group = ElementBuilder::new("div")?.class("form-group").build();
    let restore_label = ElementBuilder::new("label")?
        .attr("for", "restore-password")?
        .text("Contraseña del keystore a restaurar")
        .build();
    let restore_input = ElementBuilder::new("input")?
        .id("restore-password")?
        .class("form-input")
        .attr("type", "password")?
        .build();
    append_child(&restore_group, &restore_label)?;
    append_child(&restore_group, &restore_input)?;

    let restore_message = ElementBuilder::new("div")?
        .id("restore-message")?
        .class("message")
        .build();

    let restore_button = ElementBuilder::new("button")?
        .id("restore-btn")?
        .class("btn btn-secondary")
        .text("Restaurar")
        .build();

    {
        let state = state.clone();
        on_click(&restore_button, move |_| {
            let state = state.clone();
            let sink = DomMessageSink::new("restore-message");

            let file = get_element_by_id("keystore-file")
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let Some(file) = file else {
                sink.error("❌ Selecciona un archivo .jks");
                return;
            };
            let password = input_value("restore-password");

            // Guarda informal: botón deshabilitado mientras la llamada vuela
            set_button_disabled("restore-btn", true);

            spawn_local(async move {
                let vm = BackupViewModel::new(state);
                let ok = vm.restore_from_file(file, &password, &sink).await;
                set_input_value("keystore-file", "");
                if !ok {
                    set_button_disabled("restore-btn", false);
                }
                // En éxito la página se recarga sola tras el aviso
            });
        })?;
    }

    append_child(&section, &title)?;
    append_child(&section, &backup_group)?;
    append_child(&section, &backup_message)?;
    append_child(&section, &backup_button)?;
    append_child(&section, &restore_title)?;
    append_child(&section, &file_group)?;
    append_child(&section, &restore_group)?;
    append_child(&section, &restore_message)?;
    append_child(&section, &restore_button)?;
    Ok(section)
}

// ============================================================================
// BACKUP VIEWMODEL - Backup y restauración del keystore
// ============================================================================
// El blob solo existe durante un intercambio: en backup llega como base64 y
// se materializa como descarga; en restore se lee el archivo completo y se
// envía como base64.
// ============================================================================

use gloo_timers::callback::Timeout;

use crate::services::{
    backup_filename, decode_keystore, download_keystore, encode_keystore, is_keystore_filename,
    read_keystore_file, SetupApi,
};
use crate::state::AppState;
use crate::viewmodels::MessageSink;

/// ViewModel de backup/restauración - SOLO lógica de negocio
pub struct BackupViewModel {
    state: AppState,
    api: SetupApi,
}

impl BackupViewModel {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            api: SetupApi::new(),
        }
    }

    /// Descargar un backup del keystore. Si no se re-entró contraseña, se
    /// recupera primero la vigente con `action=currentPassword`.
    pub async fn download_backup(
        &self,
        entered_password: Option<String>,
        messages: &dyn MessageSink,
    ) -> bool {
        let password = match entered_password.filter(|p| !p.is_empty()) {
            Some(p) => p,
            None => match self.api.fetch_current_password().await {
                Ok(r) if r.success => match r.password {
                    Some(p) if !p.is_empty() => p,
                    _ => {
                        messages.error("❌ El servidor no devolvió la contraseña vigente");
                        return false;
                    }
                },
                Ok(r) => {
                    let text = r
                        .error
                        .unwrap_or_else(|| "No se pudo recuperar la contraseña".to_string());
                    messages.error(&format!("❌ {}", text));
                    return false;
                }
                Err(e) => {
                    messages.error(&format!("❌ {}", e));
                    return false;
                }
            },
        };

        match self.api.backup_keystore(&password).await {
            Ok(r) if r.success => {
                let Some(data) = r.data else {
                    messages.error("❌ La respuesta de backup no trae datos");
                    return false;
                };
                let bytes = match decode_keystore(&data) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        messages.error(&format!("❌ {}", e));
                        return false;
                    }
                };
                let filename = backup_filename(r.filename.as_deref());
                if let Err(e) = download_keystore(&bytes, &filename) {
                    messages.error(&format!("❌ No se pudo disparar la descarga: {:?}", e));
                    return false;
                }
                messages.success("✅ Backup del keystore descargado");
                true
            }
            Ok(r) => {
                let text = r.error.unwrap_or_else(|| "Backup fallido".to_string());
                messages.error(&format!("❌ {}", text));
                false
            }
            Err(e) => {
                messages.error(&format!("❌ {}", e));
                false
            }
        }
    }

    /// Restaurar el keystore desde un archivo subido. El chequeo de extensión
    /// es solo del nombre; el contenido lo valida el servidor.
    pub async fn restore_from_file(
        &self,
        file: web_sys::File,
        password: &str,
        messages: &dyn MessageSink,
    ) -> bool {
        if !is_keystore_filename(&file.name()) {
            messages.error("❌ Solo se pueden subir archivos .jks");
            return false;
        }
        if password.is_empty() {
            messages.error("❌ Introduce la contraseña del keystore");
            return false;
        }
        if *self.state.restore_in_flight.borrow() {
            return false;
        }

        *self.state.restore_in_flight.borrow_mut() = true;
        messages.info("⏳ Restaurando keystore...");

        let result = self.do_restore(file, password).await;
        *self.state.restore_in_flight.borrow_mut() = false;

        match result {
            Ok(text) => {
                messages.success(&format!("✅ {}", text));
                // Recarga diferida para que el backend sirva ya el keystore nuevo
                Timeout::new(2_000, move || {
                    if let Some(win) = web_sys::window() {
                        let _ = win.location().reload();
                    }
                })
                .forget();
                true
            }
            Err(e) => {
                messages.error(&format!("❌ {}", e));
                false
            }
        }
    }

    async fn do_restore(&self, file: web_sys::File, password: &str) -> Result<String, String> {
        let bytes = read_keystore_file(file).await?;
        log::info!("📖 [RESTORE] Archivo leído: {} bytes", bytes.len());

        let response = self
            .api
            .restore_keystore(password, &encode_keystore(&bytes))
            .await?;

        if response.success {
            Ok(response
                .message
                .unwrap_or_else(|| "Keystore restaurado".to_string()))
        } else {
            Err(response
                .error
                .unwrap_or_else(|| "Restauración fallida".to_string()))
        }
    }
}

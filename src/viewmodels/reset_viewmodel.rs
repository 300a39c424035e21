// ============================================================================
// RESET VIEWMODEL - Reset forzado del sistema
// ============================================================================
// Ritual de confirmación en tres pasos, todo del lado del cliente:
//   1. diálogo de re-entrada de contraseña
//   2. diálogo con tres confirmaciones independientes (checkboxes)
//   3. botón habilitado solo con las tres marcadas
// El servidor re-valida contraseña y código de confirmación por su cuenta.
// ============================================================================

use gloo_timers::callback::Timeout;

use crate::services::SetupApi;
use crate::state::AppState;
use crate::viewmodels::MessageSink;

/// Contraseña a usar en el reset: la re-entrada explícita tiene prioridad,
/// si está vacía se recupera de la marca de credenciales cacheada
pub fn resolve_reset_password(entry: &str, cached: Option<String>) -> Option<String> {
    if !entry.is_empty() {
        return Some(entry.to_string());
    }
    cached.filter(|p| !p.is_empty())
}

/// ViewModel del reset forzado - SOLO lógica de negocio
pub struct ResetViewModel {
    state: AppState,
    api: SetupApi,
}

impl ResetViewModel {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            api: SetupApi::new(),
        }
    }

    /// Paso 1: abrir el diálogo de re-entrada de contraseña
    pub fn open_password_dialog(&self) {
        self.state.reset_password_entry.borrow_mut().clear();
        *self.state.show_reset_password_dialog.borrow_mut() = true;
        *self.state.show_reset_confirm_dialog.borrow_mut() = false;
    }

    /// Paso 2: pasar al diálogo de confirmaciones. Los tres checkboxes
    /// arrancan siempre desmarcados.
    pub fn proceed_to_confirmations(&self, entered_password: &str) {
        *self.state.reset_password_entry.borrow_mut() = entered_password.to_string();
        self.state.reset_confirmations.borrow_mut().reset();
        *self.state.show_reset_password_dialog.borrow_mut() = false;
        *self.state.show_reset_confirm_dialog.borrow_mut() = true;
    }

    /// Cerrar ambos diálogos sin tocar nada más
    pub fn close_dialogs(&self) {
        *self.state.show_reset_password_dialog.borrow_mut() = false;
        *self.state.show_reset_confirm_dialog.borrow_mut() = false;
    }

    /// Paso 3: ejecutar el reset. En éxito limpia la marca de credenciales y
    /// programa la recarga de la página (de vuelta al login). Devuelve false
    /// si hubo error (el llamador re-habilita el botón).
    pub async fn submit(&self, messages: &dyn MessageSink) -> bool {
        if !self.state.reset_confirmations.borrow().all_confirmed() {
            return false;
        }
        if *self.state.reset_in_flight.borrow() {
            return false;
        }

        let entry = self.state.reset_password_entry.borrow().clone();
        let Some(password) = resolve_reset_password(&entry, self.state.session.password()) else {
            messages.error("❌ Introduce la contraseña de administrador");
            return false;
        };

        *self.state.reset_in_flight.borrow_mut() = true;
        messages.info("⏳ Reiniciando el sistema...");

        let result = self.api.force_reset(&password).await;
        *self.state.reset_in_flight.borrow_mut() = false;

        match result {
            Ok(r) if r.success => {
                self.state.session.clear();
                let text = r
                    .message
                    .unwrap_or_else(|| "Sistema reiniciado".to_string());
                messages.success(&format!("✅ {}", text));
                schedule_reload_to_login();
                true
            }
            Ok(r) => {
                let text = r.error.unwrap_or_else(|| "Reset fallido".to_string());
                messages.error(&format!("❌ {}", text));
                false
            }
            Err(e) => {
                messages.error(&format!("❌ {}", e));
                false
            }
        }
    }
}

/// Recarga diferida: con la marca ya limpiada, la página recargada cae en el
/// formulario de login
fn schedule_reload_to_login() {
    Timeout::new(2_000, move || {
        if let Some(win) = web_sys::window() {
            if let Err(e) = win.location().reload() {
                log::error!("❌ [RESET] No se pudo recargar la página: {:?}", e);
            }
        }
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_reentry_takes_priority() {
        let resolved = resolve_reset_password("manual99", Some("cacheada1".to_string()));
        assert_eq!(resolved.unwrap(), "manual99");
    }

    #[test]
    fn test_falls_back_to_cached_password() {
        let resolved = resolve_reset_password("", Some("cacheada1".to_string()));
        assert_eq!(resolved.unwrap(), "cacheada1");
    }

    #[test]
    fn test_no_password_available() {
        assert!(resolve_reset_password("", None).is_none());
        assert!(resolve_reset_password("", Some(String::new())).is_none());
    }
}

// ============================================================================
// PASSWORD VIEWMODEL - Cambio de contraseña del administrador
// ============================================================================

use crate::services::SetupApi;
use crate::state::AppState;
use crate::utils::MIN_PASSWORD_LEN;
use crate::viewmodels::MessageSink;

/// Validación local del cambio de contraseña; si falla no se toca la red
pub fn validate_password_change(current: &str, new: &str, confirm: &str) -> Result<(), String> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err("❌ Completa todos los campos".to_string());
    }
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "❌ La nueva contraseña debe tener al menos {} caracteres",
            MIN_PASSWORD_LEN
        ));
    }
    if new == current {
        return Err("❌ La nueva contraseña debe ser distinta de la actual".to_string());
    }
    if new != confirm {
        return Err("❌ Las contraseñas nuevas no coinciden".to_string());
    }
    Ok(())
}

/// ViewModel del cambio de contraseña - SOLO lógica de negocio
pub struct PasswordViewModel {
    state: AppState,
    api: SetupApi,
}

impl PasswordViewModel {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            api: SetupApi::new(),
        }
    }

    /// Enviar el cambio. En éxito la marca de credenciales se refresca con la
    /// nueva contraseña y devuelve true (el llamador limpia los campos). En
    /// fallo los campos se conservan.
    pub async fn submit(
        &self,
        current: &str,
        new: &str,
        confirm: &str,
        messages: &dyn MessageSink,
    ) -> bool {
        if let Err(e) = validate_password_change(current, new, confirm) {
            messages.error(&e);
            return false;
        }

        messages.info("⏳ Cambiando contraseña...");

        match self.api.change_password(current, new, confirm).await {
            Ok(r) if r.success => {
                let now_ms = js_sys::Date::now() as u64;
                self.state.session.refresh_password(new, now_ms);
                let text = r.message.unwrap_or_else(|| "Contraseña cambiada".to_string());
                messages.success(&format!("✅ {}", text));
                true
            }
            Ok(r) => {
                let text = r
                    .error
                    .unwrap_or_else(|| "No se pudo cambiar la contraseña".to_string());
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_all_fields() {
        assert!(validate_password_change("", "abcd1234", "abcd1234").is_err());
        assert!(validate_password_change("oldpass1", "", "").is_err());
    }

    #[test]
    fn test_new_password_minimum_length() {
        assert!(validate_password_change("oldpass1", "corta", "corta").is_err());
    }

    #[test]
    fn test_new_password_must_differ_from_current() {
        assert!(validate_password_change("abcd1234", "abcd1234", "abcd1234").is_err());
    }

    #[test]
    fn test_new_passwords_must_match() {
        assert!(validate_password_change("oldpass1", "abcd1234", "abcd1235").is_err());
    }

    #[test]
    fn test_valid_change_passes() {
        assert!(validate_password_change("oldpass1", "abcd1234", "abcd1234").is_ok());
    }
}

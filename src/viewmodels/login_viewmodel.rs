// ============================================================================
// LOGIN VIEWMODEL - Puerta de sesión
// ============================================================================
// La autenticación es puramente local: si la validación pasa, se fabrica la
// marca de credenciales y se muestra el panel SIN llamada al servidor. La
// marca nunca se verifica contra el servidor después; no es autenticación
// real (ver la cuestión abierta en DESIGN.md).
// ============================================================================

use crate::state::AppState;
use crate::utils::MIN_PASSWORD_LEN;
use crate::viewmodels::MessageSink;

/// Precondición local del login; si falla no se toca la red
pub fn validate_login_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "❌ La contraseña debe tener al menos {} caracteres",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

/// ViewModel de la puerta de sesión - SOLO lógica de negocio
pub struct LoginViewModel {
    state: AppState,
}

impl LoginViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Enviar el formulario de login. Devuelve true si la sesión quedó
    /// establecida (el llamador re-renderiza hacia el panel).
    pub fn submit(&self, password: &str, messages: &dyn MessageSink) -> bool {
        if let Err(e) = validate_login_password(password) {
            messages.error(&e);
            return false;
        }

        let now_ms = js_sys::Date::now() as u64;
        self.state.session.authenticate(password, now_ms);
        messages.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewmodels::messages::capture::CaptureSink;

    #[test]
    fn test_short_password_is_rejected_locally() {
        assert!(validate_login_password("").is_err());
        assert!(validate_login_password("abc1234").is_err());
        assert!(validate_login_password("abcd1234").is_ok());
    }

    #[test]
    fn test_short_password_shows_error_and_keeps_session_absent() {
        // El viewmodel no tiene cliente HTTP: el rechazo local no puede
        // generar tráfico. Aquí se comprueba el mensaje y el estado.
        let state = AppState::new();
        let vm = LoginViewModel::new(state.clone());
        let sink = CaptureSink::default();

        assert!(!vm.submit("corta", &sink));
        assert_eq!(sink.last().unwrap().0, "error");
        assert!(!state.session.is_authenticated());
    }
}

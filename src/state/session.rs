// ============================================================================
// SESSION STATE - Contexto de sesión del administrador
// ============================================================================
// La marca de credenciales (`adminToken` en sessionStorage) es una caché de
// conveniencia del lado del cliente: el servidor NUNCA la valida en peticiones
// posteriores. No es una frontera de seguridad.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::utils::{load_from_session, remove_from_session, save_to_session, ADMIN_TOKEN_KEY};

/// Ciclo de vida de la sesión: ausente → autenticada → limpiada
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Absent,
    Authenticated,
    Cleared,
}

/// Codificar la marca de credenciales: base64 de `password:timestamp`
pub fn encode_admin_token(password: &str, timestamp_ms: u64) -> String {
    BASE64.encode(format!("{}:{}", password, timestamp_ms))
}

/// Decodificar la marca de credenciales; None si el formato no es válido.
/// La contraseña puede contener `:`, el timestamp va siempre al final.
pub fn decode_admin_token(token: &str) -> Option<(String, u64)> {
    let decoded = BASE64.decode(token).ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (password, ts) = text.rsplit_once(':')?;
    let timestamp_ms = ts.parse::<u64>().ok()?;
    Some((password.to_string(), timestamp_ms))
}

/// Estado de sesión del administrador.
/// Se pasa explícitamente a cada operación en lugar de una variable global.
#[derive(Clone)]
pub struct SessionState {
    phase: Rc<RefCell<SessionPhase>>,
    token: Rc<RefCell<Option<String>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            phase: Rc::new(RefCell::new(SessionPhase::Absent)),
            token: Rc::new(RefCell::new(None)),
        }
    }

    /// Restaurar la sesión desde sessionStorage si hay una marca cacheada
    pub fn restore(&self) {
        if let Some(token) = load_from_session(ADMIN_TOKEN_KEY) {
            if decode_admin_token(&token).is_some() {
                *self.token.borrow_mut() = Some(token);
                *self.phase.borrow_mut() = SessionPhase::Authenticated;
                log::info!("💾 [SESSION] Marca de credenciales restaurada desde sessionStorage");
            } else {
                log::warn!("⚠️ [SESSION] Marca cacheada con formato inválido, ignorando");
                let _ = remove_from_session(ADMIN_TOKEN_KEY);
            }
        }
    }

    /// Autenticar: fabrica la marca y la cachea. No hay llamada al servidor.
    pub fn authenticate(&self, password: &str, timestamp_ms: u64) {
        let token = encode_admin_token(password, timestamp_ms);
        if let Err(e) = save_to_session(ADMIN_TOKEN_KEY, &token) {
            log::warn!("⚠️ [SESSION] {}", e);
        }
        *self.token.borrow_mut() = Some(token);
        *self.phase.borrow_mut() = SessionPhase::Authenticated;
        log::info!("🔐 [SESSION] Sesión de administrador establecida");
    }

    /// Refrescar la marca tras un cambio de contraseña exitoso
    pub fn refresh_password(&self, new_password: &str, timestamp_ms: u64) {
        self.authenticate(new_password, timestamp_ms);
        log::info!("🔄 [SESSION] Marca refrescada con la nueva contraseña");
    }

    /// Limpiar la sesión tras un reset forzado exitoso
    pub fn clear(&self) {
        if let Err(e) = remove_from_session(ADMIN_TOKEN_KEY) {
            log::warn!("⚠️ [SESSION] {}", e);
        }
        *self.token.borrow_mut() = None;
        *self.phase.borrow_mut() = SessionPhase::Cleared;
        log::info!("🧹 [SESSION] Sesión limpiada");
    }

    pub fn is_authenticated(&self) -> bool {
        *self.phase.borrow() == SessionPhase::Authenticated
    }

    /// Contraseña recuperada de la marca cacheada
    pub fn password(&self) -> Option<String> {
        self.token
            .borrow()
            .as_ref()
            .and_then(|token| decode_admin_token(token))
            .map(|(password, _)| password)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_token_round_trip() {
        let token = encode_admin_token("abcd1234", 1700000000000);
        let (password, ts) = decode_admin_token(&token).unwrap();
        assert_eq!(password, "abcd1234");
        assert_eq!(ts, 1700000000000);
    }

    #[test]
    fn test_admin_token_password_with_colons() {
        let token = encode_admin_token("a:b:c:1234", 42);
        let (password, ts) = decode_admin_token(&token).unwrap();
        assert_eq!(password, "a:b:c:1234");
        assert_eq!(ts, 42);
    }

    #[test]
    fn test_admin_token_rejects_garbage() {
        assert!(decode_admin_token("no-es-base64!!!").is_none());
        // base64 válido pero sin separador
        assert!(decode_admin_token(&BASE64.encode("sintimestamp")).is_none());
        // timestamp no numérico
        assert!(decode_admin_token(&BASE64.encode("clave:ayer")).is_none());
    }

    #[test]
    fn test_refreshed_token_encodes_new_password() {
        // Tras un cambio de contraseña exitoso la marca debe codificar la nueva
        let refreshed = encode_admin_token("abcd1234", 1);
        let (password, _) = decode_admin_token(&refreshed).unwrap();
        assert_eq!(password, "abcd1234");
        assert_ne!(decode_admin_token(&encode_admin_token("oldpass1", 1)).unwrap().0, password);
    }
}

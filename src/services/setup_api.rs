// ============================================================================
// SETUP API - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo habla con el servlet /webjwtgen/setup.
// Cada operación se distingue por verbo HTTP y/o parámetro `action`.
// ============================================================================

use gloo_net::http::{Request, Response};

use crate::models::{ActionResponse, BackupResponse, CurrentPasswordResponse, SetupStatus};
use crate::utils::{BACKEND_URL, FORCE_RESET_CONFIRM_CODE, SETUP_PATH};

/// Cliente del servlet de setup - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct SetupApi {
    base_url: String,
}

impl SetupApi {
    pub fn new() -> Self {
        Self {
            base_url: format!("{}{}", BACKEND_URL, SETUP_PATH),
        }
    }

    /// Consultar el estado de inicialización (siempre fresco, nunca cacheado)
    pub async fn fetch_status(&self) -> Result<SetupStatus, String> {
        let response = Request::get(&self.base_url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<SetupStatus>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Recuperar la contraseña actual del keystore (para backup sin re-entrada)
    pub async fn fetch_current_password(&self) -> Result<CurrentPasswordResponse, String> {
        let response = Request::get(&self.base_url)
            .query([("action", "currentPassword")])
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<CurrentPasswordResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Pedir el backup del keystore; el binario llega como base64 en `data`
    pub async fn backup_keystore(&self, password: &str) -> Result<BackupResponse, String> {
        log::info!("📦 [API] Solicitando backup del keystore");

        let response = Request::get(&self.base_url)
            .query([("action", "backup"), ("password", password)])
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<BackupResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Restaurar el keystore: el archivo viaja como base64 dentro del JSON
    pub async fn restore_keystore(
        &self,
        password: &str,
        base64_data: &str,
    ) -> Result<ActionResponse, String> {
        log::info!("📤 [API] Enviando restauración del keystore ({} chars base64)", base64_data.len());

        let payload = RestorePayload {
            data: base64_data.to_string(),
        };

        let response = Request::post(&self.base_url)
            .query([("action", "restore"), ("password", password)])
            .json(&payload)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<ActionResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Cambiar la contraseña del administrador (cuerpo form-encoded)
    pub async fn change_password(
        &self,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> Result<ActionResponse, String> {
        log::info!("🔑 [API] Solicitando cambio de contraseña");

        let response = Request::put(&self.base_url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(change_password_body(current, new, confirm))
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<ActionResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Reset forzado del sistema. El servidor re-valida contraseña y código
    /// de confirmación por su cuenta; este cliente no es la última línea.
    pub async fn force_reset(&self, password: &str) -> Result<ActionResponse, String> {
        log::warn!("🗑️ [API] Solicitando reset forzado del sistema");

        let response = Request::delete(&self.base_url)
            .query([("password", password), ("confirm", FORCE_RESET_CONFIRM_CODE)])
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<ActionResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

impl Default for SetupApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Cuerpo form-encoded del cambio de contraseña
pub(crate) fn change_password_body(current: &str, new: &str, confirm: &str) -> String {
    format!(
        "currentPassword={}&newPassword={}&confirmNewPassword={}",
        urlencoding::encode(current),
        urlencoding::encode(new),
        urlencoding::encode(confirm)
    )
}

/// Mensaje de error de una respuesta no-2xx: campo `error` del cuerpo si
/// existe, si no el estado HTTP
async fn error_from_response(response: Response) -> String {
    let status = response.status();
    let status_text = response.status_text();
    match response.json::<ActionResponse>().await {
        Ok(body) => body
            .error
            .unwrap_or_else(|| format!("HTTP {}: {}", status, status_text)),
        Err(_) => format!("HTTP {}: {}", status, status_text),
    }
}

#[derive(serde::Serialize)]
struct RestorePayload {
    data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_password_body_field_order() {
        let body = change_password_body("oldpass1", "abcd1234", "abcd1234");
        assert_eq!(
            body,
            "currentPassword=oldpass1&newPassword=abcd1234&confirmNewPassword=abcd1234"
        );
    }

    #[test]
    fn test_change_password_body_escapes_reserved_chars() {
        let body = change_password_body("p&ss=w:rd", "nueva con espacios", "nueva con espacios");
        assert!(!body.contains("p&ss"));
        assert!(body.contains("currentPassword=p%26ss%3Dw%3Ard"));
        assert!(body.contains("newPassword=nueva%20con%20espacios"));
    }
}

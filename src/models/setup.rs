// ============================================================================
// MODELOS DE SETUP - Payloads del servlet /webjwtgen/setup
// ============================================================================

use serde::Deserialize;

/// Estado de inicialización del sistema (se consulta fresco en cada render)
#[derive(Deserialize, Clone, Debug)]
pub struct SetupStatus {
    #[serde(rename = "setupCompleted")]
    pub setup_completed: bool,
}

/// Respuesta genérica de las operaciones mutadoras de setup
#[derive(Deserialize, Clone, Debug)]
pub struct ActionResponse {
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// Respuesta de `action=currentPassword`
#[derive(Deserialize, Clone, Debug)]
pub struct CurrentPasswordResponse {
    pub success: bool,
    pub password: Option<String>,
    pub error: Option<String>,
}

/// Respuesta de `action=backup`: el keystore viaja como base64 dentro del JSON
#[derive(Deserialize, Clone, Debug)]
pub struct BackupResponse {
    pub success: bool,
    pub data: Option<String>,
    pub filename: Option<String>,
    pub error: Option<String>,
}

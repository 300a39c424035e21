/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Por defecto: cadena vacía (mismo origen, el servlet vive bajo /webjwtgen)
/// - Desarrollo contra otro host: via BACKEND_URL env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// Ruta del servlet de configuración (setup)
pub const SETUP_PATH: &str = "/webjwtgen/setup";

/// Ruta del servlet de generación de tokens
pub const GENERATE_PATH: &str = "/webjwtgen/generate";

/// Clave de sessionStorage donde se cachea la marca de credenciales
pub const ADMIN_TOKEN_KEY: &str = "adminToken";

/// Código de confirmación que exige el servidor para el reset forzado
pub const FORCE_RESET_CONFIRM_CODE: &str = "FORCE_RESET_CONFIRMED";

/// Nombre de descarga cuando el servidor no manda `filename`
pub const DEFAULT_BACKUP_FILENAME: &str = "keystore.jks";

/// Única extensión aceptada al restaurar un keystore
pub const KEYSTORE_EXTENSION: &str = ".jks";

/// Longitud mínima de la contraseña de administrador
pub const MIN_PASSWORD_LEN: usize = 8;

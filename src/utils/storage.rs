use web_sys::{window, Storage};

// La marca de credenciales vive en sessionStorage (ámbito de pestaña),
// no en localStorage: muere al cerrar el navegador.

pub fn get_session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

pub fn save_to_session(key: &str, value: &str) -> Result<(), String> {
    let storage = get_session_storage().ok_or("No se pudo acceder a sessionStorage")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Error guardando en sessionStorage".to_string())?;
    Ok(())
}

pub fn load_from_session(key: &str) -> Option<String> {
    get_session_storage()?.get_item(key).ok()?
}

pub fn remove_from_session(key: &str) -> Result<(), String> {
    let storage = get_session_storage().ok_or("No se pudo acceder a sessionStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error eliminando de sessionStorage".to_string())?;
    Ok(())
}

// ============================================================================
// KEYSTORE TRANSFER - Conducto binario-seguro via base64
// ============================================================================
// El transporte (cuerpos HTTP a través de un framework de plantillas sin
// multipart) no es binario-seguro, así que el keystore viaja siempre como
// texto base64 (~33% de sobrecoste) y se rematerializa byte a byte.
// ============================================================================

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::utils::{DEFAULT_BACKUP_FILENAME, KEYSTORE_EXTENSION};

/// Codificar los bytes del keystore para el cuerpo JSON de restauración
pub fn encode_keystore(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decodificar el campo base64 de la respuesta de backup
pub fn decode_keystore(data: &str) -> Result<Vec<u8>, String> {
    BASE64
        .decode(data)
        .map_err(|e| format!("Base64 inválido: {}", e))
}

/// Chequeo de extensión del lado del cliente. No valida el contenido:
/// el servidor es quien decide si el keystore es utilizable.
pub fn is_keystore_filename(name: &str) -> bool {
    name.ends_with(KEYSTORE_EXTENSION)
}

/// Nombre del archivo de descarga: el que manda el servidor o el por defecto
pub fn backup_filename(server_filename: Option<&str>) -> String {
    match server_filename {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_BACKUP_FILENAME.to_string(),
    }
}

/// Leer el archivo subido hasta el final. Awaitable: devuelve los bytes
/// completos o un error de lectura, sin callbacks.
pub async fn read_keystore_file(file: web_sys::File) -> Result<Vec<u8>, String> {
    gloo_file::futures::read_as_bytes(&gloo_file::File::from(file))
        .await
        .map_err(|e| format!("Error leyendo el archivo: {}", e))
}

/// Materializar los bytes como Blob y disparar la descarga del navegador
pub fn download_keystore(bytes: &[u8], filename: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let options = BlobPropertyBag::new();
    options.set_type("application/octet-stream");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("No body"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor)?;
    anchor.click();

    Url::revoke_object_url(&url)?;
    body.remove_child(&anchor)?;

    log::info!("💾 [TRANSFER] Descarga disparada: {} ({} bytes)", filename, bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_round_trip_is_identity() {
        // Cubre ambos sentidos del conducto: backup (decode) y restore (encode)
        let all_bytes: Vec<u8> = (0u8..=255).collect();
        assert_eq!(decode_keystore(&encode_keystore(&all_bytes)).unwrap(), all_bytes);

        let empty: &[u8] = &[];
        assert_eq!(decode_keystore(&encode_keystore(empty)).unwrap(), empty);
    }

    #[test]
    fn test_backup_data_decodes_to_exact_bytes() {
        // "QUJD" es base64 de los bytes ASCII A B C
        assert_eq!(decode_keystore("QUJD").unwrap(), b"ABC");
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        assert!(decode_keystore("esto no es base64 %%%").is_err());
    }

    #[test]
    fn test_keystore_extension_check() {
        assert!(is_keystore_filename("keystore.jks"));
        assert!(is_keystore_filename("backup-2026-08-06.jks"));
        assert!(!is_keystore_filename("keystore.p12"));
        assert!(!is_keystore_filename("keystore.jks.txt"));
        assert!(!is_keystore_filename("jks"));
    }

    #[test]
    fn test_backup_filename_falls_back_to_default() {
        assert_eq!(backup_filename(Some("keystore-2026-08-06.jks")), "keystore-2026-08-06.jks");
        assert_eq!(backup_filename(Some("")), DEFAULT_BACKUP_FILENAME);
        assert_eq!(backup_filename(None), DEFAULT_BACKUP_FILENAME);
    }
}

use std::{env, fs};

// Propaga BACKEND_URL (y el resto de claves del .env) como variables de
// compilación, para poder apuntar la consola a un Tomcat remoto en desarrollo.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed=BACKEND_URL");

    let Ok(contents) = fs::read_to_string(".env") else {
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            // Las variables ya definidas en el entorno tienen prioridad
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value.trim());
            }
        }
    }
}

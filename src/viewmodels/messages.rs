// ============================================================================
// MESSAGE SINK - Interfaz de actualización de un área de mensajes
// ============================================================================
// Cada operación renderiza su resultado en un área propia. Los viewmodels
// hablan con esta interfaz; la implementación DOM vive en las vistas y los
// tests usan una implementación que captura.
// ============================================================================

/// Área de mensajes de una operación
pub trait MessageSink {
    fn success(&self, text: &str);
    fn error(&self, text: &str);
    fn info(&self, text: &str);
    fn clear(&self);
}

#[cfg(test)]
pub(crate) mod capture {
    use super::MessageSink;
    use std::cell::RefCell;

    /// Implementación de test: acumula (tipo, texto) en memoria
    #[derive(Default)]
    pub struct CaptureSink {
        pub entries: RefCell<Vec<(&'static str, String)>>,
    }

    impl CaptureSink {
        pub fn last(&self) -> Option<(&'static str, String)> {
            self.entries.borrow().last().cloned()
        }
    }

    impl MessageSink for CaptureSink {
        fn success(&self, text: &str) {
            self.entries.borrow_mut().push(("success", text.to_string()));
        }
        fn error(&self, text: &str) {
            self.entries.borrow_mut().push(("error", text.to_string()));
        }
        fn info(&self, text: &str) {
            self.entries.borrow_mut().push(("info", text.to_string()));
        }
        fn clear(&self) {
            self.entries.borrow_mut().clear();
        }
    }
}

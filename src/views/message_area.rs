// ============================================================================
// MESSAGE AREA - Implementación DOM del MessageSink
// ============================================================================

use crate::dom::{get_element_by_id, set_class_name, set_text_content};
use crate::viewmodels::MessageSink;

/// Área de mensajes respaldada por un elemento fijo del DOM
pub struct DomMessageSink {
    element_id: String,
}

impl DomMessageSink {
    pub fn new(element_id: &str) -> Self {
        Self {
            element_id: element_id.to_string(),
        }
    }

    fn render(&self, text: &str, kind: &str) {
        match get_element_by_id(&self.element_id) {
            Some(el) => {
                set_text_content(&el, text);
                set_class_name(&el, &format!("message {}", kind));
            }
            None => log::warn!("⚠️ [VIEW] Área de mensajes #{} no encontrada", self.element_id),
        }
    }
}

impl MessageSink for DomMessageSink {
    fn success(&self, text: &str) {
        self.render(text, "success");
    }

    fn error(&self, text: &str) {
        self.render(text, "error");
    }

    fn info(&self, text: &str) {
        self.render(text, "info");
    }

    fn clear(&self) {
        if let Some(el) = get_element_by_id(&self.element_id) {
            set_text_content(&el, "");
            set_class_name(&el, "message");
        }
    }
}

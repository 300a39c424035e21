// ============================================================================
// APP STATE - Estado global de la consola
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::SessionState;

/// Tres confirmaciones independientes que habilitan el botón de reset forzado.
/// Se reinician a false cada vez que se abre el diálogo de confirmación.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetConfirmations {
    /// "Entiendo que se borrarán todas las claves"
    pub delete_keys: bool,
    /// "Entiendo que la operación es irreversible"
    pub irreversible: bool,
    /// "Tengo un backup del keystore"
    pub have_backup: bool,
}

impl ResetConfirmations {
    /// El botón de confirmación se habilita si y solo si las tres están marcadas
    pub fn all_confirmed(&self) -> bool {
        self.delete_keys && self.irreversible && self.have_backup
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,

    // Estado del ritual de reset forzado (dos diálogos encadenados)
    pub show_reset_password_dialog: Rc<RefCell<bool>>,
    pub show_reset_confirm_dialog: Rc<RefCell<bool>>,
    pub reset_password_entry: Rc<RefCell<String>>,
    pub reset_confirmations: Rc<RefCell<ResetConfirmations>>,

    // Guardas informales: deshabilitan el botón mientras la llamada está en vuelo
    pub reset_in_flight: Rc<RefCell<bool>>,
    pub restore_in_flight: Rc<RefCell<bool>>,

    // El reloj del panel se arranca una sola vez y nunca se cancela
    pub clock_started: Rc<RefCell<bool>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            show_reset_password_dialog: Rc::new(RefCell::new(false)),
            show_reset_confirm_dialog: Rc::new(RefCell::new(false)),
            reset_password_entry: Rc::new(RefCell::new(String::new())),
            reset_confirmations: Rc::new(RefCell::new(ResetConfirmations::default())),
            reset_in_flight: Rc::new(RefCell::new(false)),
            restore_in_flight: Rc::new(RefCell::new(false)),
            clock_started: Rc::new(RefCell::new(false)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_button_enabled_iff_all_three_checked() {
        let mut c = ResetConfirmations::default();
        assert!(!c.all_confirmed());

        // Cada combinación parcial deja el botón deshabilitado
        for mask in 0..7u8 {
            c.delete_keys = mask & 1 != 0;
            c.irreversible = mask & 2 != 0;
            c.have_backup = mask & 4 != 0;
            assert!(!c.all_confirmed(), "mask {:03b} no debe habilitar", mask);
        }

        c.delete_keys = true;
        c.irreversible = true;
        c.have_backup = true;
        assert!(c.all_confirmed());
    }

    #[test]
    fn test_confirmations_reset_to_all_false_on_dialog_open() {
        let mut c = ResetConfirmations {
            delete_keys: true,
            irreversible: false,
            have_backup: true,
        };
        c.reset();
        assert_eq!(c, ResetConfirmations::default());
        assert!(!c.all_confirmed());
    }
}

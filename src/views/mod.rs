pub mod admin_panel;
pub mod app;
pub mod backup_section;
pub mod login;
pub mod message_area;
pub mod password_section;
pub mod reset_dialog;

pub use admin_panel::render_admin_panel;
pub use app::render_app;
pub use backup_section::render_backup_section;
pub use login::render_login;
pub use message_area::DomMessageSink;
pub use password_section::render_password_section;
pub use reset_dialog::{render_reset_confirm_dialog, render_reset_password_dialog};

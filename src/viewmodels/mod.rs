pub mod backup_viewmodel;
pub mod login_viewmodel;
pub mod messages;
pub mod password_viewmodel;
pub mod reset_viewmodel;

pub use backup_viewmodel::BackupViewModel;
pub use login_viewmodel::LoginViewModel;
pub use messages::MessageSink;
pub use password_viewmodel::PasswordViewModel;
pub use reset_viewmodel::ResetViewModel;

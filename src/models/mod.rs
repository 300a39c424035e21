pub mod setup;

pub use setup::{ActionResponse, BackupResponse, CurrentPasswordResponse, SetupStatus};

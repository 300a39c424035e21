pub mod keystore_transfer;
pub mod setup_api;

pub use keystore_transfer::*;
pub use setup_api::*;

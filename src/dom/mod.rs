// ============================================================================
// DOM MODULE - Helpers de bajo nivel sobre web_sys
// ============================================================================

pub mod builder;
pub mod element;
pub mod events;

pub use builder::ElementBuilder;
pub use element::*;
pub use events::*;

pub mod config;
pub mod conversion;
pub mod definition;

pub use config::*;
pub use conversion::*;
pub use definition::*;

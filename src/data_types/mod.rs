pub mod config;
pub mod datasource;
pub mod range;

pub use config::*;
pub use datasource::*;
pub use range::*;

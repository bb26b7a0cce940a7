pub mod access;
pub mod config;
pub mod department;
pub mod error;
pub mod models;
pub mod navigation;
pub mod patient;
pub mod requests;

pub use access::*;
pub use config::*;
pub use department::*;
pub use error::*;
pub use models::*;
pub use navigation::*;
pub use patient::*;
pub use requests::*;

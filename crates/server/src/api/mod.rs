mod session;
pub use session::*;

mod portal;
pub use portal::*;

pub mod badge;
pub mod button;
pub mod card;
pub mod dialog;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod skeleton;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use skeleton::*;
pub use toast::*;

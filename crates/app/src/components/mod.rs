pub mod chat;
pub mod clock;
pub mod nav;
pub mod notifications;

pub use chat::ChatWidget;
pub use clock::HeaderClock;
pub use nav::{AccessMessage, NavDropdown};
pub use notifications::NotificationPanel;

pub mod message;
pub mod tabs;

pub use message::Message;
pub use tabs::TabController;

pub mod item;
pub mod link;
pub mod session;

pub use item::{AnnotatedItem, PriorityItem};
pub use link::ResourceLink;
pub use session::WorkSession;

pub mod fork_service;
pub mod layout_service;
pub mod session_service;

pub use fork_service::ForkService;
pub use layout_service::{LayoutService, TreeSnapshot};
pub use session_service::SessionService;

pub mod fork;
pub mod layout;
pub mod message;
pub mod scrolly;
pub mod session;

pub use fork::*;
pub use layout::*;
pub use message::*;
pub use scrolly::*;
pub use session::*;

pub mod chat_handlers;
pub mod events_handlers;
pub mod jobs_handlers;
pub mod system_handlers;

pub use chat_handlers::*;
pub use events_handlers::*;
pub use jobs_handlers::*;
pub use system_handlers::*;

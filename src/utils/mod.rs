pub mod collection_ext;
pub mod scheduled_executor;
pub mod string_ext;

pub use collection_ext::unique_ordered;
pub use scheduled_executor::{ScheduledExecutor, ScheduledTask};
pub use string_ext::StringExt;

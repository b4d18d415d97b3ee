/// Colorized console logging with a process-wide debug counter.
pub mod logger;
/// Paginated-embed building and button-driven navigation sessions.
pub mod pagination;

pub use logger::{ConsoleValue, Logger};
pub use pagination::PaginationBuilder;

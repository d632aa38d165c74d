pub mod classify;
pub mod dispatch;
pub mod feedback;
pub mod process;
pub mod report;
pub mod schema;
pub mod shared;

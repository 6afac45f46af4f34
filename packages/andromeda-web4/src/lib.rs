pub mod context;
pub mod error;
pub mod gateway;
pub mod json;

pub use context::ExecuteContext;

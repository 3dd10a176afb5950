pub mod context;
pub mod result;

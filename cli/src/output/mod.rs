pub mod json;
pub mod text;
pub mod xlsx;

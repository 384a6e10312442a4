pub mod info;
pub mod optimize;

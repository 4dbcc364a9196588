pub mod ensure;
pub mod list;

pub mod structs;
pub mod upload_flow;

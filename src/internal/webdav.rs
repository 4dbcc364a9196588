pub mod client;
pub mod enums;
pub mod error;
pub mod raw_xml;

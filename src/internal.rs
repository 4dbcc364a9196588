pub mod auth;
pub mod entrance;
pub mod folders;
pub mod orchestrator;
pub mod path;
pub mod resource;
pub mod share;
pub mod transfer;
pub mod webdav;

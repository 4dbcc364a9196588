pub mod ocs;

pub mod build_path;

pub mod common;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod params;

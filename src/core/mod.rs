pub mod filter;
pub mod render;
pub mod walk;

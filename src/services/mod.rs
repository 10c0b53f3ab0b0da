pub mod highlight;
pub mod jwt;
pub mod render;

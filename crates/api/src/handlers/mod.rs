pub mod bikes;
pub mod brands;

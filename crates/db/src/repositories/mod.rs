//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` as the first argument.

pub mod bike_repo;
pub mod brand_repo;

pub use bike_repo::BikeRepo;
pub use brand_repo::BrandRepo;

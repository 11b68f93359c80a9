//! This module contains the run-length models of the two walk generators.

pub mod bucket;
pub mod gaussian;
pub mod geometric;
pub mod model;

pub use bucket::BucketTable;
pub use gaussian::GaussianModel;
pub use geometric::GeometricModel;
pub use model::LengthModel;

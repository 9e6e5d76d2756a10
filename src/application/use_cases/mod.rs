pub mod load;
pub mod transform;
pub mod visualize;

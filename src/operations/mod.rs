pub mod creation;
pub mod transform;

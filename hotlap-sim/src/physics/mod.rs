pub mod bounding_box;
pub mod collision;
pub mod constants;
pub mod vehicle;

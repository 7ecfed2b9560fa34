pub mod lists;
pub mod speed;

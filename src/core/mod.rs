pub mod evolution;
pub mod locations;
pub mod moves;
pub mod page;
pub mod rarity;
pub mod species;
pub mod utils;

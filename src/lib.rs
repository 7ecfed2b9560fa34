pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod tools;

pub use config::Config;
pub use core::{
    evolution::{BranchKind, EvolutionChain, EvolutionHandler, EvolutionStage},
    locations::{LocationDataGenerator, MergedLocations},
    moves::MoveListGenerator,
    page::{GameData, WikiPage},
    rarity::{BiomeKind, Rarity, SecondaryInfo},
    species::PokemonBoxGenerator,
};
pub use data::{
    encounters::{EncounterFile, Zone, ZonePolicy},
    evolutions::{EvolutionLink, EvolutionMethod},
    lookup::{Lookup, LookupTables},
    records::{Record, RecordFile},
    tm::{Teachables, TmFile},
};
pub use error::{Result, WikiError};

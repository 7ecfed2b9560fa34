//! Key/value lookup tables that translate the game's internal codes into
//! display data.
//!
//! The tables are plain JSON objects kept in a references directory, one
//! `<table>.json` per table. They are loaded once per run and never mutated.
//! Generators receive them as `&dyn Lookup` so tests can hand in fixtures.

use crate::data::evolutions::EvolutionLink;
use crate::error::{Result, WikiError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInfo {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CanHaveStab")]
    pub can_have_stab: bool,
    #[serde(rename = "Type")]
    pub move_type: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonInfo {
    #[serde(rename = "InternalName")]
    pub internal_name: String,
    #[serde(rename = "DisplayName")]
    pub display_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    #[serde(rename = "Species")]
    pub species: String,
    #[serde(rename = "Dex Entry")]
    pub dex_entry: String,
}

/// Parsed form of a `tm_info` value (`"NN,yes,Type"`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TmInfo {
    pub number: String,
    pub can_have_stab: bool,
    pub move_type: String,
}

pub trait Lookup {
    fn gender_code(&self, gender: &str) -> Result<&str>;
    fn growth_rate(&self, rate: &str) -> Result<&str>;
    /// `name` is the title-cased move name from tm.txt.
    fn tm_info(&self, name: &str) -> Result<TmInfo>;
    /// `name` is the title-cased move name from pokemon.txt or tm.txt.
    fn move_info(&self, name: &str) -> Result<&MoveInfo>;
    fn wild_item(&self, item: &str) -> Result<&str>;
    fn pokemon_info(&self, dex: &str) -> Result<&PokemonInfo>;
    fn location(&self, zone: &str) -> Result<&str>;
    fn ability(&self, ability: &str) -> Result<&str>;
    /// Most abilities grant no immunity, so a miss is not an error.
    fn ability_immunity(&self, ability: &str) -> Option<&str>;
    /// Location name to encounter kind (Gift, Trade, Battle, ...).
    fn static_encounters(&self, internal_name: &str) -> Option<&IndexMap<String, String>>;
    fn evolution(&self, internal_name: &str) -> Result<&EvolutionLink>;
    fn species_entry(&self, internal_number: &str) -> Result<&SpeciesEntry>;
    /// Preferred display order of locations; empty keeps file order.
    fn location_order(&self) -> &[String];
    /// Every dex number with its names, in table order.
    fn pokedex(&self) -> Vec<(&str, &PokemonInfo)>;
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupTables {
    gender_codes: HashMap<String, String>,
    growth_rate: HashMap<String, String>,
    tm_info: HashMap<String, String>,
    move_info: HashMap<String, MoveInfo>,
    wild_item_info: HashMap<String, String>,
    pokemon_info: IndexMap<String, PokemonInfo>,
    location_info: HashMap<String, String>,
    ability_info: HashMap<String, String>,
    ability_immunities: HashMap<String, String>,
    static_encounters: HashMap<String, IndexMap<String, String>>,
    evolution_info: HashMap<String, EvolutionLink>,
    species_and_dex_entry: HashMap<String, SpeciesEntry>,
    location_order: Vec<String>,
}

const REQUIRED_TABLES: &[&str] = &[
    "gender_codes",
    "growth_rate",
    "tm_info",
    "move_info",
    "wild_item_info",
    "pokemon_info",
    "location_info",
    "ability_info",
    "evolution_info",
    "species_and_dex_entry",
];

const OPTIONAL_TABLES: &[&str] = &["ability_immunities", "static_encounters", "location_order"];

impl LookupTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the tables from one JSON object keyed by table name.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| WikiError::json("lookup tables", e))
    }

    pub fn load_from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| WikiError::json("lookup tables", e))
    }

    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut tables = Map::new();
        for name in REQUIRED_TABLES.iter().chain(OPTIONAL_TABLES) {
            let path = dir.join(format!("{name}.json"));
            if !path.exists() && OPTIONAL_TABLES.contains(name) {
                tracing::debug!(table = name, "optional lookup table not present");
                continue;
            }
            let content = fs::read_to_string(&path).map_err(|e| WikiError::io(&path, e))?;
            let value: Value = serde_json::from_str(&content)
                .map_err(|e| WikiError::json(path.display().to_string(), e))?;
            tables.insert((*name).to_string(), value);
        }
        let loaded = Self::from_value(Value::Object(tables))?;
        tracing::info!(
            pokemon = loaded.pokemon_info.len(),
            moves = loaded.move_info.len(),
            locations = loaded.location_info.len(),
            "loaded lookup tables from {}",
            dir.display()
        );
        Ok(loaded)
    }
}

fn resolve<'a>(
    table: &'static str,
    map: &'a HashMap<String, String>,
    key: &str,
) -> Result<&'a str> {
    map.get(key)
        .map(String::as_str)
        .ok_or_else(|| WikiError::lookup(table, key))
}

impl Lookup for LookupTables {
    fn gender_code(&self, gender: &str) -> Result<&str> {
        resolve("gender_codes", &self.gender_codes, gender)
    }

    fn growth_rate(&self, rate: &str) -> Result<&str> {
        resolve("growth_rate", &self.growth_rate, rate)
    }

    fn tm_info(&self, name: &str) -> Result<TmInfo> {
        let raw = resolve("tm_info", &self.tm_info, name)?;
        let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [number, stab, move_type] => Ok(TmInfo {
                number: (*number).to_string(),
                can_have_stab: *stab == "yes",
                move_type: (*move_type).to_string(),
            }),
            _ => Err(WikiError::InvalidField {
                record: "tm_info".to_string(),
                field: name.to_string(),
                value: raw.to_string(),
            }),
        }
    }

    fn move_info(&self, name: &str) -> Result<&MoveInfo> {
        self.move_info
            .get(name)
            .ok_or_else(|| WikiError::lookup("move_info", name))
    }

    fn wild_item(&self, item: &str) -> Result<&str> {
        resolve("wild_item_info", &self.wild_item_info, item)
    }

    fn pokemon_info(&self, dex: &str) -> Result<&PokemonInfo> {
        self.pokemon_info
            .get(dex)
            .ok_or_else(|| WikiError::lookup("pokemon_info", dex))
    }

    fn location(&self, zone: &str) -> Result<&str> {
        resolve("location_info", &self.location_info, zone)
    }

    fn ability(&self, ability: &str) -> Result<&str> {
        resolve("ability_info", &self.ability_info, ability)
    }

    fn ability_immunity(&self, ability: &str) -> Option<&str> {
        self.ability_immunities.get(ability).map(String::as_str)
    }

    fn static_encounters(&self, internal_name: &str) -> Option<&IndexMap<String, String>> {
        self.static_encounters
            .get(internal_name)
            .filter(|locations| !locations.is_empty())
    }

    fn evolution(&self, internal_name: &str) -> Result<&EvolutionLink> {
        self.evolution_info
            .get(internal_name)
            .ok_or_else(|| WikiError::lookup("evolution_info", internal_name))
    }

    fn species_entry(&self, internal_number: &str) -> Result<&SpeciesEntry> {
        self.species_and_dex_entry
            .get(internal_number)
            .ok_or_else(|| WikiError::lookup("species_and_dex_entry", internal_number))
    }

    fn location_order(&self) -> &[String] {
        &self.location_order
    }

    fn pokedex(&self) -> Vec<(&str, &PokemonInfo)> {
        self.pokemon_info
            .iter()
            .map(|(dex, info)| (dex.as_str(), info))
            .collect()
    }
}

//! Boxes built straight from a creature's own record: navigation, infobox,
//! opening paragraph, Pokédex entry, held items, stats, sprites and type
//! effectiveness.

use crate::core::utils::image_name;
use crate::data::dex::DexNumber;
use crate::data::lookup::Lookup;
use crate::data::records::Record;
use crate::data::type_chart::TypeChart;
use crate::error::Result;

/// EV yield template keys in `EffortPoints` order (HP/ATK/DEF/SPE/SPA/SPD).
const EV_KEYS: [&str; 6] = ["hp", "at", "de", "sp", "sa", "sd"];
/// Stat names in `BaseStats` order.
pub const STAT_NAMES: [&str; 6] = ["HP", "Attack", "Defense", "Speed", "SpAtk", "SpDef"];
const ITEM_SLOTS: [&str; 3] = ["Common", "Uncommon", "Rare"];

const INCHES_PER_METRE: f64 = 39.37008;
const POUNDS_PER_KG: f64 = 2.20462262;

pub struct PokemonBoxGenerator<'a> {
    record: &'a Record,
    lookup: &'a dyn Lookup,
    dex: DexNumber,
    name: String,
    types: Vec<String>,
}

impl<'a> PokemonBoxGenerator<'a> {
    pub fn new(record: &'a Record, lookup: &'a dyn Lookup) -> Result<Self> {
        let dex = DexNumber::from_record(record)?;
        let name = lookup.pokemon_info(&dex.to_string())?.display_name.clone();
        Ok(Self {
            record,
            lookup,
            dex,
            name,
            types: record.types()?,
        })
    }

    pub fn display_name(&self) -> &str {
        &self.name
    }

    pub fn dex(&self) -> DexNumber {
        self.dex
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    fn first_type(&self) -> &str {
        &self.types[0]
    }

    fn second_type(&self) -> &str {
        self.types.get(1).unwrap_or(&self.types[0])
    }

    /// Opens a box with `|<key> = Type1` and `|type2` for dual types.
    fn open(&self, template: &str, first_key: &str) -> Vec<String> {
        let mut lines = vec![
            format!("{{{{{template}"),
            format!("|{first_key} = {}", self.first_type()),
        ];
        if let Some(second) = self.types.get(1) {
            lines.push(format!("|type2 = {second}"));
        }
        lines
    }

    pub fn create_header_footer(&self) -> Result<Vec<String>> {
        let mut head_foot = self.open("PokemonPrevNextHead", "type");
        let (prev, next) = (self.dex.prev(), self.dex.next());
        head_foot.push(format!(
            "|prev = {}",
            self.lookup.pokemon_info(&prev.to_string())?.display_name
        ));
        head_foot.push(format!("|prevnum = {prev}"));
        head_foot.push(format!(
            "|next = {}",
            self.lookup.pokemon_info(&next.to_string())?.display_name
        ));
        head_foot.push(format!("|nextnum = {next}"));
        head_foot.push("}}".to_string());
        Ok(head_foot)
    }

    pub fn create_infobox(&self) -> Result<Vec<String>> {
        let record = self.record;
        let lookup = self.lookup;
        let mut infobox = self.open("Pokemon Infobox", "type1");

        infobox.push(format!("|name = {}", self.name));
        let species = lookup.species_entry(record.require("InternalNumber")?)?;
        infobox.push(format!("|species = {}", species.species));
        infobox.push(format!("|ndex = {}", self.dex));
        infobox.push(format!("|image = {}.png", image_name(&self.name)));

        let abilities = record.list("Abilities")?;
        for (idx, ability) in abilities.iter().take(2).enumerate() {
            infobox.push(format!("|ability{} = {}", idx + 1, lookup.ability(ability)?));
        }
        if let Some(hidden) = record.get("HiddenAbility") {
            infobox.push(format!("|hiddenability = {}", lookup.ability(hidden)?));
        }

        infobox.push(format!(
            "|gendercode = {}",
            lookup.gender_code(record.require("GenderRate")?)?
        ));
        infobox.push(format!("|catchrate = {}", record.require("Rareness")?));

        let egg_groups = record.list("Compatibility")?;
        for (idx, group) in egg_groups.iter().take(2).enumerate() {
            infobox.push(format!("|egggroup{} = {group}", idx + 1));
        }
        infobox.push(format!("|eggsteps = {}", record.require("StepsToHatch")?));

        let height_m = self.tenths(record, "Height")?;
        let weight_kg = self.tenths(record, "Weight")?;
        let (feet, inches) = feet_inches(height_m);
        infobox.push(format!("|height-m = {}", decimal(height_m)));
        infobox.push(format!("|weight-kg = {weight_kg}"));
        infobox.push(format!("|height-ftin = {feet}'{inches:02}\""));
        infobox.push(format!(
            "|weight-lbs = {}",
            (weight_kg * POUNDS_PER_KG * 10.0).round() / 10.0
        ));

        infobox.push(format!("|expyield = {}", record.require("BaseEXP")?));
        infobox.push(format!(
            "|lvrate = {}",
            lookup.growth_rate(record.require("GrowthRate")?)?
        ));
        infobox.push(format!("|color = {}", record.require("Color")?));
        infobox.push(format!("|friendship = {}", record.require("Happiness")?));

        for (key, ev) in EV_KEYS.iter().zip(record.list("EffortPoints")?) {
            if ev != "0" {
                infobox.push(format!("|ev{key} = {ev}"));
            }
        }

        infobox.push("}}".to_string());
        Ok(infobox)
    }

    /// Height and weight are stored as integers in tenths of a unit.
    fn tenths(&self, record: &Record, field: &str) -> Result<f64> {
        let raw: u32 = record
            .require(field)?
            .parse()
            .map_err(|_| record.invalid(field))?;
        Ok(f64::from(raw) / 10.0)
    }

    pub fn create_pokedex_entry(&self) -> Result<Vec<String>> {
        let entry = self
            .lookup
            .species_entry(self.record.require("InternalNumber")?)?;
        let mut dex = self.open("Dex", "type");
        dex.push(format!("|''{}''", entry.dex_entry));
        dex.push("}}".to_string());
        Ok(dex)
    }

    /// Introductory sentence followed by the evolution sentence.
    pub fn create_opening_paragraph(&self, evolution_statement: &str) -> Vec<String> {
        let (dual_type, typing) = match self.types.get(1) {
            Some(second) => (
                "dual-type ",
                format!("{{{{Type|{}}}}}/{{{{Type|{second}}}}}", self.first_type()),
            ),
            None => ("", format!("{{{{Type|{}}}}}", self.first_type())),
        };
        let determiner = if self.first_type().starts_with(['E', 'I']) {
            "an"
        } else {
            "a"
        };
        vec![
            format!(
                "'''{}''' is {determiner} {dual_type}{typing}-type Pokémon.",
                self.name
            ),
            String::new(),
            evolution_statement.to_string(),
        ]
    }

    /// Three identical slots mean the item is always held.
    pub fn create_wild_items(&self) -> Result<Vec<String>> {
        let mut wild_items = self.open("HeldItems", "type");
        let mut found: Vec<(&str, &str)> = Vec::new();
        for slot in ITEM_SLOTS {
            if let Some(item) = self.record.get(&format!("WildItem{slot}")) {
                found.push((slot, self.lookup.wild_item(item)?));
            }
        }

        let always = found.len() == ITEM_SLOTS.len()
            && found.iter().all(|(_, item)| *item == found[0].1);
        if always {
            let item = found[0].1;
            wild_items.push(format!("|always = {{{{Item|{item}}}}} [[{item}]]"));
        } else {
            for (slot, item) in found {
                wild_items.push(format!(
                    "|{} = {{{{Item|{item}}}}} [[{item}]]",
                    slot.to_lowercase()
                ));
            }
        }
        wild_items.push("}}".to_string());
        Ok(wild_items)
    }

    pub fn create_stats(&self) -> Result<Vec<String>> {
        let mut stats = self.open("Stats", "type");
        for (name, value) in STAT_NAMES.iter().zip(self.record.list("BaseStats")?) {
            stats.push(format!("|{name} = {value}"));
        }
        stats.push("}}".to_string());
        Ok(stats)
    }

    pub fn create_sprites(&self) -> Vec<String> {
        vec![format!(
            "{{{{sprites|name={}|type={}|type2={}}}}}",
            image_name(&self.name),
            self.first_type(),
            self.second_type()
        )]
    }

    /// Multiplier of every attacking type, plus one `|<type>-ability` line
    /// per ability that cancels a type entirely.
    pub fn create_type_effectiveness(&self, chart: &TypeChart) -> Result<Vec<String>> {
        let mut box_lines = self.open("TypeEffectiveness", "type1");
        for (attacking, multiplier) in chart.matchups(&self.types) {
            box_lines.push(format!("|{} = {multiplier}", attacking.to_lowercase()));
        }

        let mut abilities = self.record.list("Abilities")?;
        if let Some(hidden) = self.record.get("HiddenAbility") {
            abilities.push(hidden);
        }
        for ability in abilities {
            if let Some(immune_to) = self.lookup.ability_immunity(ability) {
                box_lines.push(format!(
                    "|{}-ability = {}",
                    immune_to.to_lowercase(),
                    self.lookup.ability(ability)?
                ));
            }
        }
        box_lines.push("}}".to_string());
        Ok(box_lines)
    }
}

/// Whole numbers keep one decimal place (`1.0`, `0.7`).
fn decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Converts metres to whole feet and rounded inches, carrying 12 inches.
fn feet_inches(metres: f64) -> (u32, u32) {
    let total = metres * INCHES_PER_METRE;
    let mut feet = (total / 12.0).floor() as u32;
    let mut inches = (total % 12.0).round() as u32;
    if inches == 12 {
        feet += 1;
        inches = 0;
    }
    (feet, inches)
}

//! Level 50 speed tiers for the competitive metagame.

use crate::data::lookup::Lookup;
use crate::data::read_lines;
use crate::data::records::RecordFile;
use crate::error::{Result, WikiError};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

pub const LEVEL: f64 = 50.0;
/// Index of Speed in `BaseStats` (HP/ATK/DEF/SPE/SPA/SPD).
const SPEED_INDEX: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nature {
    Negative,
    Neutral,
    Positive,
}

impl Nature {
    pub fn multiplier(self) -> f64 {
        match self {
            Nature::Negative => 0.9,
            Nature::Neutral => 1.0,
            Nature::Positive => 1.1,
        }
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Nature::Negative => "Negative",
            Nature::Neutral => "Neutral",
            Nature::Positive => "Positive",
        };
        f.write_str(label)
    }
}

/// One investment spread.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spread {
    pub ivs: u32,
    pub evs: u32,
    pub nature: Nature,
}

/// Minimum (Trick Room), minimum with IVs, neutral, neutral invested and
/// maximum speed.
pub const SPREADS: [Spread; 5] = [
    Spread { ivs: 0, evs: 0, nature: Nature::Negative },
    Spread { ivs: 31, evs: 0, nature: Nature::Negative },
    Spread { ivs: 31, evs: 0, nature: Nature::Neutral },
    Spread { ivs: 31, evs: 252, nature: Nature::Neutral },
    Spread { ivs: 31, evs: 252, nature: Nature::Positive },
];

pub const BOOSTS: [i32; 5] = [-2, -1, 0, 1, 2];

/// Stage multiplier: +1 is 1.5x, -1 is 2/3.
pub fn boost_modifier(boost: i32) -> f64 {
    let modifier = 1.0 + f64::from(boost.unsigned_abs()) / 2.0;
    if boost < 0 {
        1.0 / modifier
    } else {
        modifier
    }
}

/// Non-HP stat formula at level 50, then nature and stage, truncated.
pub fn speed_at_50(base: u32, spread: Spread, boost: i32) -> u32 {
    let raw = (2.0 * f64::from(base) + f64::from(spread.ivs) + f64::from(spread.evs) / 4.0) * LEVEL
        / 100.0
        + 5.0;
    (raw * spread.nature.multiplier() * boost_modifier(boost)) as u32
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpeedEntry {
    #[serde(rename = "Speed")]
    pub speed: u32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Base")]
    pub base: u32,
    #[serde(rename = "IVs")]
    pub ivs: u32,
    #[serde(rename = "EVs")]
    pub evs: u32,
    #[serde(rename = "Nature")]
    pub nature: String,
    #[serde(rename = "Boosts")]
    pub boosts: String,
}

impl SpeedEntry {
    pub fn new(name: &str, base: u32, spread: Spread, boost: i32) -> Self {
        Self {
            speed: speed_at_50(base, spread, boost),
            name: name.to_string(),
            base,
            ivs: spread.ivs,
            evs: spread.evs,
            nature: spread.nature.to_string(),
            boosts: if boost > 0 {
                format!("+{boost}")
            } else {
                boost.to_string()
            },
        }
    }

    fn same_tier(&self, other: &SpeedEntry) -> bool {
        self.speed == other.speed
            && self.base == other.base
            && self.ivs == other.ivs
            && self.evs == other.evs
            && self.nature == other.nature
            && self.boosts == other.boosts
    }
}

/// Every spread at every boost for one creature.
pub fn tier_entries(name: &str, base: u32) -> Vec<SpeedEntry> {
    BOOSTS
        .iter()
        .flat_map(|boost| SPREADS.iter().map(move |spread| SpeedEntry::new(name, base, *spread, *boost)))
        .collect()
}

/// Fastest first, then higher base, then name.
pub fn sort_entries(entries: &mut [SpeedEntry]) {
    entries.sort_by(|a, b| {
        b.speed
            .cmp(&a.speed)
            .then(b.base.cmp(&a.base))
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Folds rows that differ only by name into one row. Rows that share speed
/// and base but differ in IVs, EVs, nature or boost stay separate, so each
/// grouped row still names a single spread. Expects sorted input, so
/// candidates share the speed and base of the current row.
pub fn group_entries(entries: Vec<SpeedEntry>) -> Vec<SpeedEntry> {
    let mut grouped: Vec<SpeedEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        let existing = grouped
            .iter_mut()
            .rev()
            .take_while(|row| row.speed == entry.speed && row.base == entry.base)
            .find(|row| row.same_tier(&entry));
        match existing {
            Some(row) => {
                row.name.push_str(", ");
                row.name.push_str(&entry.name);
            }
            None => grouped.push(entry),
        }
    }
    grouped
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpeedTiers {
    pub master: Vec<SpeedEntry>,
    pub singles: Vec<SpeedEntry>,
}

impl SpeedTiers {
    /// `bases` maps display names to base speed; `singles` names the
    /// creatures of the singles tier list.
    pub fn build(bases: &IndexMap<String, u32>, singles: &[String]) -> Self {
        let mut master: Vec<SpeedEntry> = bases
            .iter()
            .flat_map(|(name, base)| tier_entries(name, *base))
            .collect();
        sort_entries(&mut master);
        let singles_rows: Vec<SpeedEntry> = master
            .iter()
            .filter(|entry| singles.contains(&entry.name))
            .cloned()
            .collect();
        Self {
            master,
            singles: group_entries(singles_rows),
        }
    }

    pub fn write_csv(entries: &[SpeedEntry], path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for entry in entries {
            writer.serialize(entry)?;
        }
        writer.flush().map_err(|e| WikiError::io(path, e))?;
        Ok(())
    }
}

/// Base speed of every creature in the Pokédex table.
pub fn base_speeds(lookup: &dyn Lookup, records: &RecordFile) -> Result<IndexMap<String, u32>> {
    let mut bases = IndexMap::new();
    for (_, info) in lookup.pokedex() {
        let record = records.extract(&info.internal_name)?;
        let stats = record.list("BaseStats")?;
        let speed = stats
            .get(SPEED_INDEX)
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(|| record.invalid("BaseStats"))?;
        bases.insert(info.display_name.clone(), speed);
    }
    Ok(bases)
}

/// Alternate forms missing from pokemon.txt, as `{"Name": base_speed}`.
pub fn load_alternate_forms(path: &Path) -> Result<IndexMap<String, u32>> {
    let content = fs::read_to_string(path).map_err(|e| WikiError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| WikiError::json(path.display().to_string(), e))
}

/// Names from the singles tier list, skipping `=` headings and blank lines.
pub fn load_tier_list(path: &Path) -> Result<Vec<String>> {
    Ok(read_lines(path)?
        .into_iter()
        .filter(|line| !line.starts_with('=') && !line.trim().is_empty())
        .map(|line| line.trim().to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boost_stages() {
        assert_eq!(boost_modifier(0), 1.0);
        assert_eq!(boost_modifier(1), 1.5);
        assert_eq!(boost_modifier(2), 2.0);
        assert!((boost_modifier(-1) - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(boost_modifier(-2), 0.5);
    }

    #[test]
    fn speed_formula() {
        // base 100 max speed: (200+31+63)/2+5 = 152, x1.1 = 167
        assert_eq!(speed_at_50(100, SPREADS[4], 0), 167);
        // neutral, no EVs: 120.5 truncates to 120
        assert_eq!(speed_at_50(100, SPREADS[2], 0), 120);
        // Trick Room minimum: (200)/2+5 = 105, x0.9 = 94
        assert_eq!(speed_at_50(100, SPREADS[0], 0), 94);
        assert_eq!(speed_at_50(100, SPREADS[2], 1), 180);
    }

    #[test]
    fn boosts_are_signed() {
        let entry = SpeedEntry::new("A", 50, SPREADS[2], 1);
        assert_eq!(entry.boosts, "+1");
        let entry = SpeedEntry::new("A", 50, SPREADS[2], -2);
        assert_eq!(entry.boosts, "-2");
        assert_eq!(SpeedEntry::new("A", 50, SPREADS[2], 0).boosts, "0");
    }

    #[test]
    fn sorted_and_grouped() {
        let mut bases = IndexMap::new();
        bases.insert("Zeta".to_string(), 80);
        bases.insert("Alpha".to_string(), 80);
        bases.insert("Slow".to_string(), 20);
        let singles = vec!["Zeta".to_string(), "Alpha".to_string()];
        let tiers = SpeedTiers::build(&bases, &singles);

        assert_eq!(tiers.master.len(), 3 * SPREADS.len() * BOOSTS.len());
        assert_eq!(tiers.master[0].name, "Alpha");
        assert_eq!(tiers.master[1].name, "Zeta");
        assert!(tiers.master.windows(2).all(|w| w[0].speed >= w[1].speed));

        assert_eq!(tiers.singles.len(), SPREADS.len() * BOOSTS.len());
        assert_eq!(tiers.singles[0].name, "Alpha, Zeta");
    }

    #[test]
    fn equal_speed_with_other_spread_stays_apart() {
        let invested = SpeedEntry::new("Alpha", 80, SPREADS[3], 0);
        let mut boosted = SpeedEntry::new("Beta", 80, SPREADS[2], 0);
        boosted.speed = invested.speed;
        boosted.boosts = "+1".to_string();
        let same = SpeedEntry::new("Gamma", 80, SPREADS[3], 0);

        let grouped = group_entries(vec![invested, boosted, same]);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].name, "Alpha, Gamma");
        assert_eq!(grouped[1].name, "Beta");
    }
}

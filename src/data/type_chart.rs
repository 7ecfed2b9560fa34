use std::collections::HashMap;

/// Attacking types in the order the wiki's type effectiveness box lists them.
pub const TYPES: [&str; 19] = [
    "Normal", "Fighting", "Flying", "Poison", "Ground", "Rock", "Bug", "Ghost", "Steel", "Fire",
    "Water", "Grass", "Electric", "Psychic", "Ice", "Dragon", "Dark", "Fairy", "Sound",
];

/// How one defending type takes hits.
#[derive(Clone, Debug)]
pub struct TypeEntry {
    pub weak_to: Vec<String>,
    pub resists: Vec<String>,
    pub immune_to: Vec<String>,
}

/// The game's chart: Gen V matchups plus the Sound type.
#[derive(Clone, Debug)]
pub struct TypeChart {
    chart: HashMap<String, TypeEntry>,
}

impl TypeChart {
    pub fn new() -> Self {
        let mut chart = HashMap::new();
        let mut add_entry = |type_name: &str, weak_to: &[&str], resists: &[&str], immune_to: &[&str]| {
            chart.insert(
                type_name.to_string(),
                TypeEntry {
                    weak_to: weak_to.iter().map(|v| v.to_string()).collect(),
                    resists: resists.iter().map(|v| v.to_string()).collect(),
                    immune_to: immune_to.iter().map(|v| v.to_string()).collect(),
                },
            );
        };

        add_entry("Normal", &["Fighting"], &[], &["Ghost"]);
        add_entry("Fighting", &["Flying", "Psychic", "Fairy"], &["Rock", "Bug", "Dark"], &[]);
        add_entry("Flying", &["Rock", "Electric", "Ice", "Sound"], &["Fighting", "Bug", "Grass"], &["Ground"]);
        add_entry("Poison", &["Ground", "Psychic"], &["Fighting", "Poison", "Bug", "Grass", "Fairy"], &[]);
        add_entry("Ground", &["Water", "Grass", "Ice"], &["Poison", "Rock"], &["Electric"]);
        add_entry("Rock", &["Fighting", "Ground", "Steel", "Water", "Grass"], &["Normal", "Flying", "Poison", "Fire"], &[]);
        add_entry("Bug", &["Flying", "Rock", "Fire"], &["Fighting", "Ground", "Grass"], &[]);
        add_entry("Ghost", &["Ghost", "Dark"], &["Poison", "Bug"], &["Normal", "Fighting"]);
        add_entry("Steel", &["Fighting", "Ground", "Fire"], &["Normal", "Flying", "Rock", "Bug", "Steel", "Grass", "Psychic", "Ice", "Dragon", "Fairy"], &["Poison"]);
        add_entry("Fire", &["Ground", "Rock", "Water"], &["Bug", "Steel", "Fire", "Grass", "Ice", "Fairy"], &[]);
        add_entry("Water", &["Grass", "Electric", "Sound"], &["Steel", "Fire", "Water", "Ice"], &[]);
        add_entry("Grass", &["Flying", "Poison", "Bug", "Fire", "Ice"], &["Ground", "Water", "Grass", "Electric"], &[]);
        add_entry("Electric", &["Ground"], &["Flying", "Steel", "Electric", "Sound"], &[]);
        add_entry("Psychic", &["Bug", "Ghost", "Dark"], &["Fighting", "Psychic", "Sound"], &[]);
        add_entry("Ice", &["Fighting", "Rock", "Steel", "Fire"], &["Ice"], &[]);
        add_entry("Dragon", &["Ice", "Dragon", "Fairy"], &["Fire", "Water", "Grass", "Electric", "Sound"], &[]);
        add_entry("Dark", &["Fighting", "Bug", "Fairy"], &["Ghost", "Dark"], &["Psychic"]);
        add_entry("Fairy", &["Poison", "Steel", "Sound"], &["Fighting", "Bug", "Dark"], &["Dragon"]);
        add_entry("Sound", &["Electric", "Dragon"], &["Flying", "Water", "Fairy"], &[]);

        Self { chart }
    }

    /// Damage multiplier of `move_type` against a creature of `target_types`.
    /// Unknown types are neutral.
    pub fn effectiveness(&self, move_type: &str, target_types: &[String]) -> f32 {
        let mut multiplier = 1.0;
        for target_type in target_types {
            if let Some(entry) = self.chart.get(target_type) {
                if entry.immune_to.iter().any(|t| t == move_type) {
                    return 0.0;
                }
                if entry.weak_to.iter().any(|t| t == move_type) {
                    multiplier *= 2.0;
                }
                if entry.resists.iter().any(|t| t == move_type) {
                    multiplier *= 0.5;
                }
            }
        }
        multiplier
    }

    /// Multiplier of every attacking type, in [`TYPES`] order.
    pub fn matchups(&self, target_types: &[String]) -> Vec<(&'static str, f32)> {
        TYPES
            .iter()
            .map(|attacking| (*attacking, self.effectiveness(attacking, target_types)))
            .collect()
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::new()
    }
}

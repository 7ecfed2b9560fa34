use serde::{Deserialize, Serialize};

/// Marker used by the evolution table for "no pre-evolution" and "no evolution".
pub const NO_EVOLUTION: &str = "no";

/// How a creature evolves into the next stage. Each variant carries the
/// single value of its one-key JSON object, e.g. `{"Level": "16"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvolutionMethod {
    Level(String),
    LevelFemale(String),
    Item(String),
    ItemMale(String),
    ItemFemale(String),
    Happiness(String),
    HappinessDay(String),
    HappinessNight(String),
    DayHoldItem(String),
    NightHoldItem(String),
    HasMove(String),
    Location(String),
    AttackGreater(String),
    DefenseGreater(String),
    AtkDefEqual(String),
    HasInParty(String),
}

/// One row of the evolution table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionLink {
    #[serde(rename = "PreEvolution")]
    pub pre_evolution: String,
    #[serde(rename = "Evolution")]
    pub evolution: Vec<String>,
    #[serde(rename = "PreEvolutionMethod", default)]
    pub pre_evolution_method: Option<EvolutionMethod>,
}

impl EvolutionLink {
    pub fn pre_evolution(&self) -> Option<&str> {
        if self.pre_evolution == NO_EVOLUTION {
            None
        } else {
            Some(self.pre_evolution.as_str())
        }
    }

    /// Forward targets, empty when the table says `["no"]`.
    pub fn evolutions(&self) -> Vec<&str> {
        self.evolution
            .iter()
            .map(String::as_str)
            .filter(|name| *name != NO_EVOLUTION)
            .collect()
    }

    pub fn is_standalone(&self) -> bool {
        self.pre_evolution().is_none() && self.evolutions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_single_key_methods() {
        let method: EvolutionMethod = serde_json::from_value(json!({"Level": "16"})).unwrap();
        assert_eq!(method, EvolutionMethod::Level("16".to_string()));

        let method: EvolutionMethod =
            serde_json::from_value(json!({"HasInParty": "REMORAID"})).unwrap();
        assert_eq!(method, EvolutionMethod::HasInParty("REMORAID".to_string()));
    }

    #[test]
    fn rejects_unknown_method_shape() {
        let result: Result<EvolutionMethod, _> =
            serde_json::from_value(json!({"Trade": "yes"}));
        assert!(result.is_err());
    }

    #[test]
    fn standalone_link() {
        let link: EvolutionLink = serde_json::from_value(json!({
            "PreEvolution": "no",
            "Evolution": ["no"]
        }))
        .unwrap();
        assert!(link.is_standalone());
        assert!(link.evolutions().is_empty());
        assert_eq!(link.pre_evolution_method, None);
    }
}

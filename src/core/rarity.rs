//! Encounter-rate classes from slot positions.
//!
//! Every biome family gives each 1-based slot a fixed weight. A creature's
//! weights are summed over all slots it occupies and thresholded into a
//! rarity tier.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BiomeKind {
    Land,
    LandDay,
    LandNight,
    Cave,
    RockSmash,
    Water,
    OldRod,
    GoodRod,
    SuperRod,
}

impl BiomeKind {
    pub const ALL: [BiomeKind; 9] = [
        BiomeKind::Land,
        BiomeKind::LandDay,
        BiomeKind::LandNight,
        BiomeKind::Cave,
        BiomeKind::RockSmash,
        BiomeKind::Water,
        BiomeKind::OldRod,
        BiomeKind::GoodRod,
        BiomeKind::SuperRod,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            BiomeKind::Land => "Land",
            BiomeKind::LandDay => "LandDay",
            BiomeKind::LandNight => "LandNight",
            BiomeKind::Cave => "Cave",
            BiomeKind::RockSmash => "RockSmash",
            BiomeKind::Water => "Water",
            BiomeKind::OldRod => "OldRod",
            BiomeKind::GoodRod => "GoodRod",
            BiomeKind::SuperRod => "SuperRod",
        }
    }

    pub fn slot_weight(self, position: usize) -> u32 {
        match self {
            BiomeKind::Land | BiomeKind::LandDay | BiomeKind::LandNight | BiomeKind::Cave => {
                match position {
                    1 | 2 => 20,
                    3..=6 => 10,
                    7 | 8 => 5,
                    9 | 10 => 4,
                    _ => 1,
                }
            }
            BiomeKind::RockSmash | BiomeKind::Water => match position {
                1 => 60,
                2 => 30,
                3 => 5,
                4 => 4,
                _ => 1,
            },
            BiomeKind::OldRod => match position {
                1 => 70,
                _ => 30,
            },
            BiomeKind::GoodRod => match position {
                1 => 60,
                _ => 20,
            },
            BiomeKind::SuperRod => match position {
                1 => 40,
                2 => 30,
                3 => 15,
                4 => 10,
                _ => 5,
            },
        }
    }

    pub fn rarity(self, weight: u32) -> Rarity {
        // (common at or above, uncommon above)
        let (common, uncommon) = match self {
            BiomeKind::Land | BiomeKind::LandDay | BiomeKind::LandNight | BiomeKind::Cave => {
                (20, 5)
            }
            BiomeKind::RockSmash | BiomeKind::Water => (40, 10),
            BiomeKind::OldRod => (70, 0),
            BiomeKind::GoodRod => (40, 0),
            BiomeKind::SuperRod => (30, 10),
        };
        if weight >= common {
            Rarity::Common
        } else if weight > uncommon {
            Rarity::Uncommon
        } else {
            Rarity::Rare
        }
    }

    pub fn secondary_info(self) -> SecondaryInfo {
        match self {
            BiomeKind::Land => SecondaryInfo::None,
            BiomeKind::LandDay => SecondaryInfo::Day,
            BiomeKind::LandNight => SecondaryInfo::Night,
            BiomeKind::Cave => SecondaryInfo::Cave,
            BiomeKind::RockSmash => SecondaryInfo::RockSmash,
            BiomeKind::Water => SecondaryInfo::Surfing,
            BiomeKind::OldRod => SecondaryInfo::OldRod,
            BiomeKind::GoodRod => SecondaryInfo::GoodRod,
            BiomeKind::SuperRod => SecondaryInfo::SuperRod,
        }
    }
}

impl FromStr for BiomeKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BiomeKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or(())
    }
}

/// Ordered so that `Common` is the greatest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rarity {
    Rare,
    Uncommon,
    Common,
}

impl Rarity {
    /// Render order of the availability box.
    pub const TIERS: [Rarity; 3] = [Rarity::Common, Rarity::Uncommon, Rarity::Rare];

    pub fn field(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rarity::Common => write!(f, "Common"),
            Rarity::Uncommon => write!(f, "Uncommon"),
            Rarity::Rare => write!(f, "Rare"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SecondaryInfo {
    None,
    Day,
    Night,
    DayOnly,
    NightOnly,
    Cave,
    RockSmash,
    Surfing,
    OldRod,
    GoodRod,
    SuperRod,
}

impl SecondaryInfo {
    pub fn label(self) -> &'static str {
        match self {
            SecondaryInfo::None => "",
            SecondaryInfo::Day => "Day",
            SecondaryInfo::Night => "Night",
            SecondaryInfo::DayOnly => "Day Only",
            SecondaryInfo::NightOnly => "Night Only",
            SecondaryInfo::Cave => "Cave",
            SecondaryInfo::RockSmash => "Rock Smash",
            SecondaryInfo::Surfing => "Surfing",
            SecondaryInfo::OldRod => "Old Rod",
            SecondaryInfo::GoodRod => "Good Rod",
            SecondaryInfo::SuperRod => "Super Rod",
        }
    }

    pub fn bucket(self) -> Bucket {
        match self {
            SecondaryInfo::None
            | SecondaryInfo::Day
            | SecondaryInfo::Night
            | SecondaryInfo::DayOnly
            | SecondaryInfo::NightOnly
            | SecondaryInfo::Cave => Bucket::Normal,
            SecondaryInfo::RockSmash => Bucket::RockSmash,
            SecondaryInfo::Surfing => Bucket::Surfing,
            SecondaryInfo::OldRod | SecondaryInfo::GoodRod | SecondaryInfo::SuperRod => {
                Bucket::Fishing
            }
        }
    }
}

/// Display groups inside one rarity tier, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bucket {
    Normal,
    RockSmash,
    Surfing,
    Fishing,
}

impl Bucket {
    pub const ORDER: [Bucket; 4] = [
        Bucket::Normal,
        Bucket::RockSmash,
        Bucket::Surfing,
        Bucket::Fishing,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub weight: u32,
    pub rarity: Rarity,
    pub secondary: SecondaryInfo,
}

/// Classifies `internal_name` in the slot lines of one biome block (tag
/// line excluded). Returns `None` when the creature occupies no slot.
pub fn classify(kind: BiomeKind, slots: &[String], internal_name: &str) -> Option<Classification> {
    let positions: Vec<usize> = slots
        .iter()
        .enumerate()
        .filter(|(_, line)| slot_species(line) == internal_name)
        .map(|(i, _)| i + 1)
        .collect();
    if positions.is_empty() {
        return None;
    }
    let weight = positions.iter().map(|&p| kind.slot_weight(p)).sum();
    Some(Classification {
        weight,
        rarity: kind.rarity(weight),
        secondary: kind.secondary_info(),
    })
}

/// The creature named by a slot line such as `PIDGEY,3,5`.
pub fn slot_species(line: &str) -> &str {
    line.split(',').next().unwrap_or_default().trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn land_first_slot_is_common() {
        let c = classify(BiomeKind::Land, &slots(&["EEVEE,5,7", "PIDGEY,3,5"]), "EEVEE").unwrap();
        assert_eq!(c.weight, 20);
        assert_eq!(c.rarity, Rarity::Common);
        assert_eq!(c.secondary, SecondaryInfo::None);
    }

    #[test]
    fn weights_add_across_slots() {
        let block = slots(&["A", "A", "A", "A", "A", "A", "B", "C", "C", "D", "D", "B"]);
        // positions 7 and 12
        let c = classify(BiomeKind::Cave, &block, "B").unwrap();
        assert_eq!(c.weight, 6);
        assert_eq!(c.rarity, Rarity::Uncommon);
        // position 12 only
        let mut raw = vec!["A"; 11];
        raw.push("E");
        let c = classify(BiomeKind::Cave, &slots(&raw), "E").unwrap();
        assert_eq!(c.weight, 1);
        assert_eq!(c.rarity, Rarity::Rare);
    }

    #[test]
    fn fishing_thresholds() {
        let good = classify(BiomeKind::GoodRod, &slots(&["A", "B"]), "B").unwrap();
        assert_eq!((good.weight, good.rarity), (20, Rarity::Uncommon));

        let old = classify(BiomeKind::OldRod, &slots(&["A", "B"]), "B").unwrap();
        assert_eq!((old.weight, old.rarity), (30, Rarity::Uncommon));

        let sup = classify(BiomeKind::SuperRod, &slots(&["A", "B", "C", "D", "E"]), "E").unwrap();
        assert_eq!((sup.weight, sup.rarity), (5, Rarity::Rare));
        assert_eq!(sup.secondary.label(), "Super Rod");
    }

    #[test]
    fn water_and_rock_smash() {
        let c = classify(BiomeKind::Water, &slots(&["A", "B"]), "B").unwrap();
        assert_eq!((c.weight, c.rarity), (30, Rarity::Uncommon));
        assert_eq!(c.secondary, SecondaryInfo::Surfing);

        let c = classify(BiomeKind::RockSmash, &slots(&["A", "B", "C"]), "C").unwrap();
        assert_eq!(c.rarity, Rarity::Rare);
    }

    #[test]
    fn slot_match_is_exact() {
        assert!(classify(BiomeKind::Land, &slots(&["SHYLEONX,5,7"]), "SHYLEON").is_none());
    }

    #[test]
    fn rarity_ordering() {
        assert!(Rarity::Common > Rarity::Uncommon);
        assert!(Rarity::Uncommon > Rarity::Rare);
        assert_eq!("LandNight".parse::<BiomeKind>(), Ok(BiomeKind::LandNight));
        assert!("Headbutt".parse::<BiomeKind>().is_err());
    }
}

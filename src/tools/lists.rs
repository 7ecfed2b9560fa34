//! Wiki list pages covering every creature at once: EV yields, abilities,
//! base stats and wild held-item drops.

use crate::core::locations::zone_encounters;
use crate::data::encounters::{EncounterFile, ZonePolicy};
use crate::data::lookup::Lookup;
use crate::data::records::{Record, RecordFile};
use crate::error::{Result, WikiError};
use std::fs;
use std::path::{Path, PathBuf};

/// Static encounter kinds that cannot be met in the wild.
pub const UNENCOUNTERABLE_STATICS: [&str; 3] = ["Gift", "Trade", "Fossil"];

const ITEM_SLOTS: [&str; 3] = ["Common", "Uncommon", "Rare"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListKind {
    EvYield,
    Ability,
    BaseStats,
    EncounterableDrops,
    UnencounterableDrops,
}

impl ListKind {
    pub const ALL: [ListKind; 5] = [
        ListKind::EvYield,
        ListKind::Ability,
        ListKind::BaseStats,
        ListKind::EncounterableDrops,
        ListKind::UnencounterableDrops,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ListKind::EvYield => "evyield_list.txt",
            ListKind::Ability => "ability_list.txt",
            ListKind::BaseStats => "basestats_list.txt",
            ListKind::EncounterableDrops => "encdroplist_list.txt",
            ListKind::UnencounterableDrops => "unencdroplist_list.txt",
        }
    }
}

/// Entries of every list, in dex order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lists {
    pub ev_yield: Vec<String>,
    pub ability: Vec<String>,
    pub base_stats: Vec<String>,
    pub encounterable_drops: Vec<String>,
    pub unencounterable_drops: Vec<String>,
}

impl Lists {
    pub fn get(&self, kind: ListKind) -> &[String] {
        match kind {
            ListKind::EvYield => &self.ev_yield,
            ListKind::Ability => &self.ability,
            ListKind::BaseStats => &self.base_stats,
            ListKind::EncounterableDrops => &self.encounterable_drops,
            ListKind::UnencounterableDrops => &self.unencounterable_drops,
        }
    }

    /// Writes one `<list>_list.txt` per list into `dir`.
    pub fn write_to_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir).map_err(|e| WikiError::io(dir, e))?;
        let mut written = Vec::new();
        for kind in ListKind::ALL {
            let path = dir.join(kind.file_name());
            fs::write(&path, self.get(kind).join("\n")).map_err(|e| WikiError::io(&path, e))?;
            written.push(path);
        }
        Ok(written)
    }
}

pub struct ListGenerator<'a> {
    lookup: &'a dyn Lookup,
    records: &'a RecordFile,
    encounters: &'a EncounterFile,
}

impl<'a> ListGenerator<'a> {
    pub fn new(lookup: &'a dyn Lookup, records: &'a RecordFile, encounters: &'a EncounterFile) -> Self {
        Self {
            lookup,
            records,
            encounters,
        }
    }

    pub fn generate(&self) -> Result<Lists> {
        let mut lists = Lists::default();
        let pokedex = self.lookup.pokedex();
        let total = pokedex.len();
        for (idx, (dex, info)) in pokedex.into_iter().enumerate() {
            let record = self.records.extract(&info.internal_name)?;
            let name = info.display_name.as_str();

            lists.ev_yield.push(stat_entry("EVYieldListEntry", dex, name, &record, "EffortPoints")?);
            lists.ability.push(self.ability_entry(dex, name, &record)?);
            lists.base_stats.push(stat_entry("BaseStatsListEntry", dex, name, &record, "BaseStats")?);

            if let Some(items) = self.drop_items(&record)? {
                let entry = format!("{{{{HeldItemsEntry|{}|{}}}}}", template_name(name), items.join("|"));
                if self.is_encounterable(&info.internal_name, name)? {
                    lists.encounterable_drops.push(entry);
                } else {
                    lists.unencounterable_drops.push(entry);
                }
            }
            tracing::debug!(progress = idx + 1, total, name, "listed");
        }
        Ok(lists)
    }

    fn ability_entry(&self, dex: &str, name: &str, record: &Record) -> Result<String> {
        let mut abilities = record.list("Abilities")?;
        abilities.truncate(2);
        abilities.resize(2, "");
        abilities.push(record.get("HiddenAbility").unwrap_or_default());
        let formatted = abilities
            .into_iter()
            .map(|ability| {
                if ability.is_empty() {
                    Ok("")
                } else {
                    self.lookup.ability(ability)
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(format!("{{{{AbilityListEntry|{dex}|{name}|{}}}}}", formatted.join("|")))
    }

    /// Item cells for the drop list, or `None` when nothing is held. Three
    /// identical slots move into the fourth ("always") cell.
    fn drop_items(&self, record: &Record) -> Result<Option<Vec<String>>> {
        let mut items = Vec::with_capacity(ITEM_SLOTS.len());
        for slot in ITEM_SLOTS {
            match record.get(&format!("WildItem{slot}")) {
                Some(item) => {
                    let item = self.lookup.wild_item(item)?;
                    items.push(format!("{{{{Item|{{{{{{1|{item}}}}}}}}}}}"));
                }
                None => items.push(String::new()),
            }
        }
        if items.iter().all(String::is_empty) {
            return Ok(None);
        }
        if items.iter().all(|item| *item == items[0]) {
            let always = items[0].clone();
            return Ok(Some(vec![String::new(), String::new(), String::new(), always]));
        }
        Ok(Some(items))
    }

    /// Wild zones, or a static encounter other than a gift, trade or fossil.
    /// A `Vintage <Base>` form without wild data of its own borrows the
    /// wild data of its base species.
    fn is_encounterable(&self, internal_name: &str, display_name: &str) -> Result<bool> {
        if let Some(statics) = self.lookup.static_encounters(internal_name) {
            if statics
                .values()
                .any(|kind| !UNENCOUNTERABLE_STATICS.contains(&kind.as_str()))
            {
                return Ok(true);
            }
        }
        if self.has_wild_slots(internal_name)? {
            return Ok(true);
        }
        match self.vintage_base(display_name) {
            Some(base) => {
                tracing::debug!(form = display_name, base = %base, "using base species encounters");
                self.has_wild_slots(&base)
            }
            None => Ok(false),
        }
    }

    fn has_wild_slots(&self, internal_name: &str) -> Result<bool> {
        let zones = self
            .encounters
            .find_zones(internal_name, self.lookup, ZonePolicy::KeepAll)?;
        Ok(zones
            .iter()
            .any(|zone| !zone_encounters(zone, internal_name).is_empty()))
    }

    /// Internal name of the base species of a `Vintage <Base>` form.
    fn vintage_base(&self, display_name: &str) -> Option<String> {
        let base = display_name.strip_prefix("Vintage ")?.trim();
        if base.is_empty() {
            return None;
        }
        let internal_name = self
            .lookup
            .pokedex()
            .into_iter()
            .find(|(_, info)| info.display_name == base)
            .map(|(_, info)| info.internal_name.clone())
            .unwrap_or_else(|| base.to_uppercase());
        Some(internal_name)
    }
}

/// Six stats stored HP/ATK/DEF/SPE/SPA/SPD, listed HP/ATK/DEF/SPA/SPD/SPE.
fn stat_entry(template: &str, dex: &str, name: &str, record: &Record, field: &str) -> Result<String> {
    let stats = record.list(field)?;
    let [hp, atk, def, spe, spa, spd] = stats.as_slice() else {
        return Err(record.invalid(field));
    };
    Ok(format!(
        "{{{{{template}|{dex}|{name}|{hp}|{atk}|{def}|{spa}|{spd}|{spe}}}}}"
    ))
}

/// Names that would clash with other templates get the page suffix the wiki
/// uses for them.
pub fn template_name(display_name: &str) -> String {
    match display_name {
        "Bremand" => return "Bremand_V".to_string(),
        "Zorua" => return "Zorua_H".to_string(),
        _ => {}
    }
    let words: Vec<&str> = display_name.split(' ').collect();
    match words.as_slice() {
        ["Pikachu", .., "X"] => "PikachuXM".to_string(),
        [first, .., "X"] => format!("{first}X"),
        _ => display_name.to_string(),
    }
}

//! Game locations: biome segmentation of encounter zones, cross-zone merge
//! and the `{{Availability}}` box.

use crate::core::rarity::{classify, BiomeKind, Bucket, Classification, Rarity, SecondaryInfo};
use crate::data::encounters::Zone;
use crate::data::lookup::Lookup;
use crate::data::records::Record;
use crate::error::Result;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BiomeBlock {
    pub kind: BiomeKind,
    /// Slot lines after the tag, blank and comment lines removed.
    pub slots: Vec<String>,
}

/// Splits a zone's lines into biome blocks at lines that are exactly a
/// biome tag. Lines before the first tag (zone id, densities) belong to no
/// block.
pub fn segment(lines: &[String]) -> Vec<BiomeBlock> {
    let tags: Vec<(usize, BiomeKind)> = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| line.trim().parse::<BiomeKind>().ok().map(|kind| (idx, kind)))
        .collect();

    let block = |kind: BiomeKind, body: &[String]| BiomeBlock {
        kind,
        slots: body
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect(),
    };

    match tags.as_slice() {
        [] => Vec::new(),
        [(idx, kind)] => vec![block(*kind, &lines[idx + 1..])],
        _ => {
            let mut blocks: Vec<BiomeBlock> = tags
                .windows(2)
                .map(|pair| {
                    let (start, kind) = pair[0];
                    let (next, _) = pair[1];
                    block(kind, &lines[start + 1..next])
                })
                .collect();
            if let Some(&(last, kind)) = tags.last() {
                blocks.push(block(kind, &lines[last + 1..]));
            }
            blocks
        }
    }
}

/// Classifies every biome of one zone that holds `internal_name`.
///
/// When the zone has both a LandDay and a LandNight table for the creature,
/// its plain Land table is legacy data and is dropped.
pub fn zone_encounters(zone: &Zone, internal_name: &str) -> Vec<(BiomeKind, Classification)> {
    let mut found: Vec<(BiomeKind, Classification)> = segment(&zone.lines)
        .into_iter()
        .filter_map(|block| {
            classify(block.kind, &block.slots, internal_name).map(|c| (block.kind, c))
        })
        .collect();

    let has = |wanted: BiomeKind, found: &[(BiomeKind, Classification)]| {
        found.iter().any(|(kind, _)| *kind == wanted)
    };
    if has(BiomeKind::LandDay, &found) && has(BiomeKind::LandNight, &found) {
        found.retain(|(kind, _)| *kind != BiomeKind::Land);
    }
    tracing::debug!(
        zone = %zone.id,
        location = %zone.location,
        biomes = ?found.iter().map(|(kind, c)| (kind.tag(), c.weight)).collect::<Vec<_>>(),
        "classified zone"
    );
    found
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocationKey {
    pub location: String,
    pub secondary: SecondaryInfo,
}

impl LocationKey {
    pub fn new(location: impl Into<String>, secondary: SecondaryInfo) -> Self {
        Self {
            location: location.into(),
            secondary,
        }
    }

    pub fn render(&self) -> String {
        match self.secondary {
            SecondaryInfo::None => format!("[[{}]]", self.location),
            other => format!("[[{}]] ({})", self.location, other.label()),
        }
    }
}

/// Best rarity per (location, secondary info), in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergedLocations {
    entries: IndexMap<LocationKey, Rarity>,
}

impl MergedLocations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: LocationKey, rarity: Rarity) {
        self.entries
            .entry(key)
            .and_modify(|best| *best = (*best).max(rarity))
            .or_insert(rarity);
    }

    pub fn add_zone(&mut self, zone: &Zone, internal_name: &str) {
        for (_, classification) in zone_encounters(zone, internal_name) {
            self.insert(
                LocationKey::new(zone.location.as_str(), classification.secondary),
                classification.rarity,
            );
        }
    }

    pub fn from_zones(zones: &[Zone], internal_name: &str) -> Self {
        let mut merged = Self::new();
        for zone in zones {
            merged.add_zone(zone, internal_name);
        }
        merged
    }

    pub fn merge(&mut self, other: &MergedLocations) {
        for (key, rarity) in &other.entries {
            self.insert(key.clone(), *rarity);
        }
    }

    /// Re-keys a Day entry to Day Only when its location has no Night entry,
    /// and the other way round. Positions are kept.
    pub fn mark_time_exclusive(self) -> Self {
        let has = |location: &str, secondary: SecondaryInfo| {
            self.entries
                .contains_key(&LocationKey::new(location, secondary))
        };
        let mut entries = IndexMap::with_capacity(self.entries.len());
        for (key, rarity) in &self.entries {
            let secondary = match key.secondary {
                SecondaryInfo::Day if !has(&key.location, SecondaryInfo::Night) => {
                    SecondaryInfo::DayOnly
                }
                SecondaryInfo::Night if !has(&key.location, SecondaryInfo::Day) => {
                    SecondaryInfo::NightOnly
                }
                other => other,
            };
            entries.insert(LocationKey::new(key.location.as_str(), secondary), *rarity);
        }
        Self { entries }
    }

    pub fn get(&self, location: &str, secondary: SecondaryInfo) -> Option<Rarity> {
        self.entries
            .get(&LocationKey::new(location, secondary))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LocationKey, Rarity)> {
        self.entries.iter().map(|(key, rarity)| (key, *rarity))
    }

    /// The value of one tier's box field, or `None` if the tier is empty.
    pub fn render_tier(&self, tier: Rarity) -> Option<String> {
        let keys: Vec<&LocationKey> = self
            .iter()
            .filter(|(_, rarity)| *rarity == tier)
            .map(|(key, _)| key)
            .collect();
        if keys.is_empty() {
            return None;
        }

        let groups: Vec<String> = Bucket::ORDER
            .iter()
            .filter_map(|bucket| {
                let in_bucket: Vec<&LocationKey> = keys
                    .iter()
                    .copied()
                    .filter(|key| key.secondary.bucket() == *bucket)
                    .collect();
                let rendered = render_bucket(&in_bucket);
                (!rendered.is_empty()).then(|| rendered.join(", "))
            })
            .collect();
        Some(groups.join("<br>"))
    }
}

/// Renders one bucket, folding a Day entry directly followed by the Night
/// entry of the same location (or vice versa) into a plain entry.
fn render_bucket(keys: &[&LocationKey]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut idx = 0;
    while idx < keys.len() {
        let key = keys[idx];
        let pairs_with_next = keys.get(idx + 1).is_some_and(|next| {
            next.location == key.location
                && matches!(
                    (key.secondary, next.secondary),
                    (SecondaryInfo::Day, SecondaryInfo::Night)
                        | (SecondaryInfo::Night, SecondaryInfo::Day)
                )
        });
        let text = if pairs_with_next {
            idx += 2;
            LocationKey::new(key.location.as_str(), SecondaryInfo::None).render()
        } else {
            idx += 1;
            key.render()
        };
        if !out.contains(&text) {
            out.push(text);
        }
    }
    out
}

pub const NO_KNOWN_METHOD: &str = "No known method";

/// Builds the `{{Availability}}` box for one creature.
pub struct LocationDataGenerator<'a> {
    record: &'a Record,
    zones: &'a [Zone],
    lookup: &'a dyn Lookup,
}

impl<'a> LocationDataGenerator<'a> {
    pub fn new(record: &'a Record, zones: &'a [Zone], lookup: &'a dyn Lookup) -> Self {
        Self {
            record,
            zones,
            lookup,
        }
    }

    pub fn merged_locations(&self) -> MergedLocations {
        MergedLocations::from_zones(self.zones, self.record.name()).mark_time_exclusive()
    }

    pub fn create_game_locations(&self) -> Result<Vec<String>> {
        let types = self.record.types()?;
        let mut lines = vec!["{{Availability".to_string(), format!("|type = {}", types[0])];
        if let Some(second) = types.get(1) {
            lines.push(format!("|type2 = {second}"));
        }

        let merged = self.merged_locations();
        for tier in Rarity::TIERS {
            if let Some(value) = merged.render_tier(tier) {
                lines.push(format!("|{} = {}", tier.field(), value));
            }
        }

        let statics = self.lookup.static_encounters(self.record.name());
        if let Some(statics) = statics {
            let value: Vec<String> = statics
                .iter()
                .map(|(location, kind)| {
                    if kind.is_empty() {
                        format!("[[{location}]]")
                    } else {
                        format!("[[{location}]] ({kind})")
                    }
                })
                .collect();
            lines.push(format!("|guaranteed = {}", value.join(", ")));
        }

        if merged.is_empty() && statics.is_none() {
            lines.push(format!("|none = {NO_KNOWN_METHOD}"));
        }
        lines.push("}}".to_string());
        Ok(lines)
    }
}

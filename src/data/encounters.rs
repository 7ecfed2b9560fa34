//! Zone discovery in encounters.txt.
//!
//! ```text
//! #########################
//! 012 # Route 3
//! 25,10,10
//! LandDay
//! PIDGEY,3,5
//! ...
//! #########################
//! ```

use crate::data::lookup::Lookup;
use crate::data::read_lines;
use crate::error::Result;
use std::path::Path;

pub const ZONE_SEPARATOR: &str = "#########################";

/// What to do with a zone whose location was already produced by an
/// earlier zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZonePolicy {
    /// Return every zone; the location merge keeps the best rarity.
    #[default]
    KeepAll,
    /// Return only the first zone of each location.
    FirstPerLocation,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Zone {
    pub id: String,
    pub location: String,
    pub lines: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct EncounterFile {
    lines: Vec<String>,
}

impl EncounterFile {
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_lines(read_lines(path)?))
    }

    /// Raw zone blocks between separator lines, separators excluded.
    fn raw_zones(&self) -> impl Iterator<Item = &[String]> {
        self.lines
            .split(|line| line.trim_end() == ZONE_SEPARATOR)
            .filter(|zone| !zone.is_empty())
    }

    /// Zones mentioning `internal_name` anywhere, resolved to their
    /// display location. Exact slot matching happens later, per biome.
    pub fn find_zones(
        &self,
        internal_name: &str,
        lookup: &dyn Lookup,
        policy: ZonePolicy,
    ) -> Result<Vec<Zone>> {
        let mut zones = Vec::new();
        for raw in self.raw_zones() {
            if !raw.iter().any(|line| line.contains(internal_name)) {
                continue;
            }
            let Some(id) = zone_id(raw) else {
                continue;
            };
            let location = lookup.location(&id)?.to_string();
            if policy == ZonePolicy::FirstPerLocation
                && zones.iter().any(|zone: &Zone| zone.location == location)
            {
                tracing::debug!(zone = %id, %location, "skipping already seen location");
                continue;
            }
            zones.push(Zone {
                id,
                location,
                lines: raw.to_vec(),
            });
        }
        order_by_location(&mut zones, lookup.location_order());
        Ok(zones)
    }
}

/// The zone id is the first non-blank line, up to any `#` comment.
fn zone_id(raw: &[String]) -> Option<String> {
    raw.iter()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .find(|id| !id.is_empty())
        .map(str::to_string)
}

/// Stable sort by position in `order`; unlisted locations go last in file order.
fn order_by_location(zones: &mut [Zone], order: &[String]) {
    if order.is_empty() {
        return;
    }
    zones.sort_by_key(|zone| {
        order
            .iter()
            .position(|name| *name == zone.location)
            .unwrap_or(order.len())
    });
}

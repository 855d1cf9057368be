use chrono::{DateTime, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};

use crate::error::ClockError;

/// A zone offered in the selection lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneEntry {
    pub zone: Tz,
    pub display_name: String,
}

/// Resolves an identifier such as `America/New_York` against the zone database.
pub fn resolve_zone(id: &str) -> Result<Tz, ClockError> {
    id.trim()
        .parse::<Tz>()
        .map_err(|_| ClockError::ZoneNotFound(id.to_string()))
}

/// Human readable name of a zone, e.g. `America/New York`.
pub fn display_name(zone: Tz) -> String {
    zone.name().replace('_', " ")
}

/// Name of a zone together with the abbreviation in effect at `at`,
/// e.g. `America/New York (EST)`.
pub fn full_name(at: &DateTime<Tz>) -> String {
    let abbreviation = at.format("%Z").to_string();
    let name = display_name(at.timezone());
    // Numeric offsets such as -03 are not names
    let numeric = abbreviation.starts_with(['+', '-']);
    if abbreviation.is_empty() || numeric || name == abbreviation {
        name
    } else {
        format!("{name} ({abbreviation})")
    }
}

/// Every zone known to the database, sorted by display name.
#[derive(Debug, Clone)]
pub struct ZoneDirectory {
    entries: Vec<ZoneEntry>,
}

impl Default for ZoneDirectory {
    fn default() -> Self {
        Self::load()
    }
}

impl ZoneDirectory {
    pub fn load() -> Self {
        let mut entries: Vec<ZoneEntry> = TZ_VARIANTS
            .iter()
            .map(|zone| ZoneEntry {
                zone: *zone,
                display_name: display_name(*zone),
            })
            .collect();
        entries.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        log::debug!("Loaded {} time zones", entries.len());
        ZoneDirectory { entries }
    }

    pub fn entries(&self) -> &[ZoneEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, zone: Tz) -> bool {
        self.entries.iter().any(|e| e.zone == zone)
    }

    pub fn resolve(&self, id: &str) -> Result<Tz, ClockError> {
        let zone = resolve_zone(id)?;
        if self.contains(zone) {
            Ok(zone)
        } else {
            Err(ClockError::ZoneNotFound(id.to_string()))
        }
    }

    /// Entries whose name contains `filter`, ignoring case. An empty filter keeps everything.
    pub fn search<'a>(&'a self, filter: &str) -> impl Iterator<Item = &'a ZoneEntry> + 'a {
        let filter = filter.trim().to_lowercase().replace('_', " ");
        self.entries
            .iter()
            .filter(move |e| filter.is_empty() || e.display_name.to_lowercase().contains(&filter))
    }
}

/// Zone of the machine, when it can be guessed from the `TZ` variable.
pub fn local_zone() -> Option<Tz> {
    std::env::var("TZ")
        .ok()
        .and_then(|id| resolve_zone(id.trim_start_matches(':')).ok())
}

/// Current instant seen from `zone`.
pub fn now_in(zone: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&zone)
}

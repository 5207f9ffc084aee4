use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

use crate::color::ColorKey;

pub const UNTITLED_PALETTE_NAME: &str = "Untitled Palette";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteId(pub String);

impl PaletteId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PaletteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Default, Clone)]
pub struct PaletteIdSequence {
    last: Option<u64>,
}

impl PaletteIdSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes after ids that already exist, ignoring ones that are not numeric.
    #[must_use]
    pub fn resume_after<'a>(ids: impl IntoIterator<Item = &'a PaletteId>) -> Self {
        Self {
            last: ids
                .into_iter()
                .filter_map(|id| id.as_str().parse::<u64>().ok())
                .max(),
        }
    }

    pub fn next_at(&mut self, now_millis: u64) -> PaletteId {
        let next = match self.last {
            Some(last) if now_millis <= last => last.saturating_add(1),
            _ => now_millis,
        };
        self.last = Some(next);
        PaletteId(next.to_string())
    }

    pub fn next_now(&mut self) -> PaletteId {
        let now_millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        self.next_at(u64::try_from(now_millis).unwrap_or(0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPalette {
    pub id: PaletteId,
    pub colors: Vec<ColorKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl SavedPalette {
    #[must_use]
    pub fn new(id: PaletteId, colors: Vec<ColorKey>, name: Option<String>) -> Self {
        Self {
            id,
            colors,
            name,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNTITLED_PALETTE_NAME)
    }

    pub fn apply(&mut self, update: PaletteUpdate) {
        if let Some(colors) = update.colors {
            self.colors = colors;
        }
        if let Some(name) = update.name {
            self.name = Some(name);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteUpdate {
    #[serde(default)]
    pub colors: Option<Vec<ColorKey>>,
    #[serde(default)]
    pub name: Option<String>,
}

//! Frequency-ranked palette extraction.
//!
//! Pixels are keyed by their exact 24-bit color, near-black pixels are
//! dropped, and the most frequent keys are returned. Two colors that differ
//! by a single unit in one channel are counted as unrelated colors.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::color::ColorKey;
use crate::error::DomainResult;
use crate::pixels::RgbaBuffer;

pub const DARKNESS_THRESHOLD: u8 = 30;
pub const MIN_PALETTE_COLORS: usize = 3;
pub const MAX_PALETTE_COLORS: usize = 5;

#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    slots: HashMap<ColorKey, usize>,
    entries: Vec<(ColorKey, usize)>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: ColorKey) {
        match self.slots.entry(key) {
            Entry::Occupied(slot) => {
                if let Some((_, count)) = self.entries.get_mut(*slot.get()) {
                    *count += 1;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    #[must_use]
    pub fn count(&self, key: ColorKey) -> usize {
        self.slots
            .get(&key)
            .and_then(|slot| self.entries.get(*slot))
            .map_or(0, |(_, count)| *count)
    }

    #[must_use]
    pub fn unique_colors(&self) -> usize {
        self.entries.len()
    }

    /// Entries by descending count. Equal counts keep first-seen order.
    #[must_use]
    pub fn into_ranked(self) -> Vec<(ColorKey, usize)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<ColorKey>);

impl Palette {
    #[must_use]
    pub fn new(colors: Vec<ColorKey>) -> Self {
        Self(colors)
    }

    #[must_use]
    pub fn colors(&self) -> &[ColorKey] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteExtractor;

impl PaletteExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn frequency_table(&self, pixels: &RgbaBuffer) -> FrequencyTable {
        let mut table = FrequencyTable::new();

        for pixel in pixels.pixels() {
            let rgb = pixel.rgb();
            if rgb.is_darker_than(DARKNESS_THRESHOLD) {
                continue;
            }
            table.record(ColorKey::from(rgb));
        }

        table
    }

    /// Returns up to five of the most frequent colors.
    #[must_use]
    pub fn extract(&self, pixels: &RgbaBuffer) -> Palette {
        let table = self.frequency_table(pixels);
        let color_count = table
            .unique_colors()
            .clamp(MIN_PALETTE_COLORS, MAX_PALETTE_COLORS);

        Palette(
            table
                .into_ranked()
                .into_iter()
                .take(color_count)
                .map(|(key, _)| key)
                .collect(),
        )
    }
}

pub fn extract_palette(rgba: &[u8], pixel_count: usize) -> DomainResult<Palette> {
    let buffer = RgbaBuffer::with_pixel_count(rgba.to_vec(), pixel_count)?;
    Ok(PaletteExtractor::new().extract(&buffer))
}

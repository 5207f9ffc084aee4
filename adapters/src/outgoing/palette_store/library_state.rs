use domain::color::ColorKey;
use domain::library::{PaletteId, PaletteIdSequence, PaletteUpdate, SavedPalette};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone)]
pub struct LibraryState {
    palettes: Vec<SavedPalette>,
    ids: PaletteIdSequence,
}

/// On-disk shape of the palette library.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LibraryDocument {
    #[serde(default)]
    pub palettes: Vec<SavedPalette>,
}

impl LibraryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_palettes(palettes: Vec<SavedPalette>) -> Self {
        let ids = PaletteIdSequence::resume_after(palettes.iter().map(|palette| &palette.id));
        Self { palettes, ids }
    }

    pub fn add(&mut self, colors: Vec<ColorKey>, name: Option<String>) -> SavedPalette {
        let palette = SavedPalette::new(self.ids.next_now(), colors, name);
        self.palettes.push(palette.clone());
        palette
    }

    #[must_use]
    pub fn get(&self, id: &PaletteId) -> Option<&SavedPalette> {
        self.palettes.iter().find(|palette| &palette.id == id)
    }

    pub fn update(&mut self, id: &PaletteId, changes: PaletteUpdate) -> Option<SavedPalette> {
        let palette = self.palettes.iter_mut().find(|palette| &palette.id == id)?;
        palette.apply(changes);
        Some(palette.clone())
    }

    pub fn delete(&mut self, id: &PaletteId) -> bool {
        let before = self.palettes.len();
        self.palettes.retain(|palette| &palette.id != id);
        self.palettes.len() != before
    }

    #[must_use]
    pub fn palettes(&self) -> &[SavedPalette] {
        &self.palettes
    }

    pub fn clear(&mut self) {
        self.palettes.clear();
    }

    pub fn replace_all(&mut self, palettes: Vec<SavedPalette>) {
        *self = Self::from_palettes(palettes);
    }

    #[must_use]
    pub fn to_document(&self) -> LibraryDocument {
        LibraryDocument {
            palettes: self.palettes.clone(),
        }
    }
}

impl From<LibraryDocument> for LibraryState {
    fn from(document: LibraryDocument) -> Self {
        Self::from_palettes(document.palettes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> ColorKey {
        ColorKey::from_rgb(255, 0, 0)
    }

    #[test]
    fn added_palettes_keep_insertion_order_and_unique_ids() {
        let mut state = LibraryState::new();
        let first = state.add(vec![red()], Some("First".into()));
        let second = state.add(vec![red()], None);

        assert_ne!(first.id, second.id);
        let names: Vec<&str> = state.palettes().iter().map(SavedPalette::display_name).collect();
        assert_eq!(names, vec!["First", "Untitled Palette"]);
    }

    #[test]
    fn unknown_ids_leave_state_untouched() {
        let mut state = LibraryState::new();
        state.add(vec![red()], None);

        assert!(state.update(&PaletteId::from("missing"), PaletteUpdate::default()).is_none());
        assert!(!state.delete(&PaletteId::from("missing")));
        assert_eq!(state.palettes().len(), 1);
    }

    #[test]
    fn ids_continue_after_loaded_palettes() {
        let future_id = PaletteId::from("99999999999999");
        let mut state =
            LibraryState::from_palettes(vec![SavedPalette::new(future_id.clone(), vec![], None)]);

        let added = state.add(vec![red()], None);
        assert_eq!(added.id.as_str(), "100000000000000");
        assert_eq!(state.get(&future_id).map(|p| p.colors.len()), Some(0));
    }
}

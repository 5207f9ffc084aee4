use domain::color::ColorKey;
use domain::library::{PaletteId, PaletteUpdate, SavedPalette};
use palette_snap_application::{error::AppResult, ports::outgoing::palette_store::PaletteStorePort};
use tokio::sync::RwLock;
use tracing::instrument;

use super::library_state::LibraryState;

#[derive(Default)]
pub struct InMemoryPaletteStoreAdapter {
    state: RwLock<LibraryState>,
}

impl InMemoryPaletteStoreAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl PaletteStorePort for InMemoryPaletteStoreAdapter {
    #[instrument(skip(self, colors))]
    async fn add(&self, colors: Vec<ColorKey>, name: Option<String>) -> AppResult<SavedPalette> {
        Ok(self.state.write().await.add(colors, name))
    }

    async fn get(&self, id: &PaletteId) -> AppResult<Option<SavedPalette>> {
        Ok(self.state.read().await.get(id).cloned())
    }

    #[instrument(skip(self, changes))]
    async fn update(
        &self,
        id: &PaletteId,
        changes: PaletteUpdate,
    ) -> AppResult<Option<SavedPalette>> {
        Ok(self.state.write().await.update(id, changes))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &PaletteId) -> AppResult<bool> {
        Ok(self.state.write().await.delete(id))
    }

    async fn list(&self) -> AppResult<Vec<SavedPalette>> {
        Ok(self.state.read().await.palettes().to_vec())
    }

    async fn clear(&self) -> AppResult<()> {
        self.state.write().await.clear();
        Ok(())
    }

    async fn replace_all(&self, palettes: Vec<SavedPalette>) -> AppResult<()> {
        self.state.write().await.replace_all(palettes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_update_delete_cycle() {
        let store = InMemoryPaletteStoreAdapter::new();
        let saved = store
            .add(vec![ColorKey::from_rgb(1, 2, 3)], Some("Name".into()))
            .await
            .unwrap();

        let renamed = store
            .update(
                &saved.id,
                PaletteUpdate {
                    colors: None,
                    name: Some("Dusk".into()),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(renamed.display_name(), "Dusk");
        assert_eq!(renamed.colors, saved.colors);

        assert!(store.delete(&saved.id).await.unwrap());
        assert!(!store.delete(&saved.id).await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn replace_all_swaps_contents() {
        let store = InMemoryPaletteStoreAdapter::new();
        store.add(vec![], None).await.unwrap();

        store
            .replace_all(vec![SavedPalette::new(PaletteId::from("1"), vec![], None)])
            .await
            .unwrap();

        let ids: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|palette| palette.id.0)
            .collect();
        assert_eq!(ids, vec!["1"]);
    }
}

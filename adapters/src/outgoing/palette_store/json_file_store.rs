use std::fmt::Display;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use domain::color::ColorKey;
use domain::library::{PaletteId, PaletteUpdate, SavedPalette};
use palette_snap_application::{
    error::{AppError, AppResult},
    ports::outgoing::palette_store::PaletteStorePort,
};
use tokio::{fs, sync::RwLock};
use tracing::{debug, info, instrument};

use super::library_state::{LibraryDocument, LibraryState};

/// Palette library persisted as a single JSON document.
///
/// Every mutation is applied to a copy, written to disk, and only then made
/// visible. A failed write leaves both the file and the in-memory view at
/// their previous state.
pub struct JsonFilePaletteStoreAdapter {
    path: PathBuf,
    state: RwLock<LibraryState>,
}

fn storage_error(action: &str, path: &Path, error: impl Display) -> AppError {
    AppError::StorageError {
        message: format!("Failed to {action} {}: {error}", path.display()),
    }
}

impl JsonFilePaletteStoreAdapter {
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();

        let state = match fs::read(&path).await {
            Ok(bytes) => {
                let document: LibraryDocument = serde_json::from_slice(&bytes)
                    .map_err(|e| storage_error("parse", &path, e))?;
                LibraryState::from(document)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No palette file at {}, starting empty", path.display());
                LibraryState::new()
            }
            Err(e) => return Err(storage_error("read", &path, e)),
        };

        info!(
            "Loaded {} palettes from {}",
            state.palettes().len(),
            path.display()
        );

        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, state: &LibraryState) -> AppResult<()> {
        let bytes = serde_json::to_vec_pretty(&state.to_document())
            .map_err(|e| storage_error("serialize", &self.path, e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error("create directory for", &self.path, e))?;
        }

        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        let staging = PathBuf::from(staging);

        fs::write(&staging, bytes)
            .await
            .map_err(|e| storage_error("write", &staging, e))?;
        fs::rename(&staging, &self.path)
            .await
            .map_err(|e| storage_error("replace", &self.path, e))?;

        debug!("Saved {} palettes", state.palettes().len());
        Ok(())
    }

    async fn mutate<T>(&self, mutate: impl FnOnce(&mut LibraryState) -> T) -> AppResult<T> {
        let mut guard = self.state.write().await;
        let mut next = guard.clone();
        let outcome = mutate(&mut next);
        self.persist(&next).await?;
        *guard = next;
        Ok(outcome)
    }
}

#[async_trait::async_trait]
impl PaletteStorePort for JsonFilePaletteStoreAdapter {
    #[instrument(skip(self, colors))]
    async fn add(&self, colors: Vec<ColorKey>, name: Option<String>) -> AppResult<SavedPalette> {
        self.mutate(|state| state.add(colors, name)).await
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
        let mut guard = self.state.write().await;
        if guard.get(id).is_none() {
            return Ok(None);
        }
        let mut next = guard.clone();
        let updated = next.update(id, changes);
        self.persist(&next).await?;
        *guard = next;
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &PaletteId) -> AppResult<bool> {
        let mut guard = self.state.write().await;
        if guard.get(id).is_none() {
            return Ok(false);
        }
        let mut next = guard.clone();
        let removed = next.delete(id);
        self.persist(&next).await?;
        *guard = next;
        Ok(removed)
    }

    async fn list(&self) -> AppResult<Vec<SavedPalette>> {
        Ok(self.state.read().await.palettes().to_vec())
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> AppResult<()> {
        self.mutate(LibraryState::clear).await
    }

    #[instrument(skip(self, palettes), fields(count = palettes.len()))]
    async fn replace_all(&self, palettes: Vec<SavedPalette>) -> AppResult<()> {
        self.mutate(|state| state.replace_all(palettes)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_path(dir: &TempDir) -> PathBuf {
        dir.path().join("palette-storage.json")
    }

    #[tokio::test]
    async fn missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFilePaletteStoreAdapter::open(store_path(&dir)).await.unwrap();

        assert!(store.list().await.unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn mutations_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        let teal = ColorKey::from_rgb(0, 128, 128);

        let store = JsonFilePaletteStoreAdapter::open(&path).await.unwrap();
        let kept = store.add(vec![teal], Some("Name".into())).await.unwrap();
        let dropped = store.add(vec![teal], None).await.unwrap();
        store
            .update(
                &kept.id,
                PaletteUpdate {
                    colors: None,
                    name: Some("Lagoon".into()),
                },
            )
            .await
            .unwrap();
        assert!(store.delete(&dropped.id).await.unwrap());

        let reopened = JsonFilePaletteStoreAdapter::open(&path).await.unwrap();
        let palettes = reopened.list().await.unwrap();
        assert_eq!(palettes.len(), 1);
        assert_eq!(palettes[0].id, kept.id);
        assert_eq!(palettes[0].display_name(), "Lagoon");
        assert_eq!(palettes[0].colors, vec![teal]);
    }

    #[tokio::test]
    async fn file_holds_palettes_document_with_hex_colors() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        let store = JsonFilePaletteStoreAdapter::open(&path).await.unwrap();
        store
            .add(vec![ColorKey::from_rgb(255, 170, 0)], None)
            .await
            .unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&fs::read(&path).await.unwrap()).unwrap();
        assert_eq!(raw["palettes"][0]["colors"][0], "#FFAA00");
    }

    #[tokio::test]
    async fn unknown_ids_do_not_touch_disk() {
        let dir = TempDir::new().unwrap();
        let store = JsonFilePaletteStoreAdapter::open(store_path(&dir)).await.unwrap();

        assert!(!store.delete(&PaletteId::from("nope")).await.unwrap());
        assert!(
            store
                .update(&PaletteId::from("nope"), PaletteUpdate::default())
                .await
                .unwrap()
                .is_none()
        );
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn corrupt_file_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        fs::write(&path, b"{ not json").await.unwrap();

        let result = JsonFilePaletteStoreAdapter::open(&path).await;
        assert!(matches!(result, Err(AppError::StorageError { .. })));
    }

    #[tokio::test]
    async fn clear_empties_the_file() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        let store = JsonFilePaletteStoreAdapter::open(&path).await.unwrap();
        store.add(vec![], None).await.unwrap();
        store.clear().await.unwrap();

        let reopened = JsonFilePaletteStoreAdapter::open(&path).await.unwrap();
        assert!(reopened.list().await.unwrap().is_empty());
    }
}

use super::product_store::ProductStore;
use super::CatalogBackend;
use crate::config::{default_data_dir, StockroomConfig};
use crate::error::{Result, StockroomError};
use crate::model::Product;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed catalog store.
pub type FileStore = ProductStore<FileBackend>;

impl FileStore {
    /// Open a catalog persisted at `path`, starting empty if the file is
    /// absent or unreadable.
    pub fn open_path<P: AsRef<Path>>(path: P) -> Self {
        ProductStore::open(FileBackend::new(path))
    }

    /// Open the catalog kept under `dir`, with the data filename resolved
    /// through the directory's [`StockroomConfig`] (or its defaults when no
    /// config file exists).
    pub fn open_in<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let config = StockroomConfig::load(dir)?;
        Ok(Self::open_path(config.data_file(dir)))
    }

    /// Open the user-wide default catalog, e.g. under
    /// `~/.local/share/stockroom` on Linux.
    pub fn open_default() -> Result<Self> {
        let dir = default_data_dir().ok_or_else(|| {
            StockroomError::Io(std::io::Error::other("no user data directory available"))
        })?;
        Self::open_in(dir)
    }
}

/// Stores the entire catalog as one pretty-printed JSON array in a single
/// file. Every save rewrites the whole file via a temp sibling and rename.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StockroomError::Io)?;
            }
        }
        Ok(())
    }
}

impl CatalogBackend for FileBackend {
    fn load(&self) -> Result<Option<Vec<Product>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(StockroomError::Io)?;
        let catalog: Vec<Product> =
            serde_json::from_str(&content).map_err(StockroomError::Serialization)?;
        Ok(Some(catalog))
    }

    fn save(&self, catalog: &[Product]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content =
            serde_json::to_string_pretty(catalog).map_err(StockroomError::Serialization)?;

        // Write to a temp sibling first so a failure mid-write cannot
        // clobber the existing catalog.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(StockroomError::Io)?;
        fs::rename(&tmp, &self.path).map_err(StockroomError::Io)?;
        Ok(())
    }
}

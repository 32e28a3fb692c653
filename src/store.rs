//! Cart store

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::cart::Cart;

/// Errors that can occur while reading or writing the persisted cart.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The platform has no data directory to default the store path into.
    #[error("could not determine a data directory for this platform")]
    NoDataDir,

    /// Wrapped filesystem error.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Wrapped JSON serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// File-backed persistence for a single cart.
///
/// The whole cart is held under one key: a JSON array of items in a single
/// file, fully overwritten on every save. A missing or unparseable file
/// reads back as an empty cart.
#[derive(Debug, Clone)]
pub struct CartStore {
    path: PathBuf,
}

impl CartStore {
    /// Creates a store persisting to the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CartStore { path: path.into() }
    }

    /// Creates a store at the platform-default location,
    /// `<data dir>/koszyk/cart.json`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoDataDir`] when the platform data directory
    /// cannot be determined.
    pub fn at_default_location() -> Result<Self, StoreError> {
        let data_dir = dirs::data_dir().ok_or(StoreError::NoDataDir)?;

        Ok(CartStore::new(data_dir.join("koszyk").join("cart.json")))
    }

    /// The file this store persists to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted cart.
    ///
    /// A missing file or contents that fail to parse yield an empty cart
    /// rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] for filesystem failures other than the
    /// file not existing.
    pub fn load(&self) -> Result<Cart, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Cart::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Persists the cart, fully overwriting any prior value.
    ///
    /// Parent directories are created on demand.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] for filesystem failures and
    /// [`StoreError::Json`] when the cart cannot be serialized.
    pub fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(cart)?;
        fs::write(&self.path, json)?;

        Ok(())
    }

    /// Persists an empty cart.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the empty cart cannot be written.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.save(&Cart::new())
    }
}

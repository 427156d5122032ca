// src/repositories/address_book_repository.rs
//
// Address book persistence

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::domain::{AddressBook, SportRegistry};
use crate::error::AppResult;
use crate::infrastructure::LocationLookup;
use crate::repositories::json_adapted::JsonSerializableAddressBook;

pub const DEFAULT_ADDRESS_BOOK_PATH: &str = "data/addressbook.json";

pub trait AddressBookRepository: Send + Sync {
    fn file_path(&self) -> &Path;

    /// `Ok(None)` when nothing has been saved yet
    fn read(
        &self,
        registry: &SportRegistry,
        lookup: &dyn LocationLookup,
    ) -> AppResult<Option<AddressBook>>;

    fn save(&self, book: &AddressBook) -> AppResult<()>;
}

pub struct JsonAddressBookRepository {
    path: PathBuf,
}

impl JsonAddressBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AddressBookRepository for JsonAddressBookRepository {
    fn file_path(&self) -> &Path {
        &self.path
    }

    fn read(
        &self,
        registry: &SportRegistry,
        lookup: &dyn LocationLookup,
    ) -> AppResult<Option<AddressBook>> {
        if !self.path.exists() {
            warn!("Address book file {} not found", self.path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let json: JsonSerializableAddressBook = serde_json::from_str(&content)?;
        let book = json.to_model(registry, lookup)?;

        info!(
            "Loaded {} persons and {} games from {}",
            book.persons().len(),
            book.games().len(),
            self.path.display()
        );
        Ok(Some(book))
    }

    fn save(&self, book: &AddressBook) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = JsonSerializableAddressBook::from_model(book);
        fs::write(&self.path, serde_json::to_string_pretty(&json)?)?;
        Ok(())
    }
}

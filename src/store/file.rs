use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use super::{ContactStore, create_file_parent};
use crate::domain::contact::Contact;
use crate::errors::AppError;

/// Production backend: one file holding the entire contact list as a
/// single bincode blob. Every save is a truncating whole-file overwrite.
pub struct DatStorage {
    pub path: String,
}

impl DatStorage {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

impl ContactStore for DatStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        // A data file that does not exist yet is not an error
        if !fs::exists(Path::new(&self.path))? {
            return Ok(Vec::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        if data.is_empty() {
            return Ok(Vec::new());
        }

        let (contacts, _): (Vec<Contact>, usize) =
            bincode::serde::decode_from_slice(&data, bincode::config::standard())?;
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let path = Path::new(&self.path);
        if !path.exists() {
            create_file_parent(&self.path)?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        let encoded = bincode::serde::encode_to_vec(contacts, bincode::config::standard())?;
        file.write_all(&encoded)?;

        Ok(())
    }
}

pub mod file;
pub mod memory;

use std::fs;
use std::path::Path;

use crate::domain::contact::Contact;
use crate::errors::AppError;

/// Storage port for the contact book. Backends load and save the whole
/// list in one shot, there is no partial update.
pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;
}

pub const DEFAULT_DATA_PATH: &str = "./contacts.dat";

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

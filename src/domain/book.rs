use uuid::Uuid;

use crate::domain::contact::Contact;
use crate::errors::AppError;
use crate::store::ContactStore;

/// The contact book: an ordered in-memory list of contacts mirrored to a
/// storage backend after every mutation. The backend is passed in by the
/// caller, there is no global store.
pub struct ContactBook {
    mem: Vec<Contact>,
    storage: Box<dyn ContactStore>,
}

impl ContactBook {
    /// Loads the persisted contacts from `storage`. A backend that cannot
    /// be read degrades to an empty book, the failure is only logged.
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        let mem = match storage.load() {
            Ok(contacts) => {
                log::debug!("loaded {} contact(s)", contacts.len());
                contacts
            }
            Err(err) => {
                log::error!("failed to load contacts, starting empty: {}", err);
                Vec::new()
            }
        };

        Self { mem, storage }
    }

    /// Appends `contact` at the end of the list and returns its id.
    pub fn add_contact(&mut self, contact: Contact) -> Uuid {
        let id = contact.id;
        self.mem.push(contact);
        self.persist();
        id
    }

    /// Replaces the contact with matching id. The stored id is kept, only
    /// the five text fields of `updated` are taken over.
    pub fn update_contact(&mut self, id: &Uuid, mut updated: Contact) -> Result<(), AppError> {
        match self.mem.iter_mut().find(|c| &c.id == id) {
            Some(slot) => {
                updated.id = *id;
                *slot = updated;
                self.persist();
                Ok(())
            }
            None => Err(AppError::NotFound("Contact".to_string())),
        }
    }

    pub fn delete_contact(&mut self, id: &Uuid) -> Result<(), AppError> {
        match self.mem.iter().position(|c| &c.id == id) {
            Some(index) => {
                self.mem.remove(index);
                self.persist();
                Ok(())
            }
            None => Err(AppError::NotFound("Contact".to_string())),
        }
    }

    pub fn get_contact(&self, id: &Uuid) -> Option<&Contact> {
        self.mem.iter().find(|c| &c.id == id)
    }

    /// Every contact, insertion order preserved.
    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    /// Linear scan over the list, insertion order preserved. First name,
    /// last name and email match case-insensitively, phone verbatim.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let lowered = query.to_lowercase();

        self.mem
            .iter()
            .filter(|c| c.matches(query, &lowered))
            .collect()
    }

    // Whole-file rewrite after every mutation. The working set is small,
    // so re-serializing the entire list is acceptable. A save failure is
    // logged and swallowed, never surfaced to the caller.
    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.mem) {
            log::error!("failed to save contacts: {}", err);
        }
    }
}

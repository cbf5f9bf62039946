use std::cell::RefCell;
use std::rc::Rc;

use super::ContactStore;
use crate::domain::contact::Contact;
use crate::errors::AppError;

/// In-memory backend for tests and benches. Clones share the same
/// underlying list, so a fresh book over a clone sees earlier saves.
#[derive(Clone, Default)]
pub struct MemStorage {
    data: Rc<RefCell<Vec<Contact>>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(contacts: Vec<Contact>) -> Self {
        Self {
            data: Rc::new(RefCell::new(contacts)),
        }
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        Ok(())
    }
}

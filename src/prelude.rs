pub use crate::cli::{command, run_app};
pub use crate::domain::{
    book::ContactBook,
    contact::{self, Contact},
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, file::DatStorage, memory::MemStorage};
pub use uuid::Uuid;

use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Path to the contacts data file
    #[arg(long, env = "CONTACTS_DATA_PATH", default_value_t = String::from(crate::store::DEFAULT_DATA_PATH))]
    pub data_path: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact first name
        #[arg(long)]
        first_name: String,

        /// Contact last name
        #[arg(long)]
        last_name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,

        /// Contact postal address
        #[arg(long)]
        address: Option<String>,
    },
    /// List contacts in the order they were added
    List,
    /// Search contacts by name, email or phone substring
    Search {
        /// Substring to look for
        query: String,
    },
    /// Edit the data of an existing contact
    /// Provide the contact id followed by the fields you wish to update
    Edit {
        /// Id of the contact to edit (shown by list)
        #[arg(long)]
        id: Uuid,

        /// Update first name
        #[arg(long)]
        first_name: Option<String>,

        /// Update last name
        #[arg(long)]
        last_name: Option<String>,

        /// Update phone number
        #[arg(long)]
        phone: Option<String>,

        /// Update email address
        #[arg(long)]
        email: Option<String>,

        /// Update postal address
        #[arg(long)]
        address: Option<String>,
    },
    /// Delete a contact by id
    Delete {
        /// Id of the contact to delete (shown by list)
        #[arg(long)]
        id: Uuid,
    },
}

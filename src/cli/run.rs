use clap::Parser;
use dotenv::dotenv;

use crate::cli::command::{Cli, Commands};
use crate::domain::book::ContactBook;
use crate::domain::contact::Contact;
use crate::errors::AppError;
use crate::store::file::DatStorage;
use crate::validation::missing_required_field;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();

    let storage = DatStorage::new(&cli.data_path);
    let mut book = ContactBook::new(Box::new(storage));

    match cli.command {
        Commands::Add {
            first_name,
            last_name,
            phone,
            email,
            address,
        } => {
            let new_contact = Contact::new(
                first_name,
                last_name,
                phone,
                email.unwrap_or_default(),
                address.unwrap_or_default(),
            );

            // Presence validation happens here, before any mutation
            if let Some(field) = missing_required_field(&new_contact) {
                return Err(AppError::Validation(format!("{} is required", field)));
            }

            let id = book.add_contact(new_contact);

            println!("Contact added successfully: {}", id);
            Ok(())
        }

        Commands::List => {
            if book.contact_list().is_empty() {
                println!("No contacts yet");
                return Ok(());
            }

            for (i, contact) in book.contact_list().iter().enumerate() {
                print_listing_row(i + 1, contact);
            }
            Ok(())
        }

        Commands::Search { query } => {
            let found = book.search(&query);

            if found.is_empty() {
                println!("No matching contact found");
                return Ok(());
            }

            for (i, contact) in found.iter().enumerate() {
                print_listing_row(i + 1, contact);
            }
            Ok(())
        }

        Commands::Edit {
            id,
            first_name,
            last_name,
            phone,
            email,
            address,
        } => {
            let mut updated = book
                .get_contact(&id)
                .ok_or(AppError::NotFound("Contact".to_string()))?
                .clone();

            if let Some(first_name) = first_name {
                updated.first_name = first_name;
            }
            if let Some(last_name) = last_name {
                updated.last_name = last_name;
            }
            if let Some(phone) = phone {
                updated.phone = phone;
            }
            if let Some(email) = email {
                updated.email = email;
            }
            if let Some(address) = address {
                updated.address = address;
            }

            if let Some(field) = missing_required_field(&updated) {
                return Err(AppError::Validation(format!("{} is required", field)));
            }

            book.update_contact(&id, updated)?;

            println!("Contact updated successfully");
            Ok(())
        }

        Commands::Delete { id } => {
            let deleted = book
                .get_contact(&id)
                .ok_or(AppError::NotFound("Contact".to_string()))?
                .to_string();

            book.delete_contact(&id)?;

            println!("Contact deleted successfully: {}", deleted);
            Ok(())
        }
    }
}

fn print_listing_row(position: usize, contact: &Contact) {
    println!(
        "{position:>3}. {} {:<25} {:<15} {:<30} {}",
        contact.id,
        contact.full_name(),
        contact.phone,
        contact.email,
        contact.address
    );
}

use assert_cmd::Command;
use predicates::prelude::*;
use uuid::Uuid;

/// Fresh data file path per test so tests never share state.
pub fn data_path(label: &str) -> String {
    std::env::temp_dir()
        .join(format!("contact_book_cli_{}_{}.dat", label, Uuid::new_v4()))
        .to_string_lossy()
        .to_string()
}

pub fn cli(data_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("contact-book").unwrap();
    cmd.env("CONTACTS_DATA_PATH", data_path);
    cmd
}

/// Adds a contact and returns the id printed by the binary.
pub fn add_contact(data_path: &str, first: &str, last: &str, phone: &str, email: &str) -> String {
    let output = cli(data_path)
        .args([
            "add",
            "--first-name",
            first,
            "--last-name",
            last,
            "--phone",
            phone,
            "--email",
            email,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully"))
        .get_output()
        .stdout
        .clone();

    String::from_utf8_lossy(&output)
        .split_whitespace()
        .last()
        .expect("add output ends with the new contact id")
        .to_string()
}

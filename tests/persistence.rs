mod common;

use common::{add_contact, cli, data_path};
use predicates::prelude::*;
use std::fs;

#[test]
fn every_mutation_survives_a_restart() {
    let path = data_path("restart");

    // Each CLI invocation is a separate process, so every assertion
    // below exercises a full save/load round-trip through the data file.
    let ann_id = add_contact(&path, "Ann", "Lee", "555-1111", "ann@x.com");
    add_contact(&path, "Bob", "Lee", "555-2222", "bob@x.com");

    cli(&path)
        .args(["edit", "--id", &ann_id, "--first-name", "Anna"])
        .assert()
        .success();

    cli(&path)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Anna Lee"))
        .stdout(predicate::str::contains("Bob Lee"));

    cli(&path)
        .args(["delete", "--id", &ann_id])
        .assert()
        .success();

    cli(&path)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob Lee"))
        .stdout(predicate::str::contains("Anna Lee").not());

    let _ = fs::remove_file(&path);
}

#[test]
fn corrupt_data_file_degrades_to_an_empty_book() {
    let path = data_path("corrupt");

    add_contact(&path, "Ann", "Lee", "555-1111", "ann@x.com");

    // Clobber the blob with bytes that cannot decode
    fs::write(&path, b"garbage, not a contact list").unwrap();

    cli(&path)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts yet"));

    let _ = fs::remove_file(&path);
}

mod common;

use common::{add_contact, cli, data_path};
use predicates::prelude::*;
use std::fs;

#[test]
fn deleting_contacts() {
    let path = data_path("delete");

    // Attempt to delete a contact that was never added
    cli(&path)
        .args(["delete", "--id", "00000000-0000-0000-0000-000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact Not found"));

    let ann_id = add_contact(&path, "Ann", "Lee", "555-1111", "ann@x.com");
    let bob_id = add_contact(&path, "Bob", "Lee", "555-2222", "bob@x.com");

    cli(&path)
        .args(["delete", "--id", &ann_id])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Contact deleted successfully: Ann Lee - 555-1111",
        ));

    // Only Bob remains, and the deletion survived the process restart
    cli(&path)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob Lee"))
        .stdout(predicate::str::contains("Ann Lee").not());

    // Deleting the same id twice fails the second time
    cli(&path)
        .args(["delete", "--id", &ann_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact Not found"));

    // Emptying the book persists too
    cli(&path)
        .args(["delete", "--id", &bob_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully"));

    cli(&path)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts yet"));

    let _ = fs::remove_file(&path);
}

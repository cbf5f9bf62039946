use std::process::exit;

use contact_book::cli::run_app;

fn main() {
    env_logger::init();

    if let Err(err) = run_app() {
        eprintln!("{}", err);
        exit(1);
    }
}

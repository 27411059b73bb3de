use kbudget_core::cli::{output, run_cli};

fn main() {
    kbudget_core::init();

    if let Err(err) = run_cli() {
        output::error(err);
        std::process::exit(1);
    }
}

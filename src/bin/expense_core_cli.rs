use expense_core::{cli::run_cli, config::ConfigManager, init};

fn main() {
    init();

    let config = match ConfigManager::new().load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run_cli(&config) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

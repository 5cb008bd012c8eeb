use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::warning;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the data folder
///  - the store for the configured backend
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ CONFIGURATION
    //
    let cfg = Config::init_all(cli.dir.clone(), cli.backend, cli.test)?;
    let data_path = cfg.data_path();

    println!("⚙️  Initializing worktimer…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Store       : {}", cfg.store_file().display());

    //
    // 2️⃣ STORE (tables, migrations or empty document)
    //
    let store = open_store(cfg.backend, &data_path)?;

    println!(
        "✅ {} store ready at {}",
        store.backend().as_str(),
        store.location().display()
    );

    //
    // 3️⃣ INTERNAL LOG (non-blocking)
    //
    if let Err(e) = store.log(
        "init",
        &store.location().display().to_string(),
        "Store initialized",
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 worktimer initialization completed!");
    Ok(())
}

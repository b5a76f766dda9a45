use repostore::config::{self, Config};
use repostore::error::Result;
use std::path::PathBuf;

use super::DEFAULT_CONFIG;

/// Initialize repostore.toml configuration file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    config::save(&Config::default(), &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!("\nNext steps:");
    println!(
        "1. Edit {} to point data_file at your repository document",
        config_path.display()
    );
    println!("2. Run 'repostore repo init --name <NAME> --url <URL>' to create it");

    Ok(())
}

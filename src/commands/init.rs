use anyhow::Result;
use std::path::PathBuf;

use crate::config;
use crate::io;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(config::CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, config::default_config_toml())?;
    println!("Created {} configuration file", config::CONFIG_FILE);

    Ok(())
}

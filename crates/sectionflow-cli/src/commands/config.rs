use anyhow::Result;

use sectionflow_core::AppConfig;

pub fn run(config: &AppConfig, write: bool) -> Result<()> {
    print!("{}", config.to_toml()?);

    if write {
        config.save()?;
        eprintln!("Wrote {}", AppConfig::config_path().display());
    }
    Ok(())
}

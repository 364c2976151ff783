use anyhow::{Result, bail};
use std::path::Path;
use stockroom_runtime::Config;
use tracing::info;

pub fn show(path: &Path, config: &Config) -> Result<()> {
    let status = if path.exists() { "" } else { " (not created yet)" };
    println!("# {}{}", path.display(), status);
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    info!(path = %path.display(), "wrote default config");
    println!("Wrote {}", path.display());
    Ok(())
}

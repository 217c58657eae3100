use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::ledger::{Ledger, LEDGER_FILE_NAME};

/// Startup configuration. The ledger lives next to the executable.
#[derive(Debug, Clone)]
pub struct Config {
    pub ledger_path: PathBuf,
}

impl Config {
    pub fn from_current_exe() -> Result<Config> {
        let exe = env::current_exe().context("failed to resolve the executable path")?;
        let dir = exe.parent().context("executable has no parent directory")?;

        Ok(Config {
            ledger_path: dir.join(LEDGER_FILE_NAME),
        })
    }

    pub fn ledger(&self) -> Ledger {
        Ledger::new(&self.ledger_path)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    #[test]
    fn test_ledger_next_to_executable() -> Result<()> {
        let config = Config::from_current_exe()?;
        let exe_dir = env::current_exe()?.parent().map(PathBuf::from);

        assert_eq!(config.ledger_path.file_name().and_then(|name| name.to_str()), Some("gastos.csv"));
        assert_eq!(config.ledger_path.parent().map(PathBuf::from), exe_dir);
        assert_eq!(config.ledger().path(), config.ledger_path.as_path());

        Ok(())
    }
}

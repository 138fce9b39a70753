use std::path::PathBuf;

use anyhow::anyhow;
use clap::Args;

static APP_DIR: &str = ".mood-tracker";

#[derive(Args, Debug, Clone)]
pub(crate) struct ConfigArgs {
    /// Directory holding the persisted history [default: ~/.mood-tracker]
    #[arg(long, global = true, env = "MOOD_TRACKER_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, global = true, env = "MOOD_TRACKER_LOG", default_value = "warn")]
    pub log_level: String,

    /// Keep the history in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StorageLocation {
    Directory(PathBuf),
    Memory,
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub storage: StorageLocation,
    pub log_level: String,
}

impl Config {
    pub(crate) fn resolve(args: ConfigArgs) -> anyhow::Result<Self> {
        let storage = if args.ephemeral {
            StorageLocation::Memory
        } else {
            match args.data_dir {
                Some(dir) => StorageLocation::Directory(dir),
                None => StorageLocation::Directory(default_data_dir()?),
            }
        };
        Ok(Self {
            storage,
            log_level: args.log_level,
        })
    }
}

fn default_data_dir() -> anyhow::Result<PathBuf> {
    let home = homedir::my_home()
        .map_err(|err| anyhow!("failed to look up home directory: {err:?}"))?
        .ok_or_else(|| anyhow!("no home directory; pass --data-dir"))?;
    Ok(home.join(APP_DIR))
}

use crate::data::encounters::ZonePolicy;
use crate::error::{Result, WikiError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "xenowiki.yaml";

/// Lines of tm.txt before this index are TM entries, the rest are tutor moves.
pub const DEFAULT_TM_SECTION_END: usize = 194;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding pokemon.txt, tm.txt and encounters.txt.
    pub data_dir: PathBuf,
    /// Directory holding the JSON lookup tables.
    pub references_dir: PathBuf,
    /// Skip zones whose location was already seen instead of merging them.
    pub dedupe_locations: bool,
    pub tm_section_end: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("gamedata"),
            references_dir: PathBuf::from("references"),
            dedupe_locations: false,
            tm_section_end: DEFAULT_TM_SECTION_END,
        }
    }
}

impl Config {
    pub fn load_from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load_from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| WikiError::io(path, e))?;
        Self::load_from_yaml_str(&content)
    }

    /// Reads `.env`, then the YAML file named by `XENOWIKI_CONFIG` (or
    /// `xenowiki.yaml` if present), then applies directory overrides from
    /// the environment.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let mut config = match env::var("XENOWIKI_CONFIG") {
            Ok(path) => Self::load_from_yaml_file(Path::new(&path))?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from_yaml_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            Err(_) => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(dir) = env::var("XENOWIKI_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = env::var("XENOWIKI_REFERENCES_DIR") {
            self.references_dir = PathBuf::from(dir);
        }
    }

    pub fn zone_policy(&self) -> ZonePolicy {
        if self.dedupe_locations {
            ZonePolicy::FirstPerLocation
        } else {
            ZonePolicy::KeepAll
        }
    }

    pub fn pokemon_path(&self) -> PathBuf {
        self.data_dir.join("pokemon.txt")
    }

    pub fn tm_path(&self) -> PathBuf {
        self.data_dir.join("tm.txt")
    }

    pub fn encounters_path(&self) -> PathBuf {
        self.data_dir.join("encounters.txt")
    }
}

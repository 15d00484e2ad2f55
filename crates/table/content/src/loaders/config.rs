//! Resource root configuration.
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// On-disk encoding of table files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TableFormat {
    #[default]
    Toml,
    Ron,
}

impl TableFormat {
    /// File extension without the leading dot.
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Ron => "ron",
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "ron" => Ok(Self::Ron),
            other => Err(format!("unknown table format '{other}' (expected toml or ron)")),
        }
    }
}

/// Where tables live and how they are encoded.
///
/// The resource root is always supplied by the caller; nothing is discovered
/// from the running binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TablesConfig {
    pub resource_root: PathBuf,
    pub format: TableFormat,
}

impl TablesConfig {
    /// Default resource root when `TABLES_DIR` is not set.
    pub const DEFAULT_ROOT: &'static str = "tables";

    pub fn new(resource_root: impl Into<PathBuf>) -> Self {
        Self {
            resource_root: resource_root.into(),
            format: TableFormat::default(),
        }
    }

    pub fn with_format(mut self, format: TableFormat) -> Self {
        self.format = format;
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TABLES_DIR` - Resource root holding table files (default: `tables`)
    /// - `TABLES_FORMAT` - `toml` or `ron` (default: `toml`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(root) = env::var("TABLES_DIR") {
            config.resource_root = PathBuf::from(root);
        }

        if let Some(format) = read_env::<TableFormat>("TABLES_FORMAT") {
            config.format = format;
        }

        config
    }

    /// Path of the file backing `table_name`.
    pub fn table_path(&self, table_name: &str) -> PathBuf {
        self.resource_root
            .join(format!("{}.{}", table_name, self.format.extension()))
    }

    pub fn resource_root(&self) -> &Path {
        &self.resource_root
    }
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROOT)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok()?.parse().ok()
}

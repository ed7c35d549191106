use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::info;

use crate::schema::Shape;
use crate::util::{sha256_bytes, to_json_pretty, write_atomic};

pub const DEFAULT_DB_PATH: &str = "templates.json";

#[derive(Debug)]
pub struct Database {
    pub path: PathBuf,
    pub root: Value,
    digest: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SaveOutcome {
    Written,
    Unchanged,
}

impl Database {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                bail!("database not found: {}", path.display())
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            }
        };

        let root: Value = serde_json::from_slice(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            root,
            digest: sha256_bytes(&raw),
        })
    }

    pub fn shape(&self) -> Result<Shape> {
        Shape::detect(&self.root)
            .with_context(|| format!("malformed database {}", self.path.display()))
    }

    pub fn save(&mut self) -> Result<SaveOutcome> {
        let data = to_json_pretty(&self.root)?;
        let digest = sha256_bytes(&data);
        if digest == self.digest {
            info!(path = %self.path.display(), "database unchanged; skipping write");
            return Ok(SaveOutcome::Unchanged);
        }

        write_atomic(&self.path, &data)?;
        self.digest = digest;
        info!(path = %self.path.display(), bytes = data.len(), "wrote database");
        Ok(SaveOutcome::Written)
    }
}

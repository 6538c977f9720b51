use crate::error::Result;
use crate::models::QuizData;
use crate::storage::QuizStore;
use async_trait::async_trait;
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_raw(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Like `load`, but a file that does not parse is an `Error::Json` and is
    /// left where it is.
    pub async fn load_strict(&self) -> Result<QuizData> {
        match self.read_raw().await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(QuizData::default()),
        }
    }

    async fn quarantine(&self) -> Result<PathBuf> {
        let mut aside = self.path.clone().into_os_string();
        aside.push(format!(".corrupt.{}", Utc::now().timestamp()));
        let aside = PathBuf::from(aside);
        fs::rename(&self.path, &aside).await?;
        Ok(aside)
    }
}

#[async_trait]
impl QuizStore for JsonFileStore {
    async fn load(&self) -> Result<QuizData> {
        let Some(raw) = self.read_raw().await? else {
            return Ok(QuizData::default());
        };

        match serde_json::from_str(&raw) {
            Ok(data) => Ok(data),
            Err(err) => {
                let aside = self.quarantine().await?;
                tracing::warn!(
                    error = %err,
                    moved_to = %aside.display(),
                    "Data file is corrupted, starting with an empty store"
                );
                Ok(QuizData::default())
            }
        }
    }

    async fn save(&self, data: &QuizData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let payload = serde_json::to_string_pretty(data)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, payload).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

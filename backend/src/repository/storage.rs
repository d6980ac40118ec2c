use super::RepositoryError;
use common::model::question::Question;
use log::info;
use std::path::Path;
use tokio::fs;

/// Reads the storage file and parses it as a JSON array of questions.
pub async fn load(path: &Path) -> Result<Vec<Question>, RepositoryError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&content).map_err(|source| RepositoryError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrites the storage file with the full collection.
pub async fn save(path: &Path, questions: &[Question]) -> Result<(), RepositoryError> {
    let content = serde_json::to_string(questions).map_err(RepositoryError::Serialize)?;

    fs::write(path, content)
        .await
        .map_err(|source| RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Creates the storage file with an empty collection when it does not exist yet.
/// Returns `true` if the file was created.
pub async fn ensure_exists(path: &Path) -> Result<bool, RepositoryError> {
    let exists = fs::try_exists(path)
        .await
        .map_err(|source| RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    if exists {
        return Ok(false);
    }

    save(path, &[]).await?;
    info!("Created empty question store at {}", path.display());
    Ok(true)
}

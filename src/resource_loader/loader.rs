use crate::domain::SupportOrg;
use futures::stream::FuturesUnordered;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReadDirStream;
use tracing::{info, instrument, warn};

/// Loads the support organizations of every file in `directory` with the given extension.
/// Each file holds a JSON array of organizations. Files that cannot be read or parsed are
/// logged and skipped, only failing to list the directory itself is an error.
#[instrument]
pub async fn load_support_orgs_from(directory: &str, extension: &str) -> Result<Vec<SupportOrg>, LoaderError> {
    info!("📁 Loading support organizations...");
    let files = list_files(directory, extension)
        .await
        .map_err(|e| LoaderError::Io { source: e, path: None })?;

    let results = load_files(files).await;
    let (loaded, errors): (Vec<_>, Vec<_>) = results.into_iter().partition(Result::is_ok);

    for error in errors.iter().filter_map(|res| res.as_ref().err()) {
        log_error(error);
    }

    let orgs = loaded.into_iter().filter_map(Result::ok).flatten().collect::<Vec<_>>();
    info!("📁 Loading support organizations... OK, {} loaded, {} file(s) failed", orgs.len(), errors.len());
    Ok(orgs)
}

#[instrument]
async fn list_files(directory: &str, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let dir = fs::read_dir(directory).await?;
    let mut entries = ReadDirStream::new(dir);

    while let Some(entry) = entries.next().await {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
                    files.push(path);
                }
            }
            Err(err) => warn!("⚠️ Unable to read directory entry: {}", err),
        }
    }

    // Directory order is platform dependent, the ranking's tie-breaking depends on input order
    files.sort();
    Ok(files)
}

#[instrument(skip_all)]
async fn load_files(paths: Vec<PathBuf>) -> Vec<Result<Vec<SupportOrg>, LoaderError>> {
    let mut results = FuturesUnordered::from_iter(paths.into_iter().enumerate().map(|(index, path)| async move {
        let result = match fs::read_to_string(&path).await {
            Ok(content) => task::spawn_blocking(move || serde_json::from_str::<Vec<SupportOrg>>(&content).map_err(|e| LoaderError::Parse { source: e, path }))
                .await
                .unwrap_or_else(|e| Err(LoaderError::JoinError(e))),
            Err(err) => Err(LoaderError::Io {
                source: err,
                path: Some(path),
            }),
        };
        (index, result)
    }))
    .collect::<Vec<_>>()
    .await;

    results.sort_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, result)| result).collect()
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|s| s.to_str()).unwrap_or("unknown")
}

fn log_error(error: &LoaderError) {
    match error {
        LoaderError::Parse { source, path } => warn!("⚠️ Failed to parse '{}': {}", file_name(path), source),
        LoaderError::Io { source, path } => match path {
            Some(path) => warn!("⚠️ Failed to read '{}': {}", file_name(path), source),
            None => warn!("⚠️ {}", source),
        },
        LoaderError::JoinError(err) => warn!("⚠️ {}", err),
    }
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{}", source)]
    Parse { source: serde_json::Error, path: PathBuf },
    #[error("{}", source)]
    Io { source: io::Error, path: Option<PathBuf> },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::ReadError;

/// Read the file at `path` and decode its content as JSON.
///
/// The file handle lives only inside this call and is closed on every
/// return path. Opening or reading failures (missing file, permission
/// denied, a directory) are [`ReadError::FileAccess`]; content that is not
/// well-formed UTF-8 JSON is [`ReadError::Parse`].
pub fn read(path: impl AsRef<Path>) -> Result<Value, ReadError> {
    let path = path.as_ref();
    let bytes = load(path)?;
    decode(path, &bytes)
}

/// Async form of [`read`] with the same error mapping.
pub async fn read_async(path: impl AsRef<Path>) -> Result<Value, ReadError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ReadError::file_access(path, e))?;
    decode(path, &bytes)
}

fn load(path: &Path) -> Result<Vec<u8>, ReadError> {
    let mut file = File::open(path).map_err(|e| ReadError::file_access(path, e))?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)
        .map_err(|e| ReadError::file_access(path, e))?;
    Ok(buf)
}

fn decode(path: &Path, bytes: &[u8]) -> Result<Value, ReadError> {
    serde_json::from_slice(bytes).map_err(|e| ReadError::parse(path, e))
}

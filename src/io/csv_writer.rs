use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::IoError;
use super::table::Table;

const BOM: &str = "\u{feff}";

/// Encode a table with the delimiter, column order, BOM and line endings it
/// was loaded with
pub fn encode_table(table: &Table) -> Result<Vec<u8>, IoError> {
    let layout = table.layout();
    let terminator = if layout.crlf {
        csv::Terminator::CRLF
    } else {
        csv::Terminator::Any(b'\n')
    };
    let prefix = if layout.bom { BOM.as_bytes().to_vec() } else { Vec::new() };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(table.delimiter())
        .terminator(terminator)
        .from_writer(prefix);

    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }

    writer.into_inner().map_err(|e| IoError::Io(e.into_error()))
}

/// Persist a table over `path`
///
/// The sheet is written to a sibling temporary file first and then renamed
/// over the original, so an interrupted write never truncates the sheet.
pub async fn write_table(path: impl AsRef<Path>, table: &Table) -> Result<(), IoError> {
    let path = path.as_ref();
    let bytes = encode_table(table)?;
    let staging = staging_path(path);

    let staged = match tokio::fs::write(&staging, &bytes).await {
        Ok(()) => tokio::fs::rename(&staging, path).await,
        Err(e) => Err(e),
    };
    if let Err(e) = staged {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(e.into());
    }

    debug!(path = %path.display(), rows = table.len(), "Payment sheet written");
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "payments".to_string());
    path.with_file_name(format!(".{}.tmp", file_name))
}

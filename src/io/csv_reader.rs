use std::collections::HashSet;
use std::path::Path;

use csv_async::{AsyncReaderBuilder, Trim};
use futures::StreamExt;
use futures::io::{AsyncRead, Cursor};
use tracing::debug;

use super::error::IoError;
use super::sniff::detect_delimiter;
use super::table::{Layout, Table};

/// Load a payment sheet from disk, detecting its delimiter
///
/// # Example
/// ```rust,ignore
/// let table = load_table("payments.csv").await?;
/// ```
pub async fn load_table(path: impl AsRef<Path>) -> Result<Table, IoError> {
    let path = path.as_ref();

    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(IoError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let text = String::from_utf8(bytes).map_err(|_| IoError::NotUtf8(path.to_path_buf()))?;
    let layout = Layout::detect(&text);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let delimiter = detect_delimiter(text);
    debug!(
        path = %path.display(),
        delimiter = %char::from(delimiter).escape_default(),
        "Detected delimiter"
    );

    let table = read_table(Cursor::new(text.as_bytes()), delimiter)
        .await?
        .with_layout(layout);
    if table.headers().iter().all(|header| header.is_empty()) {
        return Err(IoError::MissingHeader(path.to_path_buf()));
    }

    Ok(table)
}

/// Read a delimited sheet from an async reader
///
/// Header names are trimmed; field text is kept as is. Every record must
/// have as many fields as the header.
pub async fn read_table<R>(reader: R, delimiter: u8) -> Result<Table, IoError>
where
    R: AsyncRead + Unpin + Send,
{
    let mut csv_reader = AsyncReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::Headers)
        .create_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .await?
        .iter()
        .map(str::to_string)
        .collect();

    let mut seen = HashSet::new();
    if let Some(duplicate) = headers.iter().find(|header| !seen.insert(header.as_str())) {
        return Err(IoError::DuplicateColumn(duplicate.clone()));
    }

    let mut rows = Vec::new();
    let mut records = csv_reader.records();
    while let Some(record) = records.next().await {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Table::new(delimiter, headers, rows)
}

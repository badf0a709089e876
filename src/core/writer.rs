use crate::domain::model::CodeRecord;
use crate::utils::error::{ConvertError, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// 無標題列、必要時才加引號、以 `\n` 結尾
pub fn write_records<W: Write>(writer: W, records: &[CodeRecord]) -> csv::Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for record in records {
        wtr.serialize(record)?;
    }

    // 明確 flush，drop 時的錯誤會被吞掉
    wtr.flush()?;
    Ok(())
}

// 底層是 IO 錯誤時取回原本的 io::Error，保留 ErrorKind
fn into_io_error(err: csv::Error) -> io::Error {
    if !err.is_io_error() {
        return io::Error::new(io::ErrorKind::Other, err);
    }
    match err.into_kind() {
        csv::ErrorKind::Io(e) => e,
        kind => io::Error::new(io::ErrorKind::Other, format!("{:?}", kind)),
    }
}

/// 建立或覆寫 `path`
pub fn write_csv_file(path: &Path, records: &[CodeRecord]) -> Result<()> {
    let file = File::create(path).map_err(|e| ConvertError::dest_write(path, e))?;
    write_records(file, records).map_err(|e| ConvertError::dest_write(path, into_io_error(e)))
}

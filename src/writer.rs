use crate::error::ScrapeError;
use crate::results::ItemRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the items as an indented JSON array, replacing any existing file.
///
/// Non-ASCII text is written as-is. The file is written in place, so a
/// crash part-way leaves it truncated.
pub fn write_items<P: AsRef<Path>>(items: &[ItemRecord], path: P) -> Result<(), ScrapeError> {
    let path = path.as_ref();
    ::log::info!("Dumping {} items to {}", items.len(), path.display());

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, items)?;
    writer.flush()?;

    ::log::info!("JSON dump completed");
    Ok(())
}

/// Loads items previously written by [`write_items`]
#[cfg(test)]
pub fn read_items<P: AsRef<Path>>(path: P) -> Result<Vec<ItemRecord>, ScrapeError> {
    use std::io::Read;

    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let items: Vec<ItemRecord> = serde_json::from_str(&contents)?;
    Ok(items)
}

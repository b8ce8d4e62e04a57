//! Flat-file export of the aggregated table, one file per run.

use std::fs::File;
use std::path::Path;

use crate::{PostingTable, Result};

pub fn save_to_csv(table: &PostingTable, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    for posting in table.rows() {
        writer.serialize(posting)?;
    }

    writer.flush()?;
    Ok(())
}

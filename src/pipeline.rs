use crate::chained_table::TableStats;
use crate::config::Config;
use crate::counter::BlockCounter;
use crate::error::Result;
use crate::io::{load_sequence, save_counts};
use serde::Serialize;

/// What a finished run produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunSummary {
    pub blocks: u64,
    pub distinct: usize,
    pub table: TableStats,
}

/// Loads the input, counts its blocks and writes the result file.
///
/// Nothing is written when the input cannot be read. A failure while
/// writing leaves whatever was already flushed in place.
pub fn run(config: &Config) -> Result<RunSummary> {
    config.validate()?;
    let sequence = load_sequence(&config.input)?;
    let counter = BlockCounter::from_sequence(&sequence, config.block_len, config.buckets);
    save_counts(&config.output, &counter)?;
    Ok(RunSummary {
        blocks: counter.total(),
        distinct: counter.distinct(),
        table: counter.stats(),
    })
}

use crate::blocks::BLOCK_LEN;
use crate::error::{BlockCountError, Result};
use crate::hash::TABLE_SIZE;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "sequencia.txt";
pub const DEFAULT_OUTPUT: &str = "resultado1.txt";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub block_len: usize,
    pub buckets: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            block_len: BLOCK_LEN,
            buckets: TABLE_SIZE,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.block_len == 0 {
            return Err(BlockCountError::InvalidConfig(
                "block length must be positive".to_string(),
            ));
        }
        if self.buckets == 0 || self.buckets > u32::MAX as usize {
            return Err(BlockCountError::InvalidConfig(format!(
                "bucket count must be in 1..={}, got {}",
                u32::MAX,
                self.buckets
            )));
        }
        Ok(())
    }
}

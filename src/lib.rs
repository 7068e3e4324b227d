pub mod blocks;
pub mod chained_table;
pub mod config;
pub mod counter;
pub mod error;
pub mod hash;
pub mod io;
pub mod pipeline;
pub mod traits;

use blockcount::blocks::BLOCK_LEN;
use blockcount::config::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT};
use blockcount::hash::TABLE_SIZE;
use blockcount::pipeline::run;
use log::warn;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(clap::Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Sequence to read; its lines are joined into one string.
    #[clap(short, long, value_parser, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Tab-separated result file.
    #[clap(short, long, value_parser, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    #[clap(short, long, value_parser, default_value_t = BLOCK_LEN)]
    block_len: usize,
    #[clap(long, value_parser, default_value_t = TABLE_SIZE)]
    buckets: usize,
    /// Print a JSON summary of the run.
    #[clap(long, action)]
    stats: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = <Args as clap::Parser>::parse();
    let config = Config {
        input: args.input,
        output: args.output,
        block_len: args.block_len,
        buckets: args.buckets,
    };
    match run(&config) {
        Ok(summary) => {
            println!("saved '{}'", config.output.display());
            if args.stats {
                match serde_json::to_string(&summary) {
                    Ok(line) => println!("{line}"),
                    Err(e) => warn!("cannot encode summary: {e}"),
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

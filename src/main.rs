use anyhow::Result;
use tagger::cli::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse_args();
    run(args)
}

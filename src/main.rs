//! `excise` removes a range of lines from a source file and splices a fixed replacement fragment
//! in their place, overwriting the file.

use clap::Parser;
use excise::cli;
use excise::rewrite_file;
use excise::RewriteOpts;
use excise::TracingOpts;
use excise::SUCCESS_MESSAGE;

fn main() -> miette::Result<()> {
    miette::set_panic_hook();
    let mut opts = cli::Opts::parse();
    if let Err(err) = opts.init() {
        err.exit();
    }
    TracingOpts::from_cli(&opts).install()?;

    rewrite_file(&RewriteOpts::from_cli(&opts)?)?;

    println!("{SUCCESS_MESSAGE}");
    Ok(())
}

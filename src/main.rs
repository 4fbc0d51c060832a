use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;

use filefetch::{logging, Args, DirSource, Listing, ListingError, Painter};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init().context("Failed to initialise logging")?;

    let config = args.into_config()?;
    let listing = Listing::new(config, Painter::detect());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match listing.run(&DirSource::new("."), &mut out) {
        Ok(_) => Ok(()),
        Err(err) if err.is_broken_pipe() => Ok(()),
        Err(err @ ListingError::Output(_)) => Err(err).context("Failed to write the listing"),
        Err(err) => Err(err).context("Failed to list the current directory"),
    }
}

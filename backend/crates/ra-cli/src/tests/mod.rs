
use crate::Cli;

use std::path::Path;

use clap::Parser;

/// Parse `args` (without the binary name), pointing the store at `store`.
pub(crate) fn parse_with_store(store: &Path, args: &[&str]) -> Cli {
    let mut argv = vec!["read-aloud", "--store", store.to_str().unwrap()];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

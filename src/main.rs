use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tinywot_version_flags::config::{DEFAULT_MANIFEST_PATH, FlagsConfig};

#[derive(Parser)]
#[command(name = "tinywot-version-flags")]
#[command(
    version,
    about = "Print preprocessor version flags from library.json for PlatformIO"
)]
struct Cli {
    /// Manifest to read
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MANIFEST_PATH)]
    manifest: PathBuf,

    /// Log more to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tinywot_version_flags::logging::init(cli.verbose)?;

    let config = FlagsConfig::with_manifest_path(cli.manifest);
    let line = tinywot_version_flags::run(&config)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}")?;
    stdout.flush()?;

    Ok(())
}

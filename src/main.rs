use clap::error::ErrorKind;
use clap::Parser;
use garment_scan::cli::Cli;
use garment_scan::error::ScanError;
use garment_scan::{commands, output};
use tracing::Level;

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: &str) -> ! {
    println!("{}", output::error_json(message));
    std::process::exit(1);
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => fail(e.to_string().trim()),
        },
    };
    init_logging(cli.verbose);

    if cli.image.is_none() && cli.labels.is_none() && !cli.show_config {
        fail(&ScanError::MissingImagePath.to_string());
    }

    if let Err(e) = commands::execute(&cli) {
        tracing::error!("{:?}", e);
        fail(&e.to_string());
    }
}

mod cli;
mod error;
mod export;
mod extractor;
mod fmt;
mod logging;
mod models;
mod parser;
mod pdf;
mod settings;
mod splitter;
mod status;
mod text;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Extract {
            files,
            output,
            format,
        } => cli::extract::run(&files, output, format.as_deref()),
        Commands::Show { file, json } => cli::show::run(&file, json),
        Commands::Status => cli::status::run(),
        Commands::Configure {
            output_dir,
            format,
            sheet_name,
        } => cli::configure::run(output_dir, format, sheet_name),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

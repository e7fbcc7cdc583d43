use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;

mod output;

use output::ColorMode;

/// Extract the holder name and PAN from a PDF document
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the PDF file
    pdf_path: PathBuf,

    /// Write the result as CSV to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let color = ColorMode(!cli.no_color);

    match run(&cli, color) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if color.enabled() {
                eprintln!("{}", format!("{:#}", err).red());
            } else {
                eprintln!("{:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, color: ColorMode) -> anyhow::Result<()> {
    if !cli.pdf_path.exists() {
        anyhow::bail!("File not found: {}", cli.pdf_path.display());
    }

    let mut stdout = std::io::stdout();

    let extraction = match panex_ingest::extract_pan_details(&cli.pdf_path) {
        Ok(extraction) => extraction,
        Err(err) => {
            // Both extraction methods exhausted: report every fault, then
            // fail. Exit code 1, no CSV.
            output::print_faults(&mut stdout, err.faults(), color)?;
            anyhow::bail!(
                "Text extraction failed. Please try another PDF or check the file format."
            );
        }
    };

    output::print_faults(&mut stdout, &extraction.faults, color)?;
    output::print_record(&mut stdout, &extraction.record, color)?;

    if let Some(ref csv_path) = cli.output {
        let csv = panex_reporting::to_csv(&extraction.record);
        let mut file = std::fs::File::create(csv_path)?;
        file.write_all(csv.as_bytes())?;
        writeln!(stdout, "Saved CSV to {}", csv_path.display())?;
    }

    Ok(())
}

//! ResumePress CLI - Data-Driven Resume Compiler
//!
//! Invoked with no arguments it reads `resume_data.json`, loads the four
//! typeface variants from `fonts/`, and writes `resume.pdf`.
//! Returns non-zero on any read, parse, or render failure.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use resumepress_core::{digest, Generator, ResumeRecord, TypefaceSet, DEFAULT_FAMILY};

#[derive(Parser)]
#[command(name = "resumepress-cli")]
#[command(about = "ResumePress CLI - Data-Driven Resume Compiler")]
struct Cli {
    /// Path to the resume data file
    #[arg(default_value = "resume_data.json")]
    input: PathBuf,

    /// Path of the PDF to write
    #[arg(default_value = "resume.pdf")]
    output: PathBuf,

    /// Directory holding the typeface files
    #[arg(short, long, default_value = "fonts")]
    fonts_dir: PathBuf,

    /// Typeface family name, as used in the font file names
    #[arg(long, default_value = DEFAULT_FAMILY)]
    family: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let typefaces = match TypefaceSet::load(&cli.fonts_dir, &cli.family) {
        Ok(typefaces) => typefaces,
        Err(e) => {
            eprintln!("Failed to load typefaces: {e}");
            return ExitCode::FAILURE;
        }
    };

    let record = match ResumeRecord::from_path(&cli.input) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("Failed to read {}: {e}", cli.input.display());
            return ExitCode::FAILURE;
        }
    };

    let generator = Generator::new(typefaces);

    let content_digest = match digest::assembly_digest(&generator.assemble(&record)) {
        Ok(digest) => digest,
        Err(e) => {
            eprintln!("Failed to digest assembly: {e}");
            return ExitCode::FAILURE;
        }
    };

    match generator.render_to_file(&record, &cli.output) {
        Ok(()) => {
            println!(
                "Resume PDF generated successfully: {} (content digest {})",
                cli.output.display(),
                &content_digest[..12]
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to render {}: {e}", cli.output.display());
            ExitCode::FAILURE
        }
    }
}

//! Interactive CLI binary for pdf2png.
//!
//! No flags, no arguments: the tool prompts for a PDF path on stdin,
//! validates it, and extracts every page as a 500 DPI PNG into a folder
//! named after the source file. All feedback is plain console lines; the
//! process exits with status 0 on every path, including the fatal
//! directory-creation error.

use anyhow::Result;
use pdf2png::console::{cyan, green, prompt_line, red, strip_surrounding_quotes, yellow};
use pdf2png::pipeline::{input, render};
use pdf2png::{create_output_dir, extract_pages, ExtractConfig, ExtractProgress};
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

/// Per-page console reporting in the colours of the run:
/// green for saved pages, red for failed ones, green banner at the end.
struct ConsoleProgress;

impl ExtractProgress for ConsoleProgress {
    fn on_page_saved(&self, page_num: usize, file_name: &str) {
        // Two segments on purpose: styled prefix, unstyled file name.
        print!("{}", green(&format!("Page {page_num} saved as ")));
        println!("{file_name}");
    }

    fn on_page_error(&self, _page_num: usize, error: &str) {
        println!("{}", red(error));
    }

    fn on_complete(&self, _saved: usize, _total_pages: usize) {
        println!();
        println!("{}", green("✅ PDF pages extracted and saved as PNG images.\n"));
    }
}

fn main() -> Result<()> {
    // Default to errors only so library logs never interleave with the
    // interactive prompts; RUST_LOG overrides for debugging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    // ── Path acquisition loop ────────────────────────────────────────────
    // Re-prompt without limit until the path exists and ends in `.pdf`.
    // EOF on stdin counts as external termination and ends the run.
    println!();
    let Some(mut pdf_path) = ask_for_path("Enter PDF file path:", &mut stdin)? else {
        return Ok(());
    };

    let source = loop {
        match input::validate_pdf_path(&pdf_path) {
            Ok(path) => {
                println!("📄 Source file: ");
                println!("{}", cyan(&path.display().to_string()));
                println!();
                break path;
            }
            Err(_) => {
                println!(
                    "{}",
                    yellow("⚠️ The file does not exist or is not a PDF. Please enter a valid PDF file path.")
                );
                println!();
                let Some(next) = ask_for_path("Enter PDF file path:", &mut stdin)? else {
                    return Ok(());
                };
                pdf_path = next;
            }
        }
    };

    // ── Load loop ────────────────────────────────────────────────────────
    // A path entered here goes straight to the next load attempt; it is
    // not re-run through the existence/extension check. This reproduces
    // the behaviour of earlier versions of the tool.
    let pdfium = render::bind_pdfium()?;
    let mut load_path = source;
    let document = loop {
        match render::open_document(&pdfium, &load_path) {
            Ok(doc) => break doc,
            Err(_) => {
                println!(
                    "{}",
                    yellow("⚠️ Invalid file path or file does not exist. Please try again.")
                );
                // Unlike path acquisition, this re-prompt takes the line
                // as-is: no quote stripping, no validation, straight to
                // the next load attempt.
                let Some(next) = prompt_line("Enter PDF path:", &mut stdin)? else {
                    return Ok(());
                };
                load_path = next.into();
            }
        }
    };

    // ── Output directory ─────────────────────────────────────────────────
    let output_dir = input::output_dir_for(&load_path);
    println!("📁 Export to folder: ");
    println!("{}", cyan(&output_dir.display().to_string()));
    println!();

    // The one fatal error path: report it and end the run (still status 0)
    // without processing any pages.
    if let Err(e) = create_output_dir(&output_dir) {
        println!("{}", red(&e.to_string()));
        return Ok(());
    }

    // ── Page conversion loop ─────────────────────────────────────────────
    extract_pages(
        &document,
        &load_path,
        &output_dir,
        &ExtractConfig::default(),
        &ConsoleProgress,
    );

    Ok(())
    // `document` and `pdfium` drop here on every exit path above.
}

/// Prompt for a path and strip one pair of surrounding quotes.
///
/// Returns `Ok(None)` on EOF so the caller can end the run cleanly.
fn ask_for_path(prompt: &str, input: &mut impl BufRead) -> Result<Option<String>> {
    let line = prompt_line(prompt, input)?;
    Ok(line.map(|l| strip_surrounding_quotes(&l).to_string()))
}

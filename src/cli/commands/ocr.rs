use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ocr::{OcrEngine, OcrLogic, TesseractCli};
use crate::ui::messages::{error, header, info, prompt_line, warning};
use crate::utils::path::expand_tilde;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ocr {
        images,
        out,
        force,
        language,
        engine,
    } = cmd
    {
        let engine = TesseractCli::new(
            engine.clone().unwrap_or_else(|| cfg.ocr.command.clone()),
            language.clone().unwrap_or_else(|| cfg.ocr.language.clone()),
        );

        let stdin = io::stdin();
        let mut input = stdin.lock();

        if images.is_empty() {
            return interactive(&engine, *force, &mut input);
        }

        if out.is_some() && images.len() > 1 {
            return Err(AppError::Command(
                "--out can only be used with a single image".into(),
            ));
        }

        let mut failures = 0;
        for raw in images {
            let image_path = expand_tilde(raw);
            let out_path = match (out, images.len()) {
                (Some(o), _) => expand_tilde(o),
                (None, 1) => PathBuf::from(&cfg.ocr.output),
                (None, _) => OcrLogic::sibling_output(&image_path),
            };

            if let Err(e) = extract_one(&engine, &image_path, &out_path, *force, &mut input) {
                error(format!("{}: {e}", image_path.display()));
                failures += 1;
            }
        }

        if failures > 0 {
            return Err(AppError::Ocr(format!(
                "{failures} of {} image(s) failed",
                images.len()
            )));
        }
    }

    Ok(())
}

fn extract_one<R: BufRead>(
    engine: &dyn OcrEngine,
    image_path: &Path,
    out_path: &Path,
    force: bool,
    input: &mut R,
) -> AppResult<()> {
    let text = OcrLogic::extract(engine, image_path)?;

    header(format!("Extracted Text: {}", image_path.display()));
    if text.trim().is_empty() {
        warning("No text recognized in this image.");
    } else {
        println!("{}", text.trim_end());
    }

    OcrLogic::save_text(&text, out_path, force, input)
}

/// Ask for image paths until EOF or `exit`; a failure never ends
/// the prompt.
fn interactive<R: BufRead>(engine: &dyn OcrEngine, force: bool, input: &mut R) -> AppResult<()> {
    info("Enter the path of a screenshot (png, jpg, jpeg). Ctrl-D or `exit` to quit.");

    while let Some(line) = prompt_line(input, "image>")? {
        let line = line.trim();
        if line.is_empty() {
            info("Please enter an image path to start text extraction.");
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        let image_path = expand_tilde(line.trim_matches(['"', '\'']));
        let out_path = OcrLogic::sibling_output(&image_path);

        if let Err(e) = extract_one(engine, &image_path, &out_path, force, input) {
            error(format!("Error during OCR: {e}"));
        }
    }

    Ok(())
}

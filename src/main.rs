use std::io::{self, BufRead, Write};
use std::path::Path;

use grayview_rs::image_pipeline::{
    ImageDisplay, ImagePipeline, PipelineAction, PipelineConfig, PixelBuffer, Result,
};
use grayview_rs::logger;

use tracing::{error, info};

/// Renders the normalized buffer as an ASCII ramp on stdout, nearest-neighbor
/// sampled to fit both the configured display bounds and a terminal-sized
/// character grid.
struct TerminalDisplay;

const RAMP: &[u8] = b" .:-=+*#%@";
const MAX_COLS: u16 = 96;
const MAX_ROWS: u16 = 48;

impl ImageDisplay for TerminalDisplay {
    fn show(&self, image: &PixelBuffer, max_width: u16, max_height: u16) -> Result<()> {
        let cols = image.width.min(max_width).min(MAX_COLS) as usize;
        let rows = image.height.min(max_height).min(MAX_ROWS) as usize;
        let step = image.channels as usize;

        let mut canvas = String::with_capacity((cols + 1) * rows);
        for row in 0..rows {
            let source_y = row * image.height as usize / rows;
            for col in 0..cols {
                let source_x = col * image.width as usize / cols;
                let offset = (source_y * image.width as usize + source_x) * step;
                // Samples are in display order, blue first for color buffers.
                let value = match image.channels {
                    1 => image.samples[offset] as u32,
                    _ => {
                        let blue = image.samples[offset] as u32;
                        let green = image.samples[offset + 1] as u32;
                        let red = image.samples[offset + 2] as u32;
                        (299 * red + 587 * green + 114 * blue) / 1000
                    }
                };
                let shade = RAMP[(value as usize * (RAMP.len() - 1)) / 255];
                canvas.push(shade as char);
            }
            canvas.push('\n');
        }

        io::stdout().write_all(canvas.as_bytes())?;
        Ok(())
    }
}

fn read_line(stdin: &io::Stdin) -> io::Result<Option<String>> {
    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting grayview...");

    let config = PipelineConfig::builder().build();
    let pipeline = ImagePipeline::new(config);
    let display = TerminalDisplay;
    let stdin = io::stdin();

    info!(
        "Display bounds: {}x{}",
        pipeline.config().display_width,
        pipeline.config().display_height
    );

    loop {
        print!(
            "Menu:\n1. Open a file for viewing\n2. Convert a file to .png\n3. Convert a file to raw grayscale\nChoose an action: "
        );
        io::stdout().flush()?;

        let Some(choice) = read_line(&stdin)? else {
            break;
        };
        let action = match choice.trim() {
            "1" => PipelineAction::Display,
            "2" => PipelineAction::ExportPng,
            "3" => PipelineAction::ExportRaw,
            other => {
                error!("Invalid choice {:?}. Please choose 1, 2, or 3.", other);
                continue;
            }
        };

        print!("Image path: ");
        io::stdout().flush()?;
        let Some(path_line) = read_line(&stdin)? else {
            break;
        };
        let path = path_line.trim();
        if path.is_empty() {
            error!("No file was selected");
            continue;
        }

        // Failures end the current action only; the menu keeps running.
        match pipeline.run_file(action, Path::new(path), &display) {
            Ok(Some(output)) => info!("Conversion successful! Saved to: {}", output.display()),
            Ok(None) => {}
            Err(e) => error!("{}", e),
        }
    }

    Ok(())
}

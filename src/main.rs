use clap::Parser;
use image::ImageReader;
use std::path::PathBuf;

use glyphsheet::{GlyphSlot, SplitConfig, build_standard_pipeline, output};

#[derive(Parser)]
#[command(name = "glyphsheet")]
#[command(about = "Extract per-font letter glyphs from a composite sprite sheet")]
struct Cli {
    /// Path to the sheet image
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Directory the font_1..font_6 folders are written to
    #[arg(value_name = "OUTPUT_DIR", default_value = "extracted_letters")]
    output_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save intermediate pipeline images to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.verbose {
        println!("Loading sheet: {:?}", args.image_path);
    }

    // Load sheet - failure here is fatal, nothing gets written
    let sheet = ImageReader::open(&args.image_path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

    if args.verbose {
        println!("Sheet loaded: {}x{}\n", sheet.width(), sheet.height());
    }

    let config = SplitConfig::default();
    output::ensure_font_dirs(&args.output_dir, config.font_variants)?;

    // Build pipeline
    let mut pipeline = build_standard_pipeline(&config, args.verbose);

    // Enable debug mode if requested
    if let Some(debug_dir) = args.debug_out {
        pipeline = pipeline.with_debug(debug_dir)?;
    }

    if args.verbose {
        println!("Running pipeline...\n");
    }
    let results = pipeline.run(sheet)?;

    // Write each detected glyph to its (font, letter) slot
    let mut written = 0usize;
    for item in &results {
        let (Some(letter), Some(font)) = (item.get_string("letter"), item.get_int("font")) else {
            continue;
        };
        let Some(letter) = letter.chars().next() else {
            continue;
        };
        let slot = GlyphSlot {
            letter,
            font_index: font as usize,
        };
        output::save_glyph(&args.output_dir, &slot, &item.image)?;
        written += 1;
    }

    println!("\n=== Glyph Extraction Results ===");
    println!("Glyphs written: {}", written);
    println!("Output tree: {}", args.output_dir.display());

    Ok(())
}

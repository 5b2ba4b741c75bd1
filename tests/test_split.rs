mod common;

use common::fixtures::{synthetic_sheet, uniform_sheet};
use glyphsheet::{SheetSplitter, SplitConfig, output::glyph_path, GlyphSlot};
use std::collections::HashMap;
use std::fs;

#[test]
fn full_sheet_populates_every_font_and_letter() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let sheet = uniform_sheet(600, 520, 13, 12);

    let splitter = SheetSplitter::new(SplitConfig::default());
    let written = splitter.split_to_dir(&sheet, dir.path())?;

    assert_eq!(written, 156);
    for font_index in 0..6 {
        for letter in 'A'..='Z' {
            let path = glyph_path(dir.path(), &GlyphSlot { letter, font_index });
            assert!(path.is_file(), "missing {}", path.display());
        }
    }
    Ok(())
}

#[test]
fn sheet_height_with_remainder_still_fills_every_slot() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    // 521 / 13 leaves a one-pixel remainder for the last band to absorb
    let sheet = uniform_sheet(600, 521, 13, 12);

    let written = SheetSplitter::default().split_to_dir(&sheet, dir.path())?;

    assert_eq!(written, 156);
    Ok(())
}

#[test]
fn under_detected_row_leaves_its_trailing_slots_unwritten() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    // Row 4 (letters I and J) carries only 10 marks
    let mut row_counts = vec![12u32; 13];
    row_counts[4] = 10;
    let sheet = synthetic_sheet(600, 520, 12, &row_counts);

    let written = SheetSplitter::default().split_to_dir(&sheet, dir.path())?;

    assert_eq!(written, 154);
    // I still gets all six variants; J loses its two rightmost ones
    for font_index in 0..6 {
        let path = glyph_path(dir.path(), &GlyphSlot { letter: 'I', font_index });
        assert!(path.is_file(), "missing {}", path.display());
    }
    for font_index in 0..4 {
        let path = glyph_path(dir.path(), &GlyphSlot { letter: 'J', font_index });
        assert!(path.is_file(), "missing {}", path.display());
    }
    for font_index in 4..6 {
        let path = glyph_path(dir.path(), &GlyphSlot { letter: 'J', font_index });
        assert!(!path.exists(), "unexpected {}", path.display());
    }
    Ok(())
}

#[test]
fn empty_sheet_writes_nothing_and_does_not_abort() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let sheet = synthetic_sheet(600, 520, 12, &vec![0u32; 13]);

    let written = SheetSplitter::default().split_to_dir(&sheet, dir.path())?;

    assert_eq!(written, 0);
    // The font folders are still created up front
    for i in 1..=6 {
        assert!(dir.path().join(format!("font_{}", i)).is_dir());
    }
    Ok(())
}

#[test]
fn rerunning_the_split_is_byte_identical() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let sheet = uniform_sheet(600, 520, 13, 12);
    let splitter = SheetSplitter::new(SplitConfig::default());

    splitter.split_to_dir(&sheet, dir.path())?;
    let mut first: HashMap<std::path::PathBuf, Vec<u8>> = HashMap::new();
    for font_index in 0..6 {
        for letter in 'A'..='Z' {
            let path = glyph_path(dir.path(), &GlyphSlot { letter, font_index });
            first.insert(path.clone(), fs::read(&path)?);
        }
    }

    splitter.split_to_dir(&sheet, dir.path())?;
    for (path, bytes) in &first {
        assert_eq!(&fs::read(path)?, bytes, "{} changed between runs", path.display());
    }
    Ok(())
}

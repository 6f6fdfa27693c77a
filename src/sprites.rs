//! Sprite sheet loading and slicing.
//!
//! Sheets are decoded once with `image` and kept as RGBA pixels until the
//! renderer uploads them. Animations only refer to sheets by index, so the
//! gameplay code never touches GPU state.

use anyhow::{ensure, Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Index of a sheet inside a `SpriteLibrary`
pub type SheetId = usize;

/// One animation frame: a pixel rectangle of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteFrame {
    pub sheet: SheetId,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A decoded sheet waiting for upload
pub struct SheetImage {
    pub path: PathBuf,
    pub image: image::RgbaImage,
}

/// Cut a horizontal strip of `frame_count` equally sized frames starting at
/// the sheet's top-left corner.
pub fn slice_sprite_sheet(
    sheet: SheetId,
    sheet_width: u32,
    sheet_height: u32,
    frame_count: u32,
    frame_width: u32,
    frame_height: u32,
) -> Result<Vec<SpriteFrame>> {
    ensure!(
        frame_width > 0 && frame_height > 0,
        "frame size must be non-zero, got {}x{}",
        frame_width,
        frame_height
    );
    ensure!(
        frame_count.saturating_mul(frame_width) <= sheet_width && frame_height <= sheet_height,
        "{} frames of {}x{} do not fit in a {}x{} sheet",
        frame_count,
        frame_width,
        frame_height,
        sheet_width,
        sheet_height
    );

    Ok((0..frame_count)
        .map(|i| SpriteFrame {
            sheet,
            x: i * frame_width,
            y: 0,
            width: frame_width,
            height: frame_height,
        })
        .collect())
}

/// Every sheet the game has loaded, deduplicated by path
#[derive(Default)]
pub struct SpriteLibrary {
    sheets: Vec<SheetImage>,
    by_path: HashMap<PathBuf, SheetId>,
}

impl SpriteLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an already decoded sheet; the same path returns the same id
    pub fn insert(&mut self, path: &Path, image: image::RgbaImage) -> SheetId {
        if let Some(&id) = self.by_path.get(path) {
            return id;
        }
        let id = self.sheets.len();
        self.sheets.push(SheetImage {
            path: path.to_path_buf(),
            image,
        });
        self.by_path.insert(path.to_path_buf(), id);
        id
    }

    /// Decode a sheet from disk (once) and return its id
    pub fn load(&mut self, path: &Path) -> Result<SheetId> {
        if let Some(&id) = self.by_path.get(path) {
            return Ok(id);
        }
        let image = image::open(path)
            .with_context(|| format!("failed to load sprite sheet {}", path.display()))?
            .into_rgba8();
        log::debug!(
            "loaded sprite sheet {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(self.insert(path, image))
    }

    /// Load a sheet and slice it into a strip of frames
    pub fn load_strip(
        &mut self,
        path: &Path,
        frame_count: u32,
        frame_width: u32,
        frame_height: u32,
    ) -> Result<Vec<SpriteFrame>> {
        let id = self.load(path)?;
        let sheet = &self.sheets[id].image;
        slice_sprite_sheet(id, sheet.width(), sheet.height(), frame_count, frame_width, frame_height)
            .with_context(|| format!("cannot slice {}", path.display()))
    }

    pub fn sheets(&self) -> &[SheetImage] {
        &self.sheets
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_strip_offsets() {
        let frames = slice_sprite_sheet(3, 64, 32, 4, 16, 32).unwrap();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].x, 0);
        assert_eq!(frames[3].x, 48);
        assert!(frames.iter().all(|f| f.sheet == 3 && f.y == 0 && f.width == 16));
    }

    #[test]
    fn test_slice_rejects_oversized_strip() {
        assert!(slice_sprite_sheet(0, 64, 32, 5, 16, 32).is_err());
        assert!(slice_sprite_sheet(0, 64, 16, 4, 16, 32).is_err());
        assert!(slice_sprite_sheet(0, 64, 32, 4, 0, 32).is_err());
    }

    #[test]
    fn test_insert_dedupes_by_path() {
        let mut library = SpriteLibrary::new();
        let a = library.insert(Path::new("bat.png"), image::RgbaImage::new(128, 32));
        let b = library.insert(Path::new("bat.png"), image::RgbaImage::new(128, 32));
        let c = library.insert(Path::new("slime.png"), image::RgbaImage::new(176, 32));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_load_strip_uses_cached_sheet() {
        let mut library = SpriteLibrary::new();
        let path = Path::new("assets/bat/default.png");
        library.insert(path, image::RgbaImage::new(128, 32));
        let frames = library.load_strip(path, 4, 32, 32).unwrap();
        assert_eq!(frames.len(), 4);
    }

    #[test]
    fn test_missing_sheet_names_the_file() {
        let mut library = SpriteLibrary::new();
        let err = library
            .load(Path::new("definitely/not/here.png"))
            .unwrap_err();
        assert!(format!("{:#}", err).contains("definitely/not/here.png"));
    }
}

//! Splitting source pictures into tile atlases and exporting boards as PNG

use std::path::Path;

use image::{RgbaImage, imageops};

use crate::board::Board;
use crate::board::layout::{row_col, slot_count};
use crate::io::error::{PuzzleError, Result, invalid_parameter};

/// Equal-sized crops of a source picture, indexed by correct slot
#[derive(Debug, Clone)]
pub struct TileAtlas {
    crops: Vec<RgbaImage>,
    grid_size: usize,
    tile_width: u32,
    tile_height: u32,
}

impl TileAtlas {
    /// Load a picture and split it into `grid_size²` crops
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or decoded
    /// - The picture is smaller than one pixel per tile
    pub fn from_path<P: AsRef<Path>>(path: P, grid_size: usize) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let picture = image::open(&path_buf).map_err(|e| PuzzleError::ImageLoad {
            path: path_buf,
            source: e,
        })?;
        Self::from_image(&picture.to_rgba8(), grid_size)
    }

    /// Split a picture into `grid_size²` crops in row-major order
    ///
    /// Edge pixels that do not divide evenly are dropped, so every crop has
    /// the same dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if `grid_size` is zero or the picture is smaller than
    /// one pixel per tile
    pub fn from_image(picture: &RgbaImage, grid_size: usize) -> Result<Self> {
        let slots = slot_count(grid_size)?;
        let divisor = u32::try_from(grid_size)
            .map_err(|_overflow| invalid_parameter("grid_size", &grid_size, &"too large"))?;

        let tile_width = picture.width() / divisor;
        let tile_height = picture.height() / divisor;
        if tile_width == 0 || tile_height == 0 {
            return Err(invalid_parameter(
                "image",
                &format!("{}x{}", picture.width(), picture.height()),
                &format!("needs at least {grid_size}x{grid_size} pixels"),
            ));
        }

        let mut crops = Vec::with_capacity(slots);
        for slot in 0..slots {
            let (row, col) = row_col(slot, grid_size);
            let x = col as u32 * tile_width;
            let y = row as u32 * tile_height;
            crops.push(imageops::crop_imm(picture, x, y, tile_width, tile_height).to_image());
        }

        Ok(Self {
            crops,
            grid_size,
            tile_width,
            tile_height,
        })
    }

    /// Grid dimension the atlas was cut for
    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Width and height of every crop in pixels
    pub const fn tile_dimensions(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    /// Crop belonging to a correct slot
    pub fn crop(&self, slot: usize) -> Option<&RgbaImage> {
        self.crops.get(slot)
    }

    /// Draw every tile's crop at its current slot
    ///
    /// # Errors
    ///
    /// Returns an error if the board's grid size differs from the atlas
    pub fn compose(&self, board: &Board) -> Result<RgbaImage> {
        if board.grid_size() != self.grid_size {
            return Err(invalid_parameter(
                "board",
                &board.grid_size(),
                &format!("atlas was cut for a {0}x{0} grid", self.grid_size),
            ));
        }

        let side = self.grid_size as u32;
        let mut canvas = RgbaImage::new(self.tile_width * side, self.tile_height * side);
        for tile in board.tiles() {
            let Some(crop) = self.crops.get(tile.correct_pos) else {
                return Err(PuzzleError::InvalidPosition {
                    position: tile.correct_pos,
                    slots: self.crops.len(),
                });
            };
            let (row, col) = row_col(tile.current_pos, self.grid_size);
            let x = i64::from(col as u32 * self.tile_width);
            let y = i64::from(row as u32 * self.tile_height);
            imageops::replace(&mut canvas, crop, x, y);
        }
        Ok(canvas)
    }
}

/// Compose the board from the atlas and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The board and atlas grid sizes differ
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(atlas: &TileAtlas, board: &Board, output_path: &Path) -> Result<()> {
    let canvas = atlas.compose(board)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    canvas
        .save(output_path)
        .map_err(|e| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

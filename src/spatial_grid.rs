/*
 * Spatial Grid Module
 *
 * This module defines the SpatialGrid struct used to speed up the link scan.
 * The surface is divided into square cells at least as wide as the link
 * distance, so every linked pair sits in the same or an adjacent cell and
 * only the 3x3 neighbourhood of a particle has to be checked.
 *
 * Particles may drift outside the surface. Their cell coordinates are
 * clamped to the border cells; clamping never increases the distance between
 * two coordinates, so neighbours stay at most one cell apart.
 */

use nannou::prelude::*;

use crate::surface::Surface;

pub struct SpatialGrid {
    pub cell_size: f32,
    pub grid: Vec<Vec<usize>>,
    pub columns: usize,
    pub rows: usize,
}

impl SpatialGrid {
    pub fn new(cell_size: f32, surface: &Surface) -> Self {
        let columns = ((surface.width() / cell_size).ceil() as usize).max(1);
        let rows = ((surface.height() / cell_size).ceil() as usize).max(1);

        let mut grid = Vec::with_capacity(columns * rows);

        // Initialize an empty grid
        for _ in 0..(columns * rows) {
            grid.push(Vec::new());
        }

        Self {
            cell_size,
            grid,
            columns,
            rows,
        }
    }

    // Convert surface coordinates to clamped (column, row) cell coordinates
    #[inline]
    pub fn cell_coords(&self, pos: Vec2) -> (usize, usize) {
        let column = (pos.x / self.cell_size).floor().clamp(0.0, self.columns as f32 - 1.0) as usize;
        let row = (pos.y / self.cell_size).floor().clamp(0.0, self.rows as f32 - 1.0) as usize;
        (column, row)
    }

    #[inline]
    pub fn pos_to_cell_index(&self, pos: Vec2) -> usize {
        let (column, row) = self.cell_coords(pos);
        row * self.columns + column
    }

    // Clear the grid
    pub fn clear(&mut self) {
        for cell in &mut self.grid {
            cell.clear();
        }
    }

    // Insert a particle into the grid
    #[inline]
    pub fn insert(&mut self, index: usize, position: Vec2) {
        let cell_index = self.pos_to_cell_index(position);
        self.grid[cell_index].push(index);
    }

    // Get particle indices within and adjacent to the cell containing the given position
    pub fn get_nearby_indices(&self, position: Vec2) -> Vec<usize> {
        let (column, row) = self.cell_coords(position);
        let mut result = Vec::new();

        let row_start = row.saturating_sub(1);
        let row_end = (row + 1).min(self.rows - 1);
        let column_start = column.saturating_sub(1);
        let column_end = (column + 1).min(self.columns - 1);

        for check_row in row_start..=row_end {
            let row_index = check_row * self.columns;
            for check_column in column_start..=column_end {
                result.extend_from_slice(&self.grid[row_index + check_column]);
            }
        }

        result
    }
}

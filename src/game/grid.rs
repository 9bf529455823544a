//! Grid geometry: cells and the wrap-around world they live in

use rand::Rng;

use super::action::Direction;
use super::error::ConfigError;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// Immutable grid dimensions and cell size.
///
/// The grid is toroidal: leaving one edge re-enters from the opposite one.
/// Construction validates the dimensions, so every `GridWorld` in existence
/// has at least one cell on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridWorld {
    width: i32,
    height: i32,
    cell_size: u32,
}

impl GridWorld {
    /// Create a grid of `width` x `height` cells, each `cell_size` pixels wide
    pub fn new(width: u32, height: u32, cell_size: u32) -> Result<Self, ConfigError> {
        let width = axis_extent("width", width)?;
        let height = axis_extent("height", height)?;
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        // Keeps every pixel coordinate representable as u32.
        for (axis, cells) in [("width", width), ("height", height)] {
            if (cells as u32).checked_mul(cell_size).is_none() {
                return Err(ConfigError::ScreenTooLarge {
                    axis,
                    cells: cells as u32,
                    cell_size,
                });
            }
        }

        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Number of cells on the grid
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The cell the snake starts from
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Whether `cell` lies inside the grid
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.col) && (0..self.height).contains(&cell.row)
    }

    /// Bring arbitrary coordinates back onto the grid.
    ///
    /// `rem_euclid` keeps the result non-negative for negative inputs.
    pub fn wrap(&self, col: i32, row: i32) -> Cell {
        Cell::new(col.rem_euclid(self.width), row.rem_euclid(self.height))
    }

    /// The neighbour of `cell` one step in `direction`, wrapping at the edges
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        self.wrap(cell.col + dx, cell.row + dy)
    }

    /// Uniformly random cell of the full grid
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |row| (0..width).map(move |col| Cell::new(col, row)))
    }

    /// Size of the whole grid in pixels
    pub fn screen_size(&self) -> (u32, u32) {
        (
            self.width as u32 * self.cell_size,
            self.height as u32 * self.cell_size,
        )
    }
}

/// Top-left pixel of `cell` for the given grid. Off-grid cells are wrapped
/// first.
pub fn cell_to_pixel(world: &GridWorld, cell: Cell) -> (u32, u32) {
    let cell = world.wrap(cell.col, cell.row);
    (
        cell.col as u32 * world.cell_size,
        cell.row as u32 * world.cell_size,
    )
}

fn axis_extent(axis: &'static str, value: u32) -> Result<i32, ConfigError> {
    if value == 0 {
        return Err(ConfigError::EmptyGrid { axis });
    }
    i32::try_from(value).map_err(|_| ConfigError::GridTooLarge { axis, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn world() -> GridWorld {
        GridWorld::new(32, 24, 20).unwrap()
    }

    #[test]
    fn test_rejects_empty_dimensions() {
        assert!(matches!(
            GridWorld::new(0, 24, 20),
            Err(ConfigError::EmptyGrid { axis: "width" })
        ));
        assert!(matches!(
            GridWorld::new(32, 0, 20),
            Err(ConfigError::EmptyGrid { axis: "height" })
        ));
        assert!(matches!(
            GridWorld::new(32, 24, 0),
            Err(ConfigError::ZeroCellSize)
        ));
    }

    #[test]
    fn test_rejects_oversized_dimensions() {
        assert!(matches!(
            GridWorld::new(u32::MAX, 24, 20),
            Err(ConfigError::GridTooLarge { axis: "width", .. })
        ));
    }

    #[test]
    fn test_rejects_screen_wider_than_u32() {
        assert!(matches!(
            GridWorld::new(32, 24, 300_000_000),
            Err(ConfigError::ScreenTooLarge { axis: "width", .. })
        ));
        assert!(matches!(
            GridWorld::new(1, 100_000, 100_000),
            Err(ConfigError::ScreenTooLarge { axis: "height", .. })
        ));

        // Largest accepted screen still converts without overflow.
        let widest = GridWorld::new(1 << 16, 1, (1 << 16) - 1).unwrap();
        assert_eq!(widest.screen_size(), ((1 << 16) * ((1 << 16) - 1), (1 << 16) - 1));
        assert_eq!(
            cell_to_pixel(&widest, Cell::new((1 << 16) - 1, 0)),
            (((1 << 16) - 1) * ((1 << 16) - 1), 0)
        );
    }

    #[test]
    fn test_center() {
        assert_eq!(world().center(), Cell::new(16, 12));
        assert_eq!(GridWorld::new(1, 1, 1).unwrap().center(), Cell::new(0, 0));
        assert_eq!(GridWorld::new(5, 3, 1).unwrap().center(), Cell::new(2, 1));
    }

    #[test]
    fn test_wrap_on_every_edge() {
        let w = world();
        assert_eq!(w.step(Cell::new(31, 5), Direction::Right), Cell::new(0, 5));
        assert_eq!(w.step(Cell::new(0, 5), Direction::Left), Cell::new(31, 5));
        assert_eq!(w.step(Cell::new(7, 0), Direction::Up), Cell::new(7, 23));
        assert_eq!(w.step(Cell::new(7, 23), Direction::Down), Cell::new(7, 0));
    }

    #[test]
    fn test_wrap_is_non_negative() {
        let w = world();
        assert_eq!(w.wrap(-1, -1), Cell::new(31, 23));
        assert_eq!(w.wrap(-33, -25), Cell::new(31, 23));
        assert_eq!(w.wrap(64, 48), Cell::new(0, 0));
    }

    #[test]
    fn test_random_cell_stays_on_grid() {
        let w = GridWorld::new(3, 2, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            assert!(w.contains(w.random_cell(&mut rng)));
        }
    }

    #[test]
    fn test_cells_enumerates_grid() {
        let w = GridWorld::new(3, 2, 1).unwrap();
        let cells: Vec<Cell> = w.cells().collect();
        assert_eq!(cells.len(), w.cell_count());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[3], Cell::new(0, 1));
        assert_eq!(cells[5], Cell::new(2, 1));
    }

    #[test]
    fn test_pixel_geometry() {
        let w = world();
        assert_eq!(w.screen_size(), (640, 480));
        assert_eq!(cell_to_pixel(&w, Cell::new(0, 0)), (0, 0));
        assert_eq!(cell_to_pixel(&w, Cell::new(16, 12)), (320, 240));
        assert_eq!(cell_to_pixel(&w, Cell::new(31, 23)), (620, 460));
        assert_eq!(cell_to_pixel(&w, Cell::new(-1, 24)), (620, 0));
    }
}

//! Maps the continuous field onto a character grid.

use wf_simulation::{CoordinateDomain, Position, Rgb, SimConfig, WeedField, WeedId};

/// Cell edge length in field units for real-valued runs.
pub const FRAME_DISCRETIZATION: f64 = 0.1;

/// Largest grid that will be allocated.
pub const MAX_GRID_CELLS: usize = 1_000_000;

/// Rows between two y-axis labels.
const LABEL_EVERY: usize = 10;

// Guards floor() against 0.3 / 0.1 = 2.9999999999999996.
const CELL_EPSILON: f64 = 1e-9;

/// What occupies a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMark {
    pub id: WeedId,
    pub color: Option<Rgb>,
}

/// A snapshot of the field rasterized to cells. Row 0 is `y = 0`.
#[derive(Debug, Clone)]
pub struct FieldGrid {
    cols: usize,
    rows: usize,
    cell: f64,
    cells: Vec<Option<GridMark>>,
}

impl FieldGrid {
    /// Size the grid for a run: tenth-unit cells for real coordinates, unit
    /// cells for whole-numbered ones. Fails rather than allocate more than
    /// [`MAX_GRID_CELLS`].
    pub fn for_config(config: &SimConfig) -> Result<Self, String> {
        let cell = match config.coordinates {
            CoordinateDomain::Real => FRAME_DISCRETIZATION,
            CoordinateDomain::Integer => 1.0,
        };
        let too_large = || {
            format!(
                "field {}x{} is too large to draw (limit {MAX_GRID_CELLS} cells)",
                config.field_width, config.field_height
            )
        };

        let cols = axis_cells(config.field_width, cell).ok_or_else(too_large)?;
        let rows = axis_cells(config.field_height, cell).ok_or_else(too_large)?;
        let len = cols
            .checked_mul(rows)
            .filter(|&n| n <= MAX_GRID_CELLS)
            .ok_or_else(too_large)?;

        Ok(Self {
            cols,
            rows,
            cell,
            cells: vec![None; len],
        })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Redraw from the current field. Weeds outside the grid are culled;
    /// when two weeds share a cell the newer one is shown.
    pub fn plot(&mut self, field: &WeedField) {
        self.cells.fill(None);
        for weed in field {
            if let Some((col, row)) = self.cell_of(weed.position()) {
                self.cells[row * self.cols + col] = Some(GridMark {
                    id: weed.id(),
                    color: weed.color(),
                });
            }
        }
    }

    /// The cell containing `p`, or `None` if it falls outside the grid.
    pub fn cell_of(&self, p: Position) -> Option<(usize, usize)> {
        let col = (p.x / self.cell + CELL_EPSILON).floor();
        let row = (p.y / self.cell + CELL_EPSILON).floor();
        if col.is_nan() || row.is_nan() || col < 0.0 || row < 0.0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        (col < self.cols && row < self.rows).then_some((col, row))
    }

    pub fn mark(&self, col: usize, row: usize) -> Option<GridMark> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// Id labels for one row. Each weed's id is written into the free cells
    /// to its right and is cut off at the next weed or the grid edge.
    pub fn id_labels(&self, row: usize) -> Vec<Option<char>> {
        let mut labels = vec![None; self.cols];
        for col in 0..self.cols {
            let Some(mark) = self.mark(col, row) else {
                continue;
            };
            for (offset, ch) in mark.id.0.to_string().chars().enumerate() {
                let at = col + 1 + offset;
                if at >= self.cols || self.mark(at, row).is_some() {
                    break;
                }
                labels[at] = Some(ch);
            }
        }
        labels
    }

    /// Number of cells holding at least one weed.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Label for the right-hand axis, present every ten rows.
    pub fn y_label(&self, row: usize) -> Option<String> {
        if row % LABEL_EVERY != 0 {
            return None;
        }
        let value = row as f64 * self.cell;
        Some(if self.cell < 1.0 {
            format!("{value:.1}")
        } else {
            format!("{value:.0}")
        })
    }

    /// Bottom axis, one character per column. Tenth-unit grids read top to
    /// bottom as `integer part`, `.`, `tenths`; unit grids as `tens`, `ones`.
    pub fn x_axis(&self) -> Vec<String> {
        let columns = 0..self.cols;
        if self.cell < 1.0 {
            vec![
                columns.clone().map(|i| digit(i / 10)).collect(),
                ".".repeat(self.cols),
                columns.map(|i| digit(i % 10)).collect(),
            ]
        } else {
            vec![
                columns.clone().map(|i| digit(i / 10)).collect(),
                columns.map(|i| digit(i % 10)).collect(),
            ]
        }
    }

    /// Render a bordered frame with `*` for every occupied cell.
    pub fn to_ascii(&self) -> String {
        let border = format!("+{}+", "-".repeat(self.cols));
        let mut out = String::with_capacity((self.cols + 8) * (self.rows + 5));

        out.push_str(&border);
        out.push('\n');
        for row in 0..self.rows {
            out.push('|');
            for col in 0..self.cols {
                out.push(if self.mark(col, row).is_some() { '*' } else { ' ' });
            }
            out.push('|');
            if let Some(label) = self.y_label(row) {
                out.push(' ');
                out.push_str(&label);
            }
            out.push('\n');
        }
        out.push_str(&border);
        out.push('\n');
        for axis_row in self.x_axis() {
            out.push(' ');
            out.push_str(&axis_row);
            out.push('\n');
        }
        out
    }
}

/// Cells along one axis, or `None` past the allocation limit.
fn axis_cells(extent: f64, cell: f64) -> Option<usize> {
    let n = (extent / cell).round().max(1.0);
    (n.is_finite() && n <= MAX_GRID_CELLS as f64).then_some(n as usize)
}

fn digit(n: usize) -> char {
    char::from_digit((n % 10) as u32, 10).unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_simulation::{ColorMode, Simulation};

    #[test]
    fn default_field_is_fifty_by_fifty() {
        let grid = FieldGrid::for_config(&SimConfig::default()).unwrap();
        assert_eq!(grid.cols(), 50);
        assert_eq!(grid.rows(), 50);
    }

    #[test]
    fn oversized_fields_are_rejected() {
        for (w, h) in [(5000.0, 5000.0), (100_000.0, 100_000.0), (1e300, 1e300), (1e9, 0.1)] {
            let err = FieldGrid::for_config(&SimConfig::default().with_field(w, h)).unwrap_err();
            assert!(err.contains("too large"), "{err}");
        }

        // 100 x 100 units at tenth-unit cells is exactly the limit.
        let grid = FieldGrid::for_config(&SimConfig::default().with_field(100.0, 100.0)).unwrap();
        assert_eq!(grid.cols() * grid.rows(), MAX_GRID_CELLS);
    }

    #[test]
    fn ids_are_written_after_their_weed() {
        let mut sim = Simulation::new(SimConfig::default().with_color(ColorMode::Off)).unwrap();
        sim.run(12).unwrap();
        let mut grid = FieldGrid::for_config(sim.config()).unwrap();
        grid.plot(sim.field());

        let weed = sim.field().get(WeedId(1)).unwrap();
        let (col, row) = grid.cell_of(weed.position()).unwrap();
        let labels = grid.id_labels(row);
        assert_eq!(labels.len(), grid.cols());
        assert_eq!(labels[col], None);
        if grid.mark(col + 1, row).is_none() {
            assert_eq!(labels[col + 1], Some('1'));
        }
    }

    #[test]
    fn id_labels_stop_at_the_edge() {
        let config = SimConfig::default().with_field(0.1, 0.1).with_speed(0.0);
        let mut sim = Simulation::new(config).unwrap();
        sim.run(1).unwrap();
        let mut grid = FieldGrid::for_config(sim.config()).unwrap();
        grid.plot(sim.field());
        assert_eq!(grid.occupied(), 1);
        assert_eq!(grid.id_labels(0), vec![None]);
    }

    #[test]
    fn cell_lookup_and_culling() {
        let grid = FieldGrid::for_config(&SimConfig::default()).unwrap();
        assert_eq!(grid.cell_of(Position::new(0.0, 0.0)), Some((0, 0)));
        assert_eq!(grid.cell_of(Position::new(0.3, 0.25)), Some((3, 2)));
        assert_eq!(grid.cell_of(Position::new(4.99, 4.99)), Some((49, 49)));
        assert_eq!(grid.cell_of(Position::new(5.0, 1.0)), None);
        assert_eq!(grid.cell_of(Position::new(1.0, -0.05)), None);
        assert_eq!(grid.cell_of(Position::new(f64::NAN, 1.0)), None);
    }

    #[test]
    fn plot_marks_weed_cells() {
        let mut sim = Simulation::new(SimConfig::default().with_color(ColorMode::Off)).unwrap();
        sim.run(3).unwrap();
        let mut grid = FieldGrid::for_config(sim.config()).unwrap();
        grid.plot(sim.field());

        assert!(grid.occupied() >= 1 && grid.occupied() <= 3);
        for weed in sim.field() {
            let (col, row) = grid.cell_of(weed.position()).unwrap();
            assert!(grid.mark(col, row).is_some());
        }
    }

    #[test]
    fn axis_labels() {
        let grid = FieldGrid::for_config(&SimConfig::default()).unwrap();
        let axis = grid.x_axis();
        assert_eq!(axis.len(), 3);
        assert!(axis[0].starts_with("0000000000111"));
        assert_eq!(axis[1].len(), 50);
        assert!(axis[2].starts_with("01234567890"));
        assert_eq!(grid.y_label(0).as_deref(), Some("0.0"));
        assert_eq!(grid.y_label(10).as_deref(), Some("1.0"));
        assert_eq!(grid.y_label(11), None);

        let grid = FieldGrid::for_config(&SimConfig::integer()).unwrap();
        assert_eq!(grid.x_axis().len(), 2);
        assert_eq!(grid.y_label(20).as_deref(), Some("20"));
    }

    #[test]
    fn ascii_frame_shape() {
        let grid = FieldGrid::for_config(&SimConfig::default()).unwrap();
        let text = grid.to_ascii();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 50 + 2 + 3);
        assert_eq!(lines[0].len(), 52);
        assert_eq!(lines[1], format!("|{}| 0.0", " ".repeat(50)));
        assert!(!text.contains('*'));
    }
}

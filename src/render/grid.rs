//! Tiles cells into one bordered text block.
//!
//! Rows are independent: every cell in a row is stretched to the row's
//! tallest cell, other rows are unaffected.

use super::cell::Cell;

// Box-drawing glyphs
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const T_DOWN: &str = "┬";
const T_UP: &str = "┴";
const T_RIGHT: &str = "├";
const T_LEFT: &str = "┤";
const CROSS: &str = "┼";
pub(crate) const H: &str = "─";
const V: &str = "│";

pub struct Grid<'a> {
    columns: usize,
    cells: Vec<Cell<'a>>,
}

impl<'a> Grid<'a> {
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            cells: Vec::new(),
        }
    }

    pub fn append(&mut self, cell: Cell<'a>) {
        self.cells.push(cell);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whole grid, lines joined by `\n`, no trailing newline.  Empty grid
    /// renders as an empty string.
    #[must_use]
    pub fn render(self) -> String {
        let Some(first) = self.cells.first() else {
            return String::new();
        };
        let cfg = first.config();
        let width = first.width();

        // fewer cells than columns: shrink instead of padding with empties
        let cols = self.columns.min(self.cells.len()).max(1);

        let mut rows: Vec<Vec<Cell<'a>>> = Vec::with_capacity(self.cells.len().div_ceil(cols));
        let mut cells = self.cells.into_iter().peekable();
        while cells.peek().is_some() {
            let mut row: Vec<Cell<'a>> = cells.by_ref().take(cols).collect();
            row.resize_with(cols, || Cell::new(cfg));
            rows.push(row);
        }

        let segment = H.repeat(width);
        let border = |left: &str, mid: &str, right: &str| {
            format!("{left}{}{right}", vec![segment.as_str(); cols].join(mid))
        };
        let blank = " ".repeat(width);

        let mut out = Vec::new();
        out.push(border(TL, T_DOWN, TR));

        for (idx, mut row) in rows.into_iter().enumerate() {
            let row_height = row.iter().map(Cell::height).max().unwrap_or(0);
            for cell in &mut row {
                cell.set_height(row_height);
            }

            if idx > 0 {
                out.push(border(T_RIGHT, CROSS, T_LEFT));
            }

            let columns: Vec<Vec<String>> = row.iter().map(Cell::lines).collect();
            let line_count = columns.iter().map(Vec::len).max().unwrap_or(0);
            for i in 0..line_count {
                let parts: Vec<&str> = columns
                    .iter()
                    .map(|lines| lines.get(i).map_or(blank.as_str(), String::as_str))
                    .collect();
                out.push(format!("{V}{}{V}", parts.join(V)));
            }
        }

        out.push(border(BL, T_UP, BR));
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{config::Config, width::string_width};

    fn cell<'a>(cfg: &'a Config, title: &str, rows: u32) -> Cell<'a> {
        let mut c = Cell::new(cfg);
        c.set_title(title);
        c.set_weekday_line("Su Mo Tu We Th Fr Sa");
        for wk in 0..rows {
            c.append_row(wk, vec!["  ".to_owned(); 7]).unwrap();
        }
        c
    }

    #[test]
    fn empty_grid_renders_nothing() {
        assert_eq!(Grid::new(3).render(), "");
    }

    #[test]
    fn single_cell_box() {
        let cfg = Config::builder().week_numbers(false).build().unwrap();
        let mut grid = Grid::new(3);
        grid.append(cell(&cfg, "x", 1));
        let out = grid.render();
        let lines: Vec<&str> = out.lines().collect();
        // columns shrink to the cell count
        assert_eq!(lines[0], format!("┌{}┐", "─".repeat(22)));
        assert_eq!(lines.last().copied(), Some(format!("└{}┘", "─".repeat(22)).as_str()));
        assert_eq!(lines.len(), 2 + 4);
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn thirteen_cells_in_four_columns() {
        let cfg = Config::default();
        let mut grid = Grid::new(4);
        for i in 0..13 {
            grid.append(cell(&cfg, &format!("m{i}"), 5));
        }
        assert_eq!(grid.len(), 13);
        let out = grid.render();
        let lines: Vec<&str> = out.lines().collect();

        let inter: Vec<&&str> = lines.iter().filter(|l| l.starts_with('├')).collect();
        assert_eq!(inter.len(), 3, "4 rows → 3 inter-row borders");
        for b in &inter {
            assert_eq!(b.matches('┼').count(), 3);
            assert_eq!(b.split('┼').count(), 4);
        }
        assert_eq!(lines[0].matches('┬').count(), 3);
        assert_eq!(lines.last().unwrap().matches('┴').count(), 3);

        // every line is 4 cells + 5 glyphs wide
        for l in &lines {
            assert_eq!(string_width(l), 4 * 27 + 5, "{l}");
        }

        // last row: one real cell, three empty fillers
        let last_row = &lines[lines.len() - 9..lines.len() - 1];
        assert!(last_row[0].contains("m12"));
        assert!(last_row.iter().all(|l| l.ends_with(&format!("│{}│", " ".repeat(27)))));
    }

    #[test]
    fn heights_reconciled_per_row() {
        let cfg = Config::default();
        let mut grid = Grid::new(2);
        grid.append(cell(&cfg, "tall", 6));
        grid.append(cell(&cfg, "short", 4));
        grid.append(cell(&cfg, "a", 4));
        grid.append(cell(&cfg, "b", 5));
        let out = grid.render();
        let lines: Vec<&str> = out.lines().collect();

        // top + (3 + 6) + border + (3 + 5) + bottom
        assert_eq!(lines.len(), 1 + 9 + 1 + 8 + 1);
        // short cell got two padding rows next to the tall one
        let pad = format!("   │ {} │", " ".repeat(20));
        assert!(lines[8].ends_with(&pad), "{}", lines[8]);
        assert!(lines[9].ends_with(&pad), "{}", lines[9]);
        assert!(lines[10].starts_with('├'));
    }
}

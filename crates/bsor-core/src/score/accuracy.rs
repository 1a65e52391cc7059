use serde::Serialize;

use crate::replay::Note;

/// Columns in the note grid.
pub const GRID_COLUMNS: usize = 4;
/// Rows in the note grid.
pub const GRID_ROWS: usize = 3;
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// Running total for one grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CellAccuracy {
    pub notes: u32,
    pub total_score: u64,
}

impl CellAccuracy {
    pub fn average(&self) -> Option<f64> {
        if self.notes == 0 {
            None
        } else {
            Some(self.total_score as f64 / f64::from(self.notes))
        }
    }
}

/// Average cut score per grid position.
///
/// Cells are indexed by `line_index + 4 * note_line_layer`, so cell 0 is
/// the bottom-left lane and cell 11 the top-right. Notes that map outside
/// the grid are counted in cell 0. Only notes that scored are included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccuracyGrid {
    pub cells: [CellAccuracy; GRID_CELLS],
}

/// Grid cell of a note, falling back to 0 when out of range.
pub fn cell_index(line_index: u8, note_line_layer: u8) -> usize {
    let index = usize::from(line_index) + GRID_COLUMNS * usize::from(note_line_layer);
    if index < GRID_CELLS { index } else { 0 }
}

impl AccuracyGrid {
    pub fn from_notes(notes: &[Note]) -> Self {
        let mut grid = Self::default();
        for note in notes {
            let score = note.total_score();
            if score == 0 {
                continue;
            }
            let cell = &mut grid.cells[cell_index(note.line_index(), note.note_line_layer())];
            cell.notes += 1;
            cell.total_score += u64::from(score);
        }
        grid
    }

    pub fn cell(&self, line_index: u8, note_line_layer: u8) -> &CellAccuracy {
        &self.cells[cell_index(line_index, note_line_layer)]
    }

    /// Rows from top to bottom, each with the average of its four cells.
    pub fn rows(&self) -> Vec<[Option<f64>; GRID_COLUMNS]> {
        (0..GRID_ROWS)
            .rev()
            .map(|row| {
                let mut averages = [None; GRID_COLUMNS];
                for (col, avg) in averages.iter_mut().enumerate() {
                    *avg = self.cells[row * GRID_COLUMNS + col].average();
                }
                averages
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::perfect_cut;
    use crate::replay::{Cut, NoteEvent};

    fn cut_note(note_id: i32, cut: Cut) -> Note {
        Note::new(note_id, 1.0, 0.5, NoteEvent::Good(cut)).unwrap()
    }

    #[test]
    fn test_cell_index() {
        assert_eq!(cell_index(0, 0), 0);
        assert_eq!(cell_index(3, 0), 3);
        assert_eq!(cell_index(1, 2), 9);
        assert_eq!(cell_index(3, 2), 11);
        assert_eq!(cell_index(0, 3), 0);
        assert_eq!(cell_index(9, 9), 0);
    }

    #[test]
    fn test_averages_scored_notes_only() {
        let mut weaker = perfect_cut();
        weaker.before_cut_rating = 0.5;
        let notes = vec![
            cut_note(31203, perfect_cut()),
            cut_note(31213, weaker),
            Note::new(31203, 2.0, 1.5, NoteEvent::Miss).unwrap(),
        ];
        let grid = AccuracyGrid::from_notes(&notes);

        let cell = grid.cell(1, 2);
        assert_eq!(cell.notes, 2);
        assert_eq!(cell.total_score, 115 + 80);
        assert_eq!(cell.average(), Some(97.5));
        assert_eq!(grid.cell(0, 0).average(), None);
    }

    #[test]
    fn test_out_of_range_lane_lands_in_cell_zero() {
        let grid = AccuracyGrid::from_notes(&[cut_note(39903, perfect_cut())]);
        assert_eq!(grid.cells[0].notes, 1);
    }

    #[test]
    fn test_rows_top_down() {
        let grid = AccuracyGrid::from_notes(&[cut_note(33203, perfect_cut())]);
        let rows = grid.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][3], Some(115.0));
        assert_eq!(rows[2][3], None);
    }
}

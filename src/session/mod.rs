//! Interactive play sessions over a generated puzzle

pub use self::value_set::ValueSet;

mod history;
mod value_set;

use std::time::{Duration, Instant};

use crate::collections::square::Coord;
use crate::collections::Square;
use crate::puzzle::{check_entries, CheckError, Puzzle, Value};
use crate::session::history::{MoveHistory, Snapshot};

/// Whether keyed values are entered as definite values or pencil marks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Notes,
}

/// Play has not begun, is under way, or is done. Time accrues only while
/// under way.
#[derive(Clone, Copy, Debug)]
enum Lifecycle {
    NotStarted,
    InProgress { started: Instant },
    Complete { elapsed: Duration },
}

/// A hint pointing at the most useful cell to look at next.
///
/// Advisory only: requesting a hint moves the selection but never changes
/// the board.
#[derive(Clone, Debug)]
pub struct Hint {
    pub message: String,
    pub coord: Option<Coord>,
}

/// One player's in-progress state over a puzzle: entered values, pencil
/// marks, undo history, selection, and check results
pub struct Session {
    puzzle: Puzzle,
    entries: Square<Value>,
    notes: Square<ValueSet>,
    history: MoveHistory,
    lifecycle: Lifecycle,
    mode: InputMode,
    selected: Coord,
    errors: Vec<CheckError>,
    hint: Option<Hint>,
}

impl Session {
    pub fn new(puzzle: Puzzle) -> Self {
        let width = puzzle.width();
        Self {
            entries: Square::with_width_and_value(width, 0),
            notes: Square::with_width_and_value(width, ValueSet::new(width)),
            history: MoveHistory::new(),
            lifecycle: Lifecycle::NotStarted,
            mode: InputMode::Normal,
            selected: Coord::new(0, 0),
            errors: Vec::new(),
            hint: None,
            puzzle,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn entries(&self) -> &Square<Value> {
        &self.entries
    }

    /// The pencil marks on a cell
    pub fn notes(&self, coord: Coord) -> &ValueSet {
        &self.notes[coord]
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn selected(&self) -> Coord {
        self.selected
    }

    /// The check messages recorded by the last `check`, cleared by any
    /// mutation
    pub fn errors(&self) -> &[CheckError] {
        &self.errors
    }

    pub fn current_hint(&self) -> Option<&Hint> {
        self.hint.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Complete { .. })
    }

    /// Play time so far; frozen once the puzzle completes
    pub fn elapsed(&self) -> Duration {
        match self.lifecycle {
            Lifecycle::NotStarted => Duration::from_secs(0),
            Lifecycle::InProgress { started } => started.elapsed(),
            Lifecycle::Complete { elapsed } => elapsed,
        }
    }

    /// How many moves can currently be undone
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    /// Switching modes never alters the board
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            InputMode::Normal => InputMode::Notes,
            InputMode::Notes => InputMode::Normal,
        };
    }

    /// Selects a cell, clamping out-of-range coordinates onto the grid
    pub fn select(&mut self, coord: Coord) {
        self.selected = self.clamp(coord);
    }

    /// Moves the selection by a row/column delta, clamped to the grid
    pub fn move_selection(&mut self, rows: isize, cols: isize) {
        let width = self.puzzle.width();
        let row = clamped_step(self.selected.row(), rows, width);
        let col = clamped_step(self.selected.col(), cols, width);
        self.selected = Coord::new(col, row);
    }

    fn clamp(&self, coord: Coord) -> Coord {
        let max = self.puzzle.width() - 1;
        Coord::new(coord.col().min(max), coord.row().min(max))
    }

    /// Applies a keyed value to a cell under the current input mode.
    ///
    /// Normal mode: a value in `1..=N` is entered and the cell's notes are
    /// cleared (a definite value and pencil marks are mutually exclusive);
    /// anything else clears the cell. Notes mode: a value in `1..=N` toggles
    /// that pencil mark, anything else is rejected outright. Every applied
    /// input pushes an undo snapshot first and clears stale check messages.
    pub fn apply_input(&mut self, coord: Coord, value: Value) {
        if self.is_complete() {
            return;
        }
        let coord = self.clamp(coord);
        let valid = value >= 1 && value <= self.puzzle.width() as Value;
        if self.mode == InputMode::Notes && !valid {
            return;
        }
        self.snapshot(coord);
        match self.mode {
            InputMode::Normal => {
                self.entries[coord] = if valid { value } else { 0 };
                self.notes[coord].clear();
            }
            InputMode::Notes => {
                self.notes[coord].toggle(value);
            }
        }
        self.errors.clear();
        self.start();
    }

    fn start(&mut self) {
        if let Lifecycle::NotStarted = self.lifecycle {
            self.lifecycle = Lifecycle::InProgress {
                started: Instant::now(),
            };
        }
    }

    fn snapshot(&mut self, coord: Coord) {
        self.history.push(Snapshot {
            entries: self.entries.clone(),
            notes: self.notes.clone(),
            coord,
            at: Instant::now(),
        });
    }

    /// Restores the board to the most recent snapshot. No-op with no
    /// history.
    pub fn undo(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        let snapshot = match self.history.pop() {
            Some(snapshot) => snapshot,
            None => return false,
        };
        debug!(
            "undo input at {:?}, made {:?} ago",
            snapshot.coord,
            snapshot.at.elapsed()
        );
        self.entries = snapshot.entries;
        self.notes = snapshot.notes;
        self.errors.clear();
        true
    }

    /// Runs the full board check and records the message list.
    ///
    /// Returns whether this check completed the puzzle, so the host can
    /// record the streak exactly once; checks on an already-complete board
    /// return false.
    pub fn check(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.errors = check_entries(&self.puzzle, &self.entries);
        if !self.errors.is_empty() {
            return false;
        }
        let elapsed = self.elapsed();
        self.lifecycle = Lifecycle::Complete { elapsed };
        true
    }

    /// Points at the first empty cell, else the first incorrect cell, and
    /// moves the selection there
    pub fn hint(&mut self) -> Hint {
        let hint = self.find_hint();
        if let Some(coord) = hint.coord {
            self.selected = coord;
        }
        self.hint = Some(hint.clone());
        hint
    }

    fn find_hint(&self) -> Hint {
        let solution = self.puzzle.solution();
        for (cell, &value) in self.entries.iter().enumerate() {
            if value == 0 {
                let coord = self.puzzle.coord_at(cell);
                let cage = self.puzzle.cage(self.puzzle.cell_cage(cell));
                return Hint {
                    message: format!(
                        "Cell ({}, {}) should be {} (cage {})",
                        coord.row() + 1,
                        coord.col() + 1,
                        solution[cell],
                        cage.label()
                    ),
                    coord: Some(coord),
                };
            }
        }
        for (cell, &value) in self.entries.iter().enumerate() {
            if value != solution[cell] {
                let coord = self.puzzle.coord_at(cell);
                return Hint {
                    message: format!(
                        "Cell ({}, {}) should be {}, not {}",
                        coord.row() + 1,
                        coord.col() + 1,
                        solution[cell],
                        value
                    ),
                    coord: Some(coord),
                };
            }
        }
        Hint {
            message: "The grid is already correct".into(),
            coord: None,
        }
    }

    /// Returns the board to a fresh, untimed state
    pub fn reset(&mut self) {
        let width = self.puzzle.width();
        self.entries = Square::with_width_and_value(width, 0);
        self.notes = Square::with_width_and_value(width, ValueSet::new(width));
        self.history.clear();
        self.lifecycle = Lifecycle::NotStarted;
        self.mode = InputMode::Normal;
        self.errors.clear();
        self.hint = None;
    }
}

fn clamped_step(position: usize, delta: isize, width: usize) -> usize {
    let stepped = position as isize + delta;
    stepped.max(0).min(width as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::{InputMode, Session};
    use crate::collections::square::Coord;
    use crate::puzzle::seed::Seed;
    use crate::puzzle::Puzzle;

    fn session() -> Session {
        Session::new(Puzzle::with_seed(Seed::new("session-tests")))
    }

    #[test]
    fn selection_clamps_to_grid() {
        let mut session = session();
        let max = session.puzzle().width() - 1;
        session.select(Coord::new(100, 100));
        assert_eq!(Coord::new(max, max), session.selected());
        session.move_selection(-10, -10);
        assert_eq!(Coord::new(0, 0), session.selected());
    }

    #[test]
    fn mode_switch_leaves_board_alone() {
        let mut session = session();
        session.apply_input(Coord::new(0, 0), 1);
        let entries = session.entries().clone();
        session.toggle_mode();
        assert_eq!(InputMode::Notes, session.mode());
        assert_eq!(&entries, session.entries());
    }

    #[test]
    fn out_of_range_value_clears_in_normal_mode() {
        let mut session = session();
        let width = session.puzzle().width() as i32;
        session.apply_input(Coord::new(0, 0), 1);
        session.apply_input(Coord::new(0, 0), width + 1);
        assert_eq!(0, session.entries()[Coord::new(0, 0)]);
    }

    #[test]
    fn out_of_range_note_is_rejected_without_snapshot() {
        let mut session = session();
        let width = session.puzzle().width() as i32;
        session.set_mode(InputMode::Notes);
        session.apply_input(Coord::new(0, 0), width + 1);
        assert_eq!(0, session.undo_depth());
        assert!(session.notes(Coord::new(0, 0)).is_empty());
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut session = session();
        assert!(!session.undo());
    }
}

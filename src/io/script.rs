//! Line-based edit scripts that replay gestures against a session
//!
//! One command per line; blank lines and `#` comments are skipped:
//!
//! ```text
//! tool fill
//! block stone
//! click 3 4
//! select 0 0 5 7
//! fill-selection
//! undo
//! ```

use std::str::FromStr;

use crate::editor::{EditorSession, NotificationSink, Tool};
use crate::io::error::{PlannerError, Result};

/// One scripted gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Switch tools
    Tool(Tool),
    /// Choose a palette entry
    Block(String),
    /// Activate a cell with the current tool
    Click {
        /// Row of the cell
        row: usize,
        /// Column of the cell
        col: usize,
    },
    /// Drag a selection from one cell to another
    Select {
        /// Cell where the drag starts
        from: (usize, usize),
        /// Cell where the drag ends
        to: (usize, usize),
    },
    /// Fill the selection with the selected block
    FillSelection,
    /// Drop the selection
    ClearSelection,
    /// Escape key
    Cancel,
    /// Undo one edit
    Undo,
    /// Redo one edit
    Redo,
    /// Clear the whole grid
    Clear,
}

fn parse_index(word: Option<&str>, what: &str) -> std::result::Result<usize, String> {
    let word = word.ok_or_else(|| format!("missing {what}"))?;
    word.parse::<usize>()
        .map_err(|e| format!("invalid {what} '{word}': {e}"))
}

impl FromStr for EditCommand {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or_else(|| "empty command".to_string())?;

        let command = match keyword {
            "tool" => {
                let name = words.next().ok_or_else(|| "missing tool name".to_string())?;
                Self::Tool(name.parse().map_err(|e: PlannerError| e.to_string())?)
            }
            "block" => {
                let id = words.next().ok_or_else(|| "missing block id".to_string())?;
                Self::Block(id.to_string())
            }
            "click" => Self::Click {
                row: parse_index(words.next(), "row")?,
                col: parse_index(words.next(), "column")?,
            },
            "select" => Self::Select {
                from: (
                    parse_index(words.next(), "start row")?,
                    parse_index(words.next(), "start column")?,
                ),
                to: (
                    parse_index(words.next(), "end row")?,
                    parse_index(words.next(), "end column")?,
                ),
            },
            "fill-selection" => Self::FillSelection,
            "clear-selection" => Self::ClearSelection,
            "cancel" => Self::Cancel,
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "clear" => Self::Clear,
            other => return Err(format!("unknown command '{other}'")),
        };

        match words.next() {
            Some(extra) => Err(format!("unexpected argument '{extra}'")),
            None => Ok(command),
        }
    }
}

/// Parse a whole script
///
/// # Errors
///
/// Returns an error naming the first line that fails to parse
pub fn parse_script(text: &str) -> Result<Vec<EditCommand>> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.split('#').next().unwrap_or_default().trim();
            (!line.is_empty()).then_some((index + 1, line))
        })
        .map(|(line_number, line)| {
            line.parse::<EditCommand>().map_err(|reason| PlannerError::Script {
                line: line_number,
                reason,
            })
        })
        .collect()
}

/// Outcome of replaying a script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptReport {
    /// Commands replayed
    pub commands: usize,
    /// Commands that changed the grid
    pub edits: usize,
}

impl EditCommand {
    /// Replay the gesture, returning whether the grid changed
    pub fn apply<S: NotificationSink>(&self, session: &mut EditorSession<S>) -> bool {
        match self {
            Self::Tool(tool) => {
                session.set_tool(*tool);
                false
            }
            Self::Block(id) => {
                session.select_block(id);
                false
            }
            Self::Click { row, col } => session.activate_cell(*row, *col),
            Self::Select { from, to } => {
                session.begin_selection(from.0, from.1);
                session.update_selection(to.0, to.1);
                session.end_selection();
                false
            }
            Self::FillSelection => {
                let before = session.history().pointer();
                session.fill_selection() && session.history().pointer() != before
            }
            Self::ClearSelection => {
                session.clear_selection();
                false
            }
            Self::Cancel => {
                session.cancel();
                false
            }
            Self::Undo => session.undo(),
            Self::Redo => session.redo(),
            Self::Clear => {
                if !session.request_clear() {
                    return false;
                }
                session.clear_grid();
                true
            }
        }
    }
}

/// Replay every command in order
pub fn run_script<S: NotificationSink>(
    commands: &[EditCommand],
    session: &mut EditorSession<S>,
) -> ScriptReport {
    let mut report = ScriptReport::default();
    for command in commands {
        report.commands += 1;
        if command.apply(session) {
            report.edits += 1;
        }
    }
    report
}

// render.rs - Text rendering of the board, help banner and debug info

use std::fmt::Write;

use crate::grid::GridEngine;

pub const DEAD: char = '.';
pub const LIVE: char = 'o';
pub const CURSOR_DEAD: char = '+';
pub const CURSOR_LIVE: char = 'X';

/// One line per row followed by a blank separator line.
pub fn frame(engine: &GridEngine) -> String {
    let cursor = engine.cursor();
    let mut out = String::with_capacity((engine.columns() + 1) * engine.rows() + 1);

    for row in 0..engine.rows() {
        for (column, &alive) in engine.row(row).iter().enumerate() {
            let on_cursor = cursor.visible && cursor.row == row && cursor.column == column;
            out.push(match (on_cursor, alive) {
                (true, true) => CURSOR_LIVE,
                (true, false) => CURSOR_DEAD,
                (false, true) => LIVE,
                (false, false) => DEAD,
            });
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

const HELP: &[&str] = &[
    "******************************************",
    "********* Conway's Game of Life **********",
    "******************************************",
    "",
    "--- Commands",
    " w - Moves the cursor up.",
    " a - Moves the cursor left.",
    " s - Moves the cursor down.",
    " d - Moves the cursor right.",
    " x - Toggles a cell.",
    " c - Clear all cells.",
    " f - Progress the game one frame.",
    " r - Runs the game until you hit 'Enter'.",
    " . - Make the game run twice as fast.",
    " , - Make the game run twice as slow.",
    " i - Remove a row.",
    " k - Add a row.",
    " j - Remove a column.",
    " l - Add a column.",
    " q - Exits the game.",
    " h - Displays this help menu.",
    " v - Toggles cursor visibility.",
    " z - Show debug info.",
    "",
    "--- Legend",
    " . - A dead cell.",
    " o - A live cell.",
    " + - The cursor, resting on a dead cell.",
    " X - The cursor, resting on a live cell.",
    "",
];

pub fn help_text() -> String {
    let mut out = HELP.join("\n");
    out.push('\n');
    out
}

pub fn debug_info(engine: &GridEngine) -> String {
    let cursor = engine.cursor();
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "--- Debug Info");
    let _ = writeln!(out, "rows           : {}", engine.rows());
    let _ = writeln!(out, "columns        : {}", engine.columns());
    let _ = writeln!(out);
    let _ = writeln!(out, "cursor row     : {}", cursor.row);
    let _ = writeln!(out, "cursor column  : {}", cursor.column);
    let _ = writeln!(out, "cursor visible : {}", cursor.visible);
    let _ = writeln!(out);
    let _ = writeln!(out, "printer delay  : {} ms", engine.interval().as_millis());
    let _ = writeln!(out, "generation     : {}", engine.generation());
    let _ = writeln!(out, "population     : {}", engine.population());
    let _ = writeln!(out);
    out
}

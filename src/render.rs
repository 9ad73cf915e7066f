//! Human-readable rendering of a canonical key into glyph rows.

const WATER: char = '\u{00B7}'; // ·
const SEGMENT: char = '\u{25FC}'; // ◼
const SUBMARINE: char = '\u{25CF}'; // ●
const RIGHT_END: char = '\u{25B6}'; // ▶
const LEFT_END: char = '\u{25C0}'; // ◀
const TOP_END: char = '\u{25B2}'; // ▲
const BOTTOM_END: char = '\u{25BC}'; // ▼

/// Render a canonical key as bracketed, row-labelled glyph lines.
///
/// Ship-segment glyphs are derived from the key alone: the no-touch rule
/// guarantees equal adjacent symbols always belong to the same ship, so a
/// run's ends can be told apart from its interior by its neighbors.
pub fn render_board(key: &str, rows: u16, cols: u16) -> String {
    let rows = rows as usize;
    let cols = cols as usize;
    let key: Vec<char> = key.chars().collect();

    let mut out = String::new();
    for r in 0..rows {
        if r + 1 < 10 {
            out.push(' ');
        }
        out.push_str(&format!("{}[ ", r + 1));
        for c in 0..cols {
            out.push(cell_glyph(&key, rows, cols, r, c));
            out.push(' ');
        }
        out.push_str("]\n");
    }
    out
}

/// Column-number header lines above a rendered board. Boards wider than 9
/// columns get an extra line carrying the tens digits.
pub fn column_headers(cols: u16) -> Vec<String> {
    let cols = cols as usize;
    let mut lines = Vec::new();
    if cols > 9 {
        let mut tens = " ".repeat(4 + 2 * 9);
        for _ in 9..cols {
            tens.push_str("1 ");
        }
        lines.push(tens.trim_end().to_string());
    }
    let mut units = String::from("    ");
    for c in 0..cols {
        units.push_str(&format!("{} ", (c + 1) % 10));
    }
    lines.push(units.trim_end().to_string());
    lines
}

fn cell_glyph(key: &[char], rows: usize, cols: usize, r: usize, c: usize) -> char {
    let at = |r: usize, c: usize| key[r * cols + c];
    let k = at(r, c);
    match k {
        ' ' => WATER,
        'S' => SUBMARINE,
        _ => {
            let left = c > 0 && at(r, c - 1) == k;
            let right = c + 1 < cols && at(r, c + 1) == k;
            let up = r > 0 && at(r - 1, c) == k;
            let down = r + 1 < rows && at(r + 1, c) == k;
            if right && !left {
                LEFT_END
            } else if left && !right {
                RIGHT_END
            } else if down && !up {
                TOP_END
            } else if up && !down {
                BOTTOM_END
            } else {
                SEGMENT
            }
        }
    }
}

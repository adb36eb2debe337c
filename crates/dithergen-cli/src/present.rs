//! Terminal presentation of binary rasters.
//!
//! Two raster rows are packed into one text row with half-block glyphs, so
//! the 128x64 display fits in 128x32 terminal cells.

use dithergen_core::{Raster, HEIGHT, WIDTH};

const FULL: char = '█';
const UPPER: char = '▀';
const LOWER: char = '▄';
const EMPTY: char = ' ';

/// ANSI: move the cursor to the top-left corner.
pub const CURSOR_HOME: &str = "\x1b[H";
/// ANSI: clear the screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";
/// ANSI: hide the cursor.
pub const HIDE_CURSOR: &str = "\x1b[?25l";
/// ANSI: show the cursor.
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Glyph for a vertical pair of pixels.
#[inline]
fn glyph(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (true, true) => FULL,
        (true, false) => UPPER,
        (false, true) => LOWER,
        (false, false) => EMPTY,
    }
}

/// Render the lit pixels of `raster` as half-block text, one line per pair
/// of rows, each line terminated by `\n`.
pub fn render(raster: &Raster) -> String {
    let lines = HEIGHT.div_ceil(2) as usize;
    let mut out = String::with_capacity(lines * (WIDTH as usize * 3 + 1));
    for y in (0..HEIGHT).step_by(2) {
        for x in 0..WIDTH {
            let top = raster.is_on(x, y);
            let bottom = y + 1 < HEIGHT && raster.is_on(x, y + 1);
            out.push(glyph(top, bottom));
        }
        out.push('\n');
    }
    out
}

/// Render with the status label on the first line.
pub fn render_with_label(raster: &Raster, label: &str) -> String {
    let frame = render(raster);
    let mut out = String::with_capacity(label.len() + 1 + frame.len());
    out.push_str(label);
    out.push('\n');
    out.push_str(&frame);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_raster_is_blank() {
        let raster = Raster::new();
        let text = render(&raster);
        assert_eq!(text.lines().count(), (HEIGHT / 2) as usize);
        assert!(text.lines().all(|l| l.chars().count() == WIDTH as usize));
        assert!(text.chars().all(|c| c == EMPTY || c == '\n'));
    }

    #[test]
    fn test_half_blocks() {
        let mut raster = Raster::new();
        raster.set(0, 0, 255);
        raster.set(1, 1, 255);
        raster.set(2, 0, 255);
        raster.set(2, 1, 255);

        let first: Vec<char> = render(&raster).lines().next().unwrap().chars().collect();
        assert_eq!(first[0], UPPER);
        assert_eq!(first[1], LOWER);
        assert_eq!(first[2], FULL);
        assert_eq!(first[3], EMPTY);
    }

    #[test]
    fn test_label_first_line() {
        let text = render_with_label(&Raster::new(), "G:0 F:1.0");
        assert_eq!(text.lines().next(), Some("G:0 F:1.0"));
        assert_eq!(text.lines().count(), 1 + (HEIGHT / 2) as usize);
    }
}

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;

use crate::viewport::ViewportState;

pub const TAB_WIDTH: usize = 4;

/// Display columns `ch` occupies when painted. Tabs take [`TAB_WIDTH`]; control and combining
/// chars take none.
pub fn char_cols(ch: char) -> usize {
    if ch == '\t' {
        TAB_WIDTH
    } else {
        UnicodeWidthChar::width(ch).unwrap_or(0)
    }
}

/// Display columns of `s` as painted by [`render_str_clipped`].
pub fn str_cols(s: &str) -> usize {
    s.chars().map(char_cols).sum()
}

/// Writes `input` on row `y` starting at `x`, skipping the first `start_col` display columns
/// and writing at most `max_cols`. Tabs expand to spaces; a wide char straddling either edge
/// is dropped rather than split.
pub fn render_str_clipped(
    x: u16,
    y: u16,
    start_col: u32,
    max_cols: u16,
    buf: &mut Buffer,
    input: &str,
    style: Style,
) {
    let start = start_col as usize;
    let limit = max_cols as usize;
    let mut col = 0usize;
    let mut written = 0usize;
    let mut tmp = [0u8; 4];

    let mut put = |written: &mut usize, symbol: &str| {
        if let Some(cell) = buf.cell_mut((x + *written as u16, y)) {
            cell.set_style(style);
            cell.set_symbol(symbol);
        }
        *written += 1;
    };

    for ch in input.chars() {
        let w = char_cols(ch);
        if w == 0 {
            continue;
        }
        let symbol: &str = if ch == '\t' {
            " "
        } else {
            ch.encode_utf8(&mut tmp)
        };

        if col < start {
            // Partially hidden wide chars are skipped whole; hidden tab columns are skipped
            // individually.
            if ch == '\t' {
                let visible = (col + w).saturating_sub(start);
                col += w;
                for _ in 0..visible {
                    if written >= limit {
                        return;
                    }
                    put(&mut written, " ");
                }
            } else {
                col += w;
            }
            continue;
        }

        if written + w > limit {
            return;
        }
        if ch == '\t' {
            for _ in 0..w {
                put(&mut written, " ");
            }
        } else {
            put(&mut written, symbol);
            // Continuation cell of a double-width char.
            for _ in 1..w {
                put(&mut written, "");
            }
        }
        col += w;
    }
}

/// Vertical scrollbar for `state` in a one-column `area`. Blank when everything fits.
pub fn render_scrollbar(area: Rect, buf: &mut Buffer, state: &ViewportState, style: Style) {
    buf.set_style(area, style);
    if area.height == 0 {
        return;
    }

    let (thumb_top, thumb_h) = if state.scrolls_vertically() {
        let track = f64::from(area.height);
        let thumb_h = (f64::from(state.viewport_h) / f64::from(state.content_h) * track)
            .round()
            .clamp(1.0, track);
        let max_y = f64::from(state.content_h.saturating_sub(u32::from(state.viewport_h)).max(1));
        let top = (f64::from(state.y) / max_y * (track - thumb_h))
            .round()
            .clamp(0.0, (track - thumb_h).max(0.0));
        (top as u16, thumb_h as u16)
    } else {
        (0, 0)
    };

    for dy in 0..area.height {
        let symbol = if dy >= thumb_top && dy < thumb_top + thumb_h {
            "█"
        } else {
            " "
        };
        buf.set_stringn(area.x, area.y + dy, symbol, 1, style);
    }
}

//! Multi-line edit buffer backing the terminal host.
//!
//! Holds the text as lines plus a cursor, applies key and paste input with the editing
//! semantics of a form textarea (Enter always inserts a newline), and paints the visible
//! window of lines into a ratatui buffer.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::render;
use crate::viewport::ViewportState;

#[derive(Clone, Debug)]
pub struct EditBufferOptions {
    pub show_scrollbar: bool,
}

impl Default for EditBufferOptions {
    fn default() -> Self {
        Self {
            show_scrollbar: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    /// Char index within the line.
    pub col: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditAction {
    None,
    Changed,
}

#[derive(Clone, Debug)]
pub struct EditBuffer {
    lines: Vec<String>,
    cursor: Cursor,
    // Display column that vertical movement tries to hold.
    sticky_x: Option<usize>,
    pub state: ViewportState,
    options: EditBufferOptions,
}

impl Default for EditBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl EditBuffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Cursor::default(),
            sticky_x: None,
            state: ViewportState::default(),
            options: EditBufferOptions::default(),
        }
    }

    pub fn with_options(options: EditBufferOptions) -> Self {
        Self {
            options,
            ..Self::new()
        }
    }

    /// Replaces the whole text and moves the cursor to the end of it.
    pub fn set_text(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        self.lines = text.split('\n').map(str::to_string).collect();
        let row = self.lines.len() - 1;
        self.cursor = Cursor {
            row,
            col: self.lines[row].chars().count(),
        };
        self.sticky_x = None;
        self.refresh_content_size();
        self.reveal_cursor();
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn set_viewport(&mut self, area: Rect) {
        let text_area = self.text_area(area);
        let resized =
            (self.state.viewport_w, self.state.viewport_h) != (text_area.width, text_area.height);
        self.state.set_viewport(text_area.width, text_area.height);
        self.refresh_content_size();
        if resized {
            self.reveal_cursor();
        }
    }

    /// Screen position of the cursor inside `area`, if it is visible.
    pub fn cursor_pos(&self, area: Rect) -> Option<(u16, u16)> {
        let text_area = self.text_area(area);
        if text_area.width == 0 || text_area.height == 0 {
            return None;
        }
        let (cx, cy) = self.cursor_cell();
        let x = cx.checked_sub(self.state.x)?;
        let y = cy.checked_sub(self.state.y)?;
        if x >= u32::from(text_area.width) || y >= u32::from(text_area.height) {
            return None;
        }
        Some((text_area.x + x as u16, text_area.y + y as u16))
    }

    pub fn input(&mut self, event: InputEvent) -> EditAction {
        let action = match event {
            InputEvent::Paste(s) => {
                self.insert_str(&s);
                EditAction::Changed
            }
            InputEvent::Key(key) => self.apply_key(key),
        };
        if action == EditAction::Changed {
            self.sticky_x = None;
            self.refresh_content_size();
            self.reveal_cursor();
        }
        action
    }

    pub fn render_ref(&mut self, area: Rect, buf: &mut Buffer, style: Style) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.set_viewport(area);
        let text_area = self.text_area(area);

        for row in 0..text_area.height {
            let y = text_area.y + row;
            buf.set_style(Rect::new(text_area.x, y, text_area.width, 1), style);
            let idx = self.state.y as usize + row as usize;
            if let Some(line) = self.lines.get(idx) {
                render::render_str_clipped(
                    text_area.x,
                    y,
                    self.state.x,
                    text_area.width,
                    buf,
                    line,
                    style,
                );
            }
        }

        if text_area.width < area.width {
            render::render_scrollbar(
                Rect::new(area.right() - 1, area.y, 1, area.height),
                buf,
                &self.state,
                style,
            );
        }
    }

    fn text_area(&self, area: Rect) -> Rect {
        if self.options.show_scrollbar && area.width >= 2 {
            Rect::new(area.x, area.y, area.width - 1, area.height)
        } else {
            area
        }
    }

    fn apply_key(&mut self, key: KeyEvent) -> EditAction {
        let edited = match key.code {
            KeyCode::Char(_) if key.modifiers.is_chord() => return EditAction::None,
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Enter => {
                self.insert_newline();
                true
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.move_left();
                false
            }
            KeyCode::Right => {
                self.move_right();
                false
            }
            KeyCode::Up => {
                self.move_vertical(-1);
                false
            }
            KeyCode::Down => {
                self.move_vertical(1);
                false
            }
            KeyCode::Home => {
                self.cursor.col = 0;
                self.sticky_x = Some(0);
                false
            }
            KeyCode::End => {
                self.cursor.col = self.line_len(self.cursor.row);
                self.sticky_x = Some(self.cursor_display_x());
                false
            }
            // Paging scrolls the view without moving the cursor.
            KeyCode::PageDown => {
                self.state.page_down();
                return EditAction::None;
            }
            KeyCode::PageUp => {
                self.state.page_up();
                return EditAction::None;
            }
            KeyCode::Tab | KeyCode::Esc => return EditAction::None,
        };
        if edited {
            EditAction::Changed
        } else {
            self.reveal_cursor();
            EditAction::None
        }
    }

    fn refresh_content_size(&mut self) {
        let w = self
            .lines
            .iter()
            .map(|l| render::str_cols(l) as u32)
            .max()
            .unwrap_or(0);
        self.state.set_content(w, self.lines.len() as u32);
    }

    fn reveal_cursor(&mut self) {
        let (x, y) = self.cursor_cell();
        self.state.reveal(x, y);
    }

    fn cursor_cell(&self) -> (u32, u32) {
        (self.cursor_display_x() as u32, self.cursor.row as u32)
    }

    fn cursor_display_x(&self) -> usize {
        self.lines[self.cursor.row]
            .chars()
            .take(self.cursor.col)
            .map(render::char_cols)
            .sum()
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    fn byte_at(&self, row: usize, col: usize) -> usize {
        let line = &self.lines[row];
        line.char_indices()
            .nth(col)
            .map_or(line.len(), |(i, _)| i)
    }

    fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor.col = self.line_len(self.cursor.row);
        }
        self.sticky_x = Some(self.cursor_display_x());
    }

    fn move_right(&mut self) {
        if self.cursor.col < self.line_len(self.cursor.row) {
            self.cursor.col += 1;
        } else if self.cursor.row + 1 < self.lines.len() {
            self.cursor.row += 1;
            self.cursor.col = 0;
        }
        self.sticky_x = Some(self.cursor_display_x());
    }

    fn move_vertical(&mut self, delta: isize) {
        let Some(row) = self.cursor.row.checked_add_signed(delta) else {
            return;
        };
        if row >= self.lines.len() {
            return;
        }
        let target_x = self.sticky_x.unwrap_or_else(|| self.cursor_display_x());
        self.cursor.row = row;
        self.cursor.col = col_at_display_x(&self.lines[row], target_x);
        self.sticky_x = Some(target_x);
    }

    fn insert_char(&mut self, ch: char) {
        let at = self.byte_at(self.cursor.row, self.cursor.col);
        self.lines[self.cursor.row].insert(at, ch);
        self.cursor.col += 1;
    }

    fn insert_newline(&mut self) {
        let at = self.byte_at(self.cursor.row, self.cursor.col);
        let tail = self.lines[self.cursor.row].split_off(at);
        self.lines.insert(self.cursor.row + 1, tail);
        self.cursor = Cursor {
            row: self.cursor.row + 1,
            col: 0,
        };
    }

    fn insert_str(&mut self, s: &str) {
        let s = s.replace("\r\n", "\n").replace('\r', "\n");
        let mut parts = s.split('\n');
        let first = parts.next().unwrap_or("");

        let row = self.cursor.row;
        let at = self.byte_at(row, self.cursor.col);
        let tail = self.lines[row].split_off(at);
        self.lines[row].push_str(first);
        self.cursor.col += first.chars().count();

        for part in parts {
            self.cursor.row += 1;
            self.lines.insert(self.cursor.row, part.to_string());
            self.cursor.col = part.chars().count();
        }
        self.lines[self.cursor.row].push_str(&tail);
    }

    fn backspace(&mut self) -> bool {
        let Cursor { row, col } = self.cursor;
        if col > 0 {
            let start = self.byte_at(row, col - 1);
            let end = self.byte_at(row, col);
            self.lines[row].replace_range(start..end, "");
            self.cursor.col -= 1;
            return true;
        }
        if row > 0 {
            let cur = self.lines.remove(row);
            let prev_len = self.line_len(row - 1);
            self.lines[row - 1].push_str(&cur);
            self.cursor = Cursor {
                row: row - 1,
                col: prev_len,
            };
            return true;
        }
        false
    }

    fn delete(&mut self) -> bool {
        let Cursor { row, col } = self.cursor;
        if col < self.line_len(row) {
            let start = self.byte_at(row, col);
            let end = self.byte_at(row, col + 1);
            self.lines[row].replace_range(start..end, "");
            return true;
        }
        if row + 1 < self.lines.len() {
            let next = self.lines.remove(row + 1);
            self.lines[row].push_str(&next);
            return true;
        }
        false
    }
}

fn col_at_display_x(line: &str, target_x: usize) -> usize {
    let mut x = 0usize;
    line.chars()
        .take_while(|ch| {
            x += render::char_cols(*ch);
            x <= target_x
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyModifiers;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::key(code)
    }

    #[test]
    fn inserts_and_moves_cursor() {
        let mut eb = EditBuffer::new();
        assert_eq!(eb.input(InputEvent::char('a')), EditAction::Changed);
        assert_eq!(eb.text(), "a");
        assert_eq!(eb.cursor(), Cursor { row: 0, col: 1 });
        assert_eq!(eb.input(key(KeyCode::Left)), EditAction::None);
        assert_eq!(eb.cursor(), Cursor { row: 0, col: 0 });
        eb.input(InputEvent::char('b'));
        assert_eq!(eb.text(), "ba");
    }

    #[test]
    fn enter_inserts_newline() {
        let mut eb = EditBuffer::new();
        eb.set_text("ab");
        eb.input(key(KeyCode::Left));
        assert_eq!(eb.input(key(KeyCode::Enter)), EditAction::Changed);
        assert_eq!(eb.text(), "a\nb");
        assert_eq!(eb.cursor(), Cursor { row: 1, col: 0 });
    }

    #[test]
    fn chords_are_not_text() {
        let mut eb = EditBuffer::new();
        let ev = KeyEvent::new(KeyCode::Char('c')).with_modifiers(KeyModifiers::CTRL);
        assert_eq!(eb.input(InputEvent::Key(ev)), EditAction::None);
        assert!(eb.is_empty());
    }

    #[test]
    fn backspace_joins_lines() {
        let mut eb = EditBuffer::new();
        eb.set_text("a\nb");
        eb.input(key(KeyCode::Home));
        assert_eq!(eb.input(key(KeyCode::Backspace)), EditAction::Changed);
        assert_eq!(eb.text(), "ab");
        assert_eq!(eb.cursor(), Cursor { row: 0, col: 1 });
        eb.input(key(KeyCode::Home));
        assert_eq!(eb.input(key(KeyCode::Backspace)), EditAction::None);
    }

    #[test]
    fn delete_at_line_end_pulls_next_line_up() {
        let mut eb = EditBuffer::new();
        eb.set_text("a\nb");
        eb.input(key(KeyCode::Up));
        eb.input(key(KeyCode::End));
        assert_eq!(eb.input(key(KeyCode::Delete)), EditAction::Changed);
        assert_eq!(eb.text(), "ab");
    }

    #[test]
    fn paste_multiline_inserts_at_cursor() {
        let mut eb = EditBuffer::new();
        eb.set_text("[]");
        eb.input(key(KeyCode::Left));
        eb.input(InputEvent::paste("a\r\nb\nc"));
        assert_eq!(eb.text(), "[a\nb\nc]");
        assert_eq!(eb.cursor(), Cursor { row: 2, col: 1 });
    }

    #[test]
    fn vertical_movement_keeps_display_column() {
        let mut eb = EditBuffer::new();
        eb.set_text("abcd\nx\nabcd");
        eb.input(key(KeyCode::Up));
        eb.input(key(KeyCode::Up));
        eb.input(key(KeyCode::End));
        eb.input(key(KeyCode::Down));
        assert_eq!(eb.cursor(), Cursor { row: 1, col: 1 });
        eb.input(key(KeyCode::Down));
        assert_eq!(eb.cursor(), Cursor { row: 2, col: 4 });
    }

    #[test]
    fn wide_chars_map_to_display_columns() {
        assert_eq!(col_at_display_x("你好", 1), 0);
        assert_eq!(col_at_display_x("你好", 2), 1);
        assert_eq!(col_at_display_x("ab", 9), 2);
    }

    #[test]
    fn tabs_advance_cursor_by_tab_width() {
        let mut eb = EditBuffer::with_options(EditBufferOptions {
            show_scrollbar: false,
        });
        eb.set_text("\tx");
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        eb.render_ref(area, &mut buf, Style::default());
        assert_eq!(buf[(4, 0)].symbol(), "x");
        assert_eq!(eb.cursor_pos(area), Some((5, 0)));
        assert_eq!(eb.state.content_w, 5);

        eb.input(key(KeyCode::Home));
        eb.input(key(KeyCode::Right));
        assert_eq!(eb.cursor_pos(area), Some((4, 0)));
        assert_eq!(col_at_display_x("\tx", 3), 0);
        assert_eq!(col_at_display_x("\tx", 4), 1);
    }

    #[test]
    fn renders_visible_window_and_reports_cursor() {
        let mut eb = EditBuffer::with_options(EditBufferOptions {
            show_scrollbar: false,
        });
        eb.set_text("one\ntwo\nthree");
        let area = Rect::new(0, 0, 6, 2);
        let mut buf = Buffer::empty(area);
        eb.render_ref(area, &mut buf, Style::default());
        assert_eq!(buf[(0, 0)].symbol(), "t");
        assert_eq!(buf[(0, 1)].symbol(), "t");
        assert_eq!(buf[(1, 1)].symbol(), "h");
        assert_eq!(eb.cursor_pos(area), Some((5, 1)));
    }
}

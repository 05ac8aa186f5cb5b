//! Terminal host for the textarea component.
//!
//! [`TuiTextArea`] paints the component's rendered element tree into a ratatui buffer and turns
//! key input into native input events. The element tree is the only thing it reads: class
//! tokens pick the computed style, the `textarea` element supplies rows, placeholder and the
//! disabled flag.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Block;
use ratatui::widgets::Widget;
use tracing::trace;
use unicode_width::UnicodeWidthStr;

use crate::classes;
use crate::component::IdliTextArea;
use crate::dom::Element;
use crate::editor::EditAction;
use crate::editor::EditBuffer;
use crate::event::InputChangeEvent;
use crate::event::NativeInputEvent;
use crate::input::InputEvent;
use crate::render;
use crate::style::ComputedStyle;
use crate::style::Stylesheet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Regions {
    label: Rect,
    field: Rect,
    text: Rect,
}

#[derive(Debug)]
pub struct TuiTextArea {
    component: IdliTextArea,
    editor: EditBuffer,
    stylesheet: Stylesheet,
    // Component value the editor was last loaded from. The editor normalizes line endings, so
    // its text cannot be compared with the value directly.
    synced_value: String,
}

impl Default for TuiTextArea {
    fn default() -> Self {
        Self::new(IdliTextArea::new())
    }
}

impl TuiTextArea {
    pub fn new(component: IdliTextArea) -> Self {
        let mut host = Self {
            component,
            editor: EditBuffer::new(),
            stylesheet: Stylesheet::default(),
            synced_value: String::new(),
        };
        host.sync_editor();
        host
    }

    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    pub fn component(&self) -> &IdliTextArea {
        &self.component
    }

    /// Attribute writes made here, including `value`, are picked up on the next input or
    /// render.
    pub fn component_mut(&mut self) -> &mut IdliTextArea {
        &mut self.component
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Applies key or paste input. Returns the component's change notification when the text
    /// actually changed; a disabled component ignores input entirely.
    pub fn input(&mut self, event: InputEvent) -> Option<InputChangeEvent> {
        self.sync_editor();
        if self.component.is_disabled() {
            trace!(tag = self.component.tag(), "terminal input ignored while disabled");
            return None;
        }

        let before = self.editor.text();
        if self.editor.input(event) == EditAction::None {
            return None;
        }
        let after = self.editor.text();
        if after == before {
            return None;
        }
        self.synced_value.clone_from(&after);
        self.component.handle_input(NativeInputEvent::new(after))
    }

    pub fn render_ref(&mut self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.sync_editor();

        let root = self.component.render();
        let textarea = root.find("textarea");
        let disabled = textarea.is_some_and(|t| t.has_attr("disabled"));
        let computed = self.stylesheet.compute(root.class_list(), disabled);
        let label_text = root.find("label").map(Element::text_content).unwrap_or_default();
        let regions = self.regions(&root, &computed, &label_text, area);

        render::render_str_clipped(
            regions.label.x,
            regions.label.y,
            0,
            regions.label.width,
            buf,
            &label_text,
            computed.style.patch(self.stylesheet.label),
        );

        Block::bordered()
            .border_set(computed.border)
            .border_style(computed.style)
            .style(computed.style)
            .render(regions.field, buf);

        let placeholder = textarea.and_then(|t| t.attr("placeholder"));
        match placeholder {
            Some(text) if self.editor.is_empty() && regions.text.height > 0 => {
                self.editor.set_viewport(regions.text);
                render::render_str_clipped(
                    regions.text.x,
                    regions.text.y,
                    0,
                    regions.text.width,
                    buf,
                    text,
                    computed.style.patch(self.stylesheet.placeholder),
                );
            }
            _ => self.editor.render_ref(regions.text, buf, computed.style),
        }
    }

    /// Screen position for the terminal cursor, as of the last render. `None` while disabled
    /// or when the cursor is scrolled out of view.
    pub fn cursor_pos(&self, area: Rect) -> Option<(u16, u16)> {
        if self.component.is_disabled() {
            return None;
        }
        let root = self.component.render();
        let computed = self.stylesheet.compute(root.class_list(), false);
        let label_text = root.find("label").map(Element::text_content).unwrap_or_default();
        let regions = self.regions(&root, &computed, &label_text, area);
        self.editor.cursor_pos(regions.text)
    }

    fn regions(
        &self,
        root: &Element,
        computed: &ComputedStyle,
        label_text: &str,
        area: Rect,
    ) -> Regions {
        let rows = root
            .find("textarea")
            .and_then(|t| t.attr("rows"))
            .and_then(|r| r.parse::<u16>().ok())
            .unwrap_or(self.component.options().rows);
        let field_h = rows.saturating_add(2);

        let (label, field) = if root.has_class(classes::INLINE_CLASS) {
            let label_w = match UnicodeWidthStr::width(label_text) {
                0 => 0,
                w => (w as u16).saturating_add(1).min(area.width / 2),
            };
            (
                Rect::new(area.x, area.y, label_w, 1),
                Rect::new(
                    area.x + label_w,
                    area.y,
                    area.width - label_w,
                    field_h.min(area.height),
                ),
            )
        } else {
            (
                Rect::new(area.x, area.y, area.width, 1),
                Rect::new(
                    area.x,
                    area.y + 1,
                    area.width,
                    field_h.min(area.height.saturating_sub(1)),
                ),
            )
        };

        let inner = Block::bordered().inner(field);
        let pad = computed.padding_x;
        let text = if inner.width > pad.saturating_mul(2) {
            Rect::new(inner.x + pad, inner.y, inner.width - 2 * pad, inner.height)
        } else {
            inner
        };

        Regions { label, field, text }
    }

    fn sync_editor(&mut self) {
        let value = self.component.value().unwrap_or("");
        if self.synced_value != value {
            self.editor.set_text(value);
            self.synced_value = value.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::TextAreaOptions;
    use crate::input::KeyCode;
    use crate::props::Variant;

    fn host(label: &str) -> TuiTextArea {
        let mut c = IdliTextArea::new();
        c.set_label(label);
        TuiTextArea::new(c)
    }

    #[test]
    fn typing_emits_change_with_previous_value() {
        let mut tui = host("Notes");
        tui.component_mut().set_value("old");
        let change = tui.input(InputEvent::char('!')).unwrap();
        assert_eq!(change.old_value.as_deref(), Some("old"));
        assert_eq!(change.new_value, "old!");
        assert_eq!(tui.component().value(), Some("old!"));
    }

    #[test]
    fn navigation_does_not_emit() {
        let mut tui = host("Notes");
        tui.component_mut().set_value("abc");
        assert_eq!(tui.input(InputEvent::key(KeyCode::Left)), None);
        assert_eq!(tui.input(InputEvent::paste("")), None);
        assert_eq!(tui.component().value(), Some("abc"));
    }

    #[test]
    fn disabled_host_ignores_keys() {
        let mut tui = host("Notes");
        tui.component_mut().set_value("old");
        tui.component_mut().set_disabled(true);
        assert_eq!(tui.input(InputEvent::char('x')), None);
        assert_eq!(tui.component().value(), Some("old"));
        assert_eq!(tui.cursor_pos(Rect::new(0, 0, 20, 7)), None);
    }

    #[test]
    fn renders_label_above_bordered_box() {
        let mut tui = host("Name");
        tui.component_mut().set_placeholder("Type");
        let area = Rect::new(0, 0, 20, 7);
        let mut buf = Buffer::empty(area);
        tui.render_ref(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "N");
        assert_eq!(buf[(0, 1)].symbol(), "┌");
        assert_eq!(buf[(19, 1)].symbol(), "┐");
        assert_eq!(buf[(0, 2)].symbol(), "│");
        assert_eq!(buf[(0, 6)].symbol(), "└");
        // Border plus size-md padding.
        assert_eq!(buf[(2, 2)].symbol(), "T");
    }

    #[test]
    fn dashed_variant_uses_dashed_border() {
        let mut tui = host("Name");
        tui.component_mut().set_variant(Some(Variant::Dashed));
        let area = Rect::new(0, 0, 12, 7);
        let mut buf = Buffer::empty(area);
        tui.render_ref(area, &mut buf);
        assert_eq!(buf[(1, 1)].symbol(), "╌");
        assert_eq!(buf[(0, 2)].symbol(), "╎");
    }

    #[test]
    fn inline_places_label_beside_box() {
        let mut tui = host("Ab");
        tui.component_mut().set_inline(true);
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        tui.render_ref(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "A");
        assert_eq!(buf[(1, 0)].symbol(), "b");
        assert_eq!(buf[(3, 0)].symbol(), "┌");
    }

    #[test]
    fn value_renders_and_cursor_follows_text() {
        let mut tui = host("Name");
        tui.component_mut().set_value("hi");
        let area = Rect::new(0, 0, 20, 7);
        let mut buf = Buffer::empty(area);
        tui.render_ref(area, &mut buf);
        assert_eq!(buf[(2, 2)].symbol(), "h");
        assert_eq!(buf[(3, 2)].symbol(), "i");
        assert_eq!(tui.cursor_pos(area), Some((4, 2)));
    }

    #[test]
    fn crlf_value_keeps_cursor_between_inputs() {
        let mut tui = host("Notes");
        tui.component_mut().set_value("a\r\nb");
        assert_eq!(tui.input(InputEvent::key(KeyCode::Left)), None);
        let change = tui.input(InputEvent::char('x')).unwrap();
        assert_eq!(change.old_value.as_deref(), Some("a\r\nb"));
        assert_eq!(change.new_value, "a\nxb");

        let change = tui.input(InputEvent::char('y')).unwrap();
        assert_eq!(change.new_value, "a\nxyb");
    }

    #[test]
    fn external_value_write_reloads_editor() {
        let mut tui = host("Notes");
        tui.input(InputEvent::char('a'));
        tui.component_mut().set_value("zz");
        let change = tui.input(InputEvent::char('!')).unwrap();
        assert_eq!(change.new_value, "zz!");
    }

    #[test]
    fn tab_in_value_moves_cursor_past_expanded_columns() {
        let mut tui = host("Name");
        tui.component_mut().set_value("\tx");
        let area = Rect::new(0, 0, 20, 7);
        let mut buf = Buffer::empty(area);
        tui.render_ref(area, &mut buf);
        assert_eq!(buf[(6, 2)].symbol(), "x");
        assert_eq!(tui.cursor_pos(area), Some((7, 2)));
    }

    #[test]
    fn rows_option_sets_field_height() {
        let c = IdliTextArea::new().with_options(TextAreaOptions { rows: 6 });
        let mut tui = TuiTextArea::new(c);
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        tui.render_ref(area, &mut buf);
        assert_eq!(buf[(0, 1)].symbol(), "┌");
        assert_eq!(buf[(0, 7)].symbol(), "│");
        assert_eq!(buf[(0, 8)].symbol(), "└");
    }
}

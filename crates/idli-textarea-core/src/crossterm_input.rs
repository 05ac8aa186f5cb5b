use crossterm::event as ct;

use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;

/// Converts a crossterm event. Key releases, mouse, focus and resize events yield `None`.
pub fn input_event_from_crossterm(ev: ct::Event) -> Option<InputEvent> {
    match ev {
        ct::Event::Key(key) if key.kind == ct::KeyEventKind::Press => {
            key_event_from_crossterm(key).map(InputEvent::Key)
        }
        ct::Event::Paste(text) => Some(InputEvent::Paste(text)),
        _ => None,
    }
}

pub fn key_event_from_crossterm(key: ct::KeyEvent) -> Option<KeyEvent> {
    let code = match key.code {
        ct::KeyCode::Char(c) => KeyCode::Char(c),
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Backspace => KeyCode::Backspace,
        ct::KeyCode::Delete => KeyCode::Delete,
        ct::KeyCode::Tab => KeyCode::Tab,
        ct::KeyCode::Esc => KeyCode::Esc,
        ct::KeyCode::Left => KeyCode::Left,
        ct::KeyCode::Right => KeyCode::Right,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Home => KeyCode::Home,
        ct::KeyCode::End => KeyCode::End,
        ct::KeyCode::PageUp => KeyCode::PageUp,
        ct::KeyCode::PageDown => KeyCode::PageDown,
        _ => return None,
    };
    Some(KeyEvent::new(code).with_modifiers(KeyModifiers {
        shift: key.modifiers.contains(ct::KeyModifiers::SHIFT),
        ctrl: key.modifiers.contains(ct::KeyModifiers::CONTROL),
        alt: key.modifiers.contains(ct::KeyModifiers::ALT),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_converts_and_release_is_dropped() {
        let press = ct::KeyEvent::new(ct::KeyCode::Char('a'), ct::KeyModifiers::CONTROL);
        assert_eq!(
            input_event_from_crossterm(ct::Event::Key(press)),
            Some(InputEvent::Key(
                KeyEvent::new(KeyCode::Char('a')).with_modifiers(KeyModifiers::CTRL)
            ))
        );

        let mut release = ct::KeyEvent::new(ct::KeyCode::Enter, ct::KeyModifiers::NONE);
        release.kind = ct::KeyEventKind::Release;
        assert_eq!(input_event_from_crossterm(ct::Event::Key(release)), None);
    }

    #[test]
    fn paste_passes_text_through() {
        assert_eq!(
            input_event_from_crossterm(ct::Event::Paste("a\nb".into())),
            Some(InputEvent::paste("a\nb"))
        );
    }
}

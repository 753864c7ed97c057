use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

/// Everything a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Action {
    Quit,
    Suspend,
    FocusNext,
    FocusPrev,
    CursorUp,
    CursorDown,
    Activate,
    Back,
    GoHome,
    OpenTopicMenu,
    Search,
    Compose,
    NextTab,
    PrevTab,
    NextSubTab,
    PrevSubTab,
    GrowPane,
    ShrinkPane,
    ToggleSelect,
    SelectAll,
    DeleteSelected,
    Upload,
    SortByName,
    SortByType,
    SortByContributor,
    SortByFolder,
    SortByDateAdded,
    ToggleDataView,
    FilterMenu,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    OpenUserMenu,
}

/// Flat key sequence → action mapping
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;
        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_sequence(&key_str)
                    .map(|seq| (seq, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;
        Ok(KeyBindings(keybindings))
    }
}

impl KeyBindings {
    /// Action bound to a single key press
    pub fn action_for(&self, key: KeyEvent) -> Option<Action> {
        self.get(&vec![normalize_key(key)]).copied()
    }
}

/// Strip the press/repeat details and the implicit SHIFT that terminals
/// report alongside shifted characters.
pub fn normalize_key(key: KeyEvent) -> KeyEvent {
    let modifiers = match key.code {
        KeyCode::Char(_) | KeyCode::BackTab => key.modifiers.difference(KeyModifiers::SHIFT),
        _ => key.modifiers,
    };
    KeyEvent::new(key.code, modifiers)
}

pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let (remaining, modifiers) = extract_modifiers(raw);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        let lower = current.to_ascii_lowercase();
        if lower.starts_with("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            current = &current[5..];
        } else if lower.starts_with("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            current = &current[4..];
        } else if lower.starts_with("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            current = &current[6..];
        } else {
            break;
        }
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw.to_ascii_lowercase().as_str() {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        "lt" => KeyCode::Char('<'),
        "gt" => KeyCode::Char('>'),
        lower if lower.len() > 1 && lower.starts_with('f') => {
            let n = lower[1..]
                .parse::<u8>()
                .map_err(|_| format!("Unable to parse `{raw}`"))?;
            KeyCode::F(n)
        }
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    if modifiers.contains(KeyModifiers::SHIFT) {
                        KeyCode::Char(c.to_ascii_uppercase())
                    } else {
                        KeyCode::Char(c)
                    }
                }
                _ => return Err(format!("Unable to parse `{raw}`")),
            }
        }
    };
    if matches!(c, KeyCode::Char(_) | KeyCode::BackTab) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    Ok(KeyEvent::new(c, modifiers))
}

/// Parse `<ctrl-c>`, `<q>` or `<g><g>` into key events.
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    let inner = raw
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| format!("Unable to parse `{raw}`"))?;
    if inner.is_empty() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    inner.split("><").map(parse_key_event).collect()
}

pub fn key_event_to_string(key_event: &KeyEvent) -> String {
    let code = match key_event.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char('<') => "lt".to_string(),
        KeyCode::Char('>') => "gt".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("f{n}"),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "backtab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        _ => "unknown".to_string(),
    };

    let mut modifiers = Vec::with_capacity(3);
    if key_event.modifiers.intersects(KeyModifiers::CONTROL) {
        modifiers.push("ctrl");
    }
    if key_event.modifiers.intersects(KeyModifiers::SHIFT) {
        modifiers.push("shift");
    }
    if key_event.modifiers.intersects(KeyModifiers::ALT) {
        modifiers.push("alt");
    }

    let mut key = modifiers.join("-");
    if !key.is_empty() {
        key.push('-');
    }
    key.push_str(&code);
    key
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("<q>", KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))]
    #[case("<ctrl-c>", KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))]
    #[case("<Ctrl-z>", KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL))]
    #[case("<tab>", KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE))]
    #[case("<backtab>", KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE))]
    #[case("<space>", KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE))]
    #[case("<lt>", KeyEvent::new(KeyCode::Char('<'), KeyModifiers::NONE))]
    #[case("<gt>", KeyEvent::new(KeyCode::Char('>'), KeyModifiers::NONE))]
    #[case("<}>", KeyEvent::new(KeyCode::Char('}'), KeyModifiers::NONE))]
    #[case("<+>", KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE))]
    #[case("<minus>", KeyEvent::new(KeyCode::Char('-'), KeyModifiers::NONE))]
    #[case("<f5>", KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE))]
    #[case("<alt-enter>", KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT))]
    fn test_parse_single_key(#[case] raw: &str, #[case] expected: KeyEvent) {
        assert_eq!(parse_key_sequence(raw), Ok(vec![expected]));
    }

    #[test]
    fn test_parse_sequence() {
        assert_eq!(
            parse_key_sequence("<g><g>"),
            Ok(vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            ])
        );
    }

    #[rstest]
    #[case("q")]
    #[case("<>")]
    #[case("<ctrl-nope>")]
    #[case("<fx>")]
    fn test_parse_invalid(#[case] raw: &str) {
        assert!(parse_key_sequence(raw).is_err());
    }

    #[test]
    fn test_normalize_strips_implicit_shift() {
        let key = KeyEvent::new(KeyCode::Char('{'), KeyModifiers::SHIFT);
        assert_eq!(
            normalize_key(key),
            KeyEvent::new(KeyCode::Char('{'), KeyModifiers::NONE)
        );
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(normalize_key(key), key);
    }

    #[test]
    fn test_key_event_to_string() {
        assert_eq!(
            key_event_to_string(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            "ctrl-c"
        );
        assert_eq!(
            key_event_to_string(&KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)),
            "space"
        );
    }

    #[test]
    fn test_deserialize_bindings() -> color_eyre::Result<()> {
        let bindings: KeyBindings =
            json5::from_str(r#"{ "<q>": "Quit", "<ctrl-z>": "Suspend" }"#)?;
        assert_eq!(
            bindings.action_for(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(bindings.len(), 2);
        Ok(())
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone)]
pub enum AppAction {
    Quit,
    EditUrl,
    Submit,
    OpenOriginal,
    OpenShareLink,
    CopyShareLink,
    DismissToast,
    ShowHelp,
    HideHelp,
    // URL input actions
    UrlInputChar(char),
    UrlInputBackspace,
    UrlInputClear,
    UrlInputConfirm,
    UrlInputCancel,
}

pub fn handle_key_event(
    key: KeyEvent,
    url_input_active: bool,
    show_help: bool,
) -> Option<AppAction> {
    // If help is showing, any key closes it
    if show_help {
        return Some(AppAction::HideHelp);
    }

    // URL input mode
    if url_input_active {
        return match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => Some(AppAction::UrlInputConfirm),
            (KeyCode::Esc, _) => Some(AppAction::UrlInputCancel),
            (KeyCode::Backspace, _) => Some(AppAction::UrlInputBackspace),
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => Some(AppAction::UrlInputClear),
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppAction::Quit),
            (KeyCode::Char(c), _) => Some(AppAction::UrlInputChar(c)),
            _ => None,
        };
    }

    // Normal mode
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => Some(AppAction::Quit),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppAction::Quit),

        (KeyCode::Char('e'), _) | (KeyCode::Char('i'), _) => Some(AppAction::EditUrl),
        (KeyCode::Enter, _) => Some(AppAction::Submit),

        (KeyCode::Char('o'), _) => Some(AppAction::OpenOriginal),
        (KeyCode::Char('s'), _) => Some(AppAction::OpenShareLink),
        (KeyCode::Char('y'), _) => Some(AppAction::CopyShareLink),
        (KeyCode::Char('x'), _) => Some(AppAction::DismissToast),

        (KeyCode::Char('?'), _) => Some(AppAction::ShowHelp),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_in_input_mode_confirms_submission() {
        let action = handle_key_event(key(KeyCode::Enter), true, false);
        assert!(matches!(action, Some(AppAction::UrlInputConfirm)));
    }

    #[test]
    fn typed_chars_go_to_url_input_when_active() {
        let action = handle_key_event(key(KeyCode::Char('q')), true, false);
        assert!(matches!(action, Some(AppAction::UrlInputChar('q'))));
    }

    #[test]
    fn q_quits_in_normal_mode() {
        let action = handle_key_event(key(KeyCode::Char('q')), false, false);
        assert!(matches!(action, Some(AppAction::Quit)));
    }

    #[test]
    fn any_key_closes_help() {
        let action = handle_key_event(key(KeyCode::Char('z')), false, true);
        assert!(matches!(action, Some(AppAction::HideHelp)));
    }
}

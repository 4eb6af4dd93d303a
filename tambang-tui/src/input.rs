use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
    /// Run `app.calculate`() for the current form
    Calculate,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{BackTab, Backspace, Char, Down, Enter, Esc, Left, Tab, Up};

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if key.code == Char('q') && key.modifiers.is_empty() {
        return Action::Quit;
    }

    let mut action = Action::None;

    match app.screen {
        Screen::ModelSelect => match key.code {
            Up | Char('k') => {
                if app.model_list_index > 0 {
                    app.model_list_index -= 1;
                }
            }
            Down | Char('j') => {
                if app.model_list_index + 1 < app.models.len() {
                    app.model_list_index += 1;
                }
            }
            Enter | Char(' ') => {
                app.select_current_model();
            }
            _ => {}
        },

        Screen::VariantSelect => match key.code {
            Up | Char('k') => {
                if app.variant_list_index > 0 {
                    app.variant_list_index -= 1;
                }
            }
            Down | Char('j') => {
                if app.variant_list_index + 1 < app.variants.len() {
                    app.variant_list_index += 1;
                }
            }
            Enter | Char(' ') => {
                app.select_current_variant();
            }
            Left | Esc => {
                app.screen = Screen::ModelSelect;
                app.variants.clear();
                app.variant_list_index = 0;
            }
            _ => {}
        },

        Screen::TripForm => match key.code {
            Down | Tab => {
                app.focused = app.focused.next();
            }
            Up | BackTab => {
                app.focused = app.focused.previous();
            }
            Char(' ') => {
                app.toggle_focused();
            }
            Char(character)
                if character.is_ascii_digit() || character == '.' || character == '-' =>
            {
                if let Some(text) = app.focused_text_mut() {
                    text.push(character);
                }
            }
            Backspace => {
                if let Some(text) = app.focused_text_mut() {
                    text.pop();
                }
            }
            Enter => {
                action = Action::Calculate;
            }
            Esc => {
                app.error_message = None;
                app.screen = Screen::VariantSelect;
            }
            _ => {}
        },

        Screen::FareView => match key.code {
            Left | Esc | Char('b') => {
                app.screen = Screen::TripForm;
            }
            Char('n') => {
                app.start_over();
            }
            _ => {}
        },
    }
    action
}

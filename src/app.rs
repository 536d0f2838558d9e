//! Application state and event handling

use crate::config::TuiConfig;
use crate::sink::SubmissionSink;
use crate::state::{Form, FormEvent, NameForm, SubmitEvent, SubmitTrigger};
use crate::ui;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Main application struct
pub struct App {
    /// The name form and its submission log
    pub form: NameForm,
    /// Receives every accepted record
    sink: Box<dyn SubmissionSink>,
    /// Values the form is (re)built from
    config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
    /// Terminal size for mouse hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig, sink: Box<dyn SubmissionSink>) -> Self {
        let form = NameForm::new(config.first_name(), config.last_name());
        Self {
            form,
            sink,
            config,
            quit: false,
            status_message: None,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Screen area the last frame was drawn into
    fn screen_area(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        Rect::new(0, 0, width, height)
    }

    /// Send an event to the form, then apply the host default for unprevented submits
    pub fn dispatch(&mut self, mut event: FormEvent) {
        match self.form.handle_event(&mut event, self.sink.as_mut()) {
            Ok(Some(record)) => {
                self.status_message = Some(format!("Submitted {}", record.display_name()));
            }
            Ok(None) => {}
            Err(err) => {
                tracing::debug!(%err, "Submission rejected");
                self.status_message = None;
            }
        }

        if let FormEvent::SubmitRequested(submit) = &event {
            self.apply_default_action(submit);
        }
    }

    /// Default host behavior for a submit: rebuild the form from its initial values
    fn apply_default_action(&mut self, submit: &SubmitEvent) {
        if submit.is_default_prevented() {
            return;
        }
        tracing::debug!(trigger = ?submit.trigger, "Reloading form");
        self.form = NameForm::new(self.config.first_name(), self.config.last_name());
        self.status_message = None;
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Char('s') if ctrl => {
                self.dispatch(FormEvent::submit(SubmitTrigger::Key));
            }
            KeyCode::Enter => {
                let trigger = if self.form.is_submit_active() {
                    SubmitTrigger::Button
                } else {
                    SubmitTrigger::Key
                };
                self.dispatch(FormEvent::submit(trigger));
            }
            // Ctrl+U clears the focused field
            KeyCode::Char('u') if ctrl => {
                if let Some(field) = self.form.active_field_id() {
                    self.dispatch(FormEvent::field_changed(field, ""));
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = self.form.active_field_id() {
                    let value = self.form.field(field).with_char(c);
                    self.dispatch(FormEvent::field_changed(field, value));
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.form.active_field_id() {
                    let value = self.form.field(field).without_last_char();
                    self.dispatch(FormEvent::field_changed(field, value));
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle a mouse event: clicks focus a field or press Submit
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return Ok(());
        };
        let Some(slot) = ui::form_slot_at(self.screen_area(), mouse.column, mouse.row) else {
            return Ok(());
        };

        self.form.set_active_field(slot);
        if self.form.is_submit_active() {
            self.dispatch(FormEvent::submit(SubmitTrigger::Button));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MockSubmissionSink;
    use crate::state::{FieldId, Record};

    fn quiet_app() -> App {
        let mut sink = MockSubmissionSink::new();
        sink.expect_submit().return_const(());
        App::new(TuiConfig::default(), Box::new(sink))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn click(row: u16, column: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    mod keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_uses_config_defaults() {
            let app = quiet_app();
            assert_eq!(app.form.value(FieldId::FirstName), "Beatriz");
            assert_eq!(app.form.value(FieldId::LastName), "Solórzano");
            assert!(!app.should_quit());
        }

        #[test]
        fn test_new_uses_configured_names() {
            let config = TuiConfig {
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                print_on_exit: None,
            };
            let app = App::new(config, Box::new(MockSubmissionSink::new()));
            assert_eq!(app.form.value(FieldId::FirstName), "Ada");
            assert_eq!(app.form.value(FieldId::LastName), "Lovelace");
        }

        #[test]
        fn test_typing_appends_to_focused_field() {
            let mut app = quiet_app();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_text(&mut app, "-Ruiz");
            assert_eq!(app.form.value(FieldId::LastName), "Solórzano-Ruiz");
            assert_eq!(app.form.value(FieldId::FirstName), "Beatriz");
        }

        #[test]
        fn test_backspace_and_clear() {
            let mut app = quiet_app();
            app.handle_key(key(KeyCode::Backspace)).unwrap();
            assert_eq!(app.form.value(FieldId::FirstName), "Beatri");
            app.handle_key(ctrl('u')).unwrap();
            assert_eq!(app.form.value(FieldId::FirstName), "");
        }

        #[test]
        fn test_typing_on_submit_button_is_ignored() {
            let mut app = quiet_app();
            app.handle_key(key(KeyCode::BackTab)).unwrap();
            assert!(app.form.is_submit_active());
            type_text(&mut app, "xyz");
            assert_eq!(app.form.value(FieldId::FirstName), "Beatriz");
            assert_eq!(app.form.value(FieldId::LastName), "Solórzano");
        }

        #[test]
        fn test_enter_submits_and_resets_fields() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_submit()
                .withf(|r| r.first_name == "Beatriz" && r.last_name == "Solórzano")
                .times(1)
                .return_const(());
            let mut app = App::new(TuiConfig::default(), Box::new(sink));

            app.handle_key(key(KeyCode::Enter)).unwrap();

            assert_eq!(
                app.form.submissions(),
                [Record {
                    first_name: "Beatriz".to_string(),
                    last_name: "Solórzano".to_string(),
                }]
            );
            assert_eq!(app.form.value(FieldId::FirstName), "");
            assert_eq!(app.form.value(FieldId::LastName), "");
            assert_eq!(
                app.status_message.as_deref(),
                Some("Submitted Beatriz Solórzano")
            );
        }

        #[test]
        fn test_empty_first_name_shows_error_and_keeps_form() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_submit().times(0);
            let mut app = App::new(TuiConfig::default(), Box::new(sink));

            app.handle_key(ctrl('u')).unwrap();
            app.handle_key(ctrl('s')).unwrap();

            assert!(app.form.submissions().is_empty());
            assert_eq!(app.form.errors(), ["First name is required!".to_string()]);
            // Rejected submit must not reload the form back to its defaults
            assert_eq!(app.form.value(FieldId::FirstName), "");
            assert_eq!(app.form.value(FieldId::LastName), "Solórzano");
        }

        #[test]
        fn test_ctrl_s_submits_from_any_focus() {
            let mut app = quiet_app();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            app.handle_key(ctrl('s')).unwrap();
            assert_eq!(app.form.submissions().len(), 1);
            assert_eq!(app.form.value(FieldId::LastName), "");
        }

        #[test]
        fn test_plain_s_is_typed_not_submitted() {
            let mut app = quiet_app();
            type_text(&mut app, "s");
            assert!(app.form.submissions().is_empty());
            assert_eq!(app.form.value(FieldId::FirstName), "Beatrizs");
        }

        #[test]
        fn test_super_s_does_not_submit() {
            let mut app = quiet_app();
            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::SUPER))
                .unwrap();
            assert!(app.form.submissions().is_empty());
        }

        #[test]
        fn test_typing_after_error_clears_it() {
            let mut app = quiet_app();
            app.handle_key(ctrl('u')).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.form.errors().len(), 1);

            type_text(&mut app, "A");
            assert!(app.form.errors().is_empty());
        }

        #[test]
        fn test_successive_submissions_accumulate() {
            let mut app = quiet_app();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            type_text(&mut app, "Ada");
            app.handle_key(key(KeyCode::Enter)).unwrap();

            let names: Vec<String> = app
                .form
                .submissions()
                .iter()
                .map(Record::display_name)
                .collect();
            assert_eq!(names, vec!["Beatriz Solórzano", "Ada "]);
        }

        #[test]
        fn test_esc_and_ctrl_c_quit() {
            let mut app = quiet_app();
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(app.should_quit());

            let mut app = quiet_app();
            app.handle_key(ctrl('c')).unwrap();
            assert!(app.should_quit());
        }
    }

    mod default_action {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_unprevented_submit_reloads_form() {
            let mut app = quiet_app();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            type_text(&mut app, "Grace");
            assert_eq!(app.form.submissions().len(), 1);

            app.apply_default_action(&SubmitEvent::new(SubmitTrigger::Key));

            assert!(app.form.submissions().is_empty());
            assert_eq!(app.form.value(FieldId::FirstName), "Beatriz");
        }

        #[test]
        fn test_prevented_submit_keeps_form() {
            let mut app = quiet_app();
            type_text(&mut app, "x");
            let mut submit = SubmitEvent::new(SubmitTrigger::Button);
            submit.prevent_default();

            app.apply_default_action(&submit);

            assert_eq!(app.form.value(FieldId::FirstName), "Beatrizx");
        }
    }

    mod mouse {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_click_focuses_last_name() {
            let mut app = quiet_app();
            app.terminal_size = Some((24, 80));
            app.handle_mouse(click(6, 10)).unwrap();
            assert_eq!(app.form.active_field_id(), Some(FieldId::LastName));
        }

        #[test]
        fn test_click_submit_button_submits() {
            let mut app = quiet_app();
            app.terminal_size = Some((24, 80));
            app.handle_mouse(click(9, 10)).unwrap();
            assert_eq!(app.form.submissions().len(), 1);
        }

        #[test]
        fn test_click_outside_form_is_ignored() {
            let mut app = quiet_app();
            app.terminal_size = Some((24, 80));
            app.handle_mouse(click(6, 60)).unwrap();
            app.handle_mouse(click(15, 10)).unwrap();
            assert_eq!(app.form.active_field_index, 0);
            assert!(app.form.submissions().is_empty());
        }

        #[test]
        fn test_click_on_short_terminal_status_bar_is_ignored() {
            let mut app = quiet_app();
            app.terminal_size = Some((10, 80));
            // Status bar, then the form panel's bottom border
            app.handle_mouse(click(9, 10)).unwrap();
            app.handle_mouse(click(8, 10)).unwrap();
            assert!(app.form.submissions().is_empty());
            assert_eq!(app.form.active_field_index, 0);
        }

        #[test]
        fn test_click_on_panel_border_is_ignored() {
            let mut app = quiet_app();
            app.terminal_size = Some((24, 80));
            app.handle_mouse(click(0, 10)).unwrap();
            app.handle_mouse(click(5, 0)).unwrap();
            assert_eq!(app.form.active_field_index, 0);
        }

        #[test]
        fn test_scroll_is_ignored() {
            let mut app = quiet_app();
            let mut event = click(6, 10);
            event.kind = MouseEventKind::ScrollDown;
            app.handle_mouse(event).unwrap();
            assert_eq!(app.form.active_field_index, 0);
        }
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    button::Button,
    dialog,
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    text::TextEditor,
    valuator::HorNiceSlider,
    window::Window,
};

use super::error::AppError;
use super::explain::{self, ExplainConfig};
use super::export;
use super::formatter;
use super::levels::ExplanationLevel;
use super::messages::Message;
use super::settings::{AppSettings, ThemeMode};
use crate::ui::file_dialogs::native_save_dialog;
use crate::ui::main_window::{MainWidgets, level_caption_text};
use crate::ui::theme::{ThemedWidgets, apply_theme, wrap_html_for_helpview};

const IDLE_PLACEHOLDER: &str = "<p><i>Your explanation will appear here...</i></p>";
const LOADING_PLACEHOLDER: &str = "<p><i>Generating explanation...</i></p>";

/// Lifecycle of the single explanation request.
///
/// Replaced wholesale on every transition; there is never more than one
/// value, so a loading flag, an error string and stale output can never
/// disagree with each other.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Loading,
    Succeeded(String),
    Failed(String),
}

pub struct AppState {
    pub window: Window,
    pub menu: MenuBar,
    pub flex: Flex,
    pub input: TextEditor,
    pub level_slider: HorNiceSlider,
    pub level_caption: Frame,
    pub explain_button: Button,
    pub clear_button: Button,
    pub export_button: Button,
    pub error_banner: Frame,
    pub output: HelpView,
    pub sender: Sender<Message>,
    pub settings: Rc<RefCell<AppSettings>>,
    pub config: ExplainConfig,
    pub dark_mode: bool,
    pub level: ExplanationLevel,
    pub request: RequestState,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: Rc<RefCell<AppSettings>>,
        config: ExplainConfig,
        dark_mode: bool,
    ) -> Self {
        let level = settings.borrow().default_level;
        Self {
            window: widgets.wind,
            menu: widgets.menu,
            flex: widgets.flex,
            input: widgets.input,
            level_slider: widgets.level_slider,
            level_caption: widgets.level_caption,
            explain_button: widgets.explain_button,
            clear_button: widgets.clear_button,
            export_button: widgets.export_button,
            error_banner: widgets.error_banner,
            output: widgets.output,
            sender,
            settings,
            config,
            dark_mode,
            level,
            request: RequestState::Idle,
        }
    }

    /// Theme, font size and placeholder for a freshly built window.
    pub fn apply_initial_appearance(&mut self) {
        let font_size = self.settings.borrow().font_size as i32;
        self.set_font_size(font_size);
        self.refresh_theme();
        self.render_output(IDLE_PLACEHOLDER);
    }

    // --- Explain lifecycle ---

    /// Start an explanation request for the current input and level.
    ///
    /// Preconditions are checked here, before any state transition: while a
    /// request is outstanding this is a no-op (the button is disabled too),
    /// and empty input or a missing credential surface inline without a
    /// network call.
    pub fn explain(&mut self) {
        if self.request == RequestState::Loading {
            return;
        }

        let text = self.input_text().trim().to_string();
        if text.is_empty() {
            self.show_error(&AppError::EmptyInput.to_string());
            return;
        }
        if !self.config.has_api_key() {
            self.show_error(&AppError::MissingApiKey.to_string());
            return;
        }

        self.request = RequestState::Loading;
        self.hide_error();
        self.render_output(LOADING_PLACEHOLDER);
        self.set_busy(true);

        let config = self.config.clone();
        let level = self.level;
        let sender = self.sender;
        std::thread::spawn(move || {
            let result = explain::request_explanation(&config, &text, level)
                .map_err(|err| err.to_string());
            sender.send(Message::ExplainFinished(result));
        });
    }

    /// Apply the settled request outcome sent back by the worker thread.
    pub fn finish_explain(&mut self, result: Result<String, String>) {
        match result {
            Ok(raw) => {
                let html = formatter::format_markdown(&raw);
                self.render_output(&html);
                self.hide_error();
                self.request = RequestState::Succeeded(html);
            }
            Err(message) => {
                let message = format!("Error: {}. Please try again.", message);
                self.render_output("");
                self.show_error(&message);
                self.request = RequestState::Failed(message);
            }
        }
        self.set_busy(false);
    }

    /// Reset input, output and error. Safe to call in any state.
    pub fn clear_all(&mut self) {
        if let Some(mut buffer) = self.input.buffer() {
            buffer.set_text("");
        }
        self.render_output(IDLE_PLACEHOLDER);
        self.hide_error();
        self.request = RequestState::Idle;
    }

    /// Save the current explanation, tags stripped, as a dated text file.
    /// No-op when there is no successful output to export.
    pub fn export_output(&mut self) {
        let RequestState::Succeeded(html) = &self.request else {
            return;
        };
        let html = html.clone();

        let suggested = export::export_filename(chrono::Local::now().date_naive());
        if let Some(path) = native_save_dialog(&suggested) {
            if let Err(e) = export::write_plain_text(std::path::Path::new(&path), &html) {
                dialog::alert_default(&format!("Error exporting explanation: {}", e));
            }
        }
    }

    // --- Level selection ---

    pub fn set_level(&mut self, ordinal: u8) {
        let Some(level) = ExplanationLevel::from_ordinal(ordinal) else {
            return;
        };
        self.level = level;
        self.level_caption.set_label(&level_caption_text(level));
        self.level_caption.redraw();
        {
            let mut s = self.settings.borrow_mut();
            s.default_level = level;
            let _ = s.save();
        }
    }

    // --- View ---

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.refresh_theme();
        {
            let mut s = self.settings.borrow_mut();
            s.theme_mode = if self.dark_mode {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            };
            let _ = s.save();
        }
    }

    pub fn set_font_size(&mut self, size: i32) {
        self.input.set_text_size(size);
        self.output.set_text_size(size);
        self.input.redraw();
        self.output.redraw();
        {
            let mut s = self.settings.borrow_mut();
            s.font_size = size as u32;
            let _ = s.save();
        }
    }

    fn refresh_theme(&mut self) {
        apply_theme(
            &mut ThemedWidgets {
                window: &mut self.window,
                menu: &mut self.menu,
                input: &mut self.input,
                output: &mut self.output,
                level_slider: &mut self.level_slider,
                level_caption: &mut self.level_caption,
                explain_button: &mut self.explain_button,
                error_banner: &mut self.error_banner,
            },
            self.dark_mode,
        );
        // Re-render so the output body colors follow the theme.
        let current = match &self.request {
            RequestState::Succeeded(html) => html.clone(),
            RequestState::Loading => LOADING_PLACEHOLDER.to_string(),
            _ => IDLE_PLACEHOLDER.to_string(),
        };
        self.render_output(&current);
    }

    // --- Internals ---

    fn input_text(&self) -> String {
        self.input.buffer().map(|b| b.text()).unwrap_or_default()
    }

    fn render_output(&mut self, html: &str) {
        self.output
            .set_value(&wrap_html_for_helpview(html, self.dark_mode));
        self.output.redraw();
    }

    fn set_busy(&mut self, busy: bool) {
        if busy {
            self.explain_button.set_label("Explaining...");
            self.explain_button.deactivate();
            self.clear_button.deactivate();
            self.export_button.deactivate();
            self.input.deactivate();
            self.level_slider.deactivate();
        } else {
            self.explain_button.set_label("Explain");
            self.explain_button.activate();
            self.clear_button.activate();
            self.export_button.activate();
            self.input.activate();
            self.level_slider.activate();
        }
        self.window.redraw();
    }

    fn show_error(&mut self, message: &str) {
        self.error_banner.set_label(message);
        self.error_banner.show();
        self.flex.fixed(&self.error_banner, 30);
        self.window.redraw();
    }

    fn hide_error(&mut self) {
        self.error_banner.set_label("");
        self.error_banner.hide();
        self.flex.fixed(&self.error_banner, 0);
        self.window.redraw();
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use fltk::app;
use fltk::prelude::*;
use tracing_subscriber::EnvFilter;

use explain_pad::app::messages::Message;
use explain_pad::app::platform::detect_system_dark_mode;
use explain_pad::app::settings::{AppSettings, ThemeMode};
use explain_pad::app::state::AppState;
use explain_pad::app::ExplainConfig;
use explain_pad::ui::dialogs::about::show_about_dialog;
use explain_pad::ui::main_window::build_main_window;
use explain_pad::ui::menu::build_menu;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let settings = Rc::new(RefCell::new(AppSettings::load()));
    let config = ExplainConfig::from_env();
    if !config.has_api_key() {
        tracing::warn!("no API key configured; requests will fail until one is set");
    }

    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let dark_mode = match settings.borrow().theme_mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::SystemDefault => detect_system_dark_mode(),
    };

    let initial_level = settings.borrow().default_level;
    let mut widgets = build_main_window(&sender, initial_level);
    build_menu(&mut widgets.menu, &sender, dark_mode);

    let mut state = AppState::new(widgets, sender, settings, config, dark_mode);
    state.apply_initial_appearance();
    state.window.show();

    while fltk_app.wait() {
        if let Some(message) = receiver.recv() {
            match message {
                Message::Explain => state.explain(),
                Message::ExplainFinished(result) => state.finish_explain(result),
                Message::ClearAll => state.clear_all(),
                Message::ExportOutput => state.export_output(),
                Message::LevelChanged(ordinal) => state.set_level(ordinal),
                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::SetFontSize(size) => state.set_font_size(size),
                Message::ShowAbout => show_about_dialog(),
                Message::Quit => app::quit(),
            }
        }
    }
}

use fltk::{
    button::Button,
    dialog,
    enums::{Align, Color, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

const REPOSITORY_URL: &str = "https://github.com/explainpad/explainpad";

/// Show About dialog
pub fn show_about_dialog() {
    let version = env!("CARGO_PKG_VERSION");
    let mut dialog_window = Window::default()
        .with_size(420, 320)
        .with_label("About ExplainPad")
        .center_screen();
    dialog_window.make_modal(true);

    let mut flex = Flex::new(10, 10, 400, 300, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default();
    title.set_label("ExplainPad");
    title.set_label_size(24);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 40);

    let mut version_frame = Frame::default();
    version_frame.set_label(&format!("Version {}", version));
    version_frame.set_label_size(14);
    flex.fixed(&version_frame, 25);

    let mut desc_frame = Frame::default();
    desc_frame.set_label("Paste in complex text and get a simple explanation");
    desc_frame.set_label_size(12);
    desc_frame.set_label_color(Color::from_rgb(100, 100, 100));
    flex.fixed(&desc_frame, 25);

    let info_text = "Explanations are generated by a chat-completion\n\
                     service; set EXPLAINPAD_API_KEY to use it.\n\n\
                     Built with Rust and FLTK";
    let mut info_frame = Frame::default();
    info_frame.set_label(info_text);
    info_frame.set_label_size(12);
    info_frame.set_align(Align::Center | Align::Inside);
    flex.fixed(&info_frame, 90);

    let mut button_row = Flex::default();
    button_row.set_type(fltk::group::FlexType::Row);
    button_row.set_spacing(10);

    let mut github_btn = Button::default().with_label("View on GitHub");
    let mut close_btn = Button::default().with_label("Close");

    button_row.end();
    flex.fixed(&button_row, 35);

    flex.end();
    dialog_window.end();

    github_btn.set_callback(move |_| {
        if let Err(e) = open::that(REPOSITORY_URL) {
            dialog::alert_default(&format!("Failed to open browser: {}", e));
        }
    });

    let mut dialog_close = dialog_window.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog_window.show();
    super::run_dialog(&dialog_window);
}

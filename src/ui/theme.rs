use fltk::{
    button::Button,
    enums::Color,
    frame::Frame,
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    text::TextEditor,
    valuator::HorNiceSlider,
    window::Window,
};

pub struct ThemedWidgets<'a> {
    pub window: &'a mut Window,
    pub menu: &'a mut MenuBar,
    pub input: &'a mut TextEditor,
    pub output: &'a mut HelpView,
    pub level_slider: &'a mut HorNiceSlider,
    pub level_caption: &'a mut Frame,
    pub explain_button: &'a mut Button,
    pub error_banner: &'a mut Frame,
}

pub fn apply_theme(widgets: &mut ThemedWidgets, is_dark: bool) {
    if is_dark {
        // Dark mode colors
        widgets.input.set_color(Color::from_rgb(30, 30, 30));
        widgets.input.set_text_color(Color::from_rgb(220, 220, 220));
        widgets.input.set_cursor_color(Color::from_rgb(255, 255, 255));
        widgets.input.set_selection_color(Color::from_rgb(70, 70, 100));
        widgets.output.set_color(Color::from_rgb(20, 20, 20));
        widgets.window.set_color(Color::from_rgb(25, 25, 25));
        widgets.window.set_label_color(Color::from_rgb(220, 220, 220));
        widgets.menu.set_color(Color::from_rgb(35, 35, 35));
        widgets.menu.set_text_color(Color::from_rgb(220, 220, 220));
        widgets.menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
        widgets.level_slider.set_color(Color::from_rgb(55, 55, 55));
        widgets.level_caption.set_label_color(Color::from_rgb(150, 180, 255));
        widgets.explain_button.set_color(Color::from_rgb(37, 99, 235));
        widgets.explain_button.set_label_color(Color::White);
        widgets.error_banner.set_color(Color::from_rgb(90, 30, 30));
        widgets.error_banner.set_label_color(Color::from_rgb(250, 200, 200));
    } else {
        // Light mode colors
        widgets.input.set_color(Color::White);
        widgets.input.set_text_color(Color::Black);
        widgets.input.set_cursor_color(Color::Black);
        widgets.input.set_selection_color(Color::from_rgb(173, 216, 230));
        widgets.output.set_color(Color::White);
        widgets.window.set_color(Color::from_rgb(240, 240, 240));
        widgets.window.set_label_color(Color::Black);
        widgets.menu.set_color(Color::from_rgb(240, 240, 240));
        widgets.menu.set_text_color(Color::Black);
        widgets.menu.set_selection_color(Color::from_rgb(200, 200, 200)); // Hover color
        widgets.level_slider.set_color(Color::from_rgb(210, 210, 210));
        widgets.level_caption.set_label_color(Color::from_rgb(30, 64, 175));
        widgets.explain_button.set_color(Color::from_rgb(59, 130, 246));
        widgets.explain_button.set_label_color(Color::White);
        widgets.error_banner.set_color(Color::from_rgb(255, 228, 225)); // Misty rose
        widgets.error_banner.set_label_color(Color::from_rgb(139, 0, 0));
    }

    widgets.input.redraw();
    widgets.output.redraw();
    widgets.window.redraw();
    widgets.menu.redraw();
}

/// Wrap formatted output in HelpView-compatible body and font tags so the
/// rendered text follows the active theme.
pub fn wrap_html_for_helpview(html: &str, is_dark: bool) -> String {
    let (bgcolor, text_color) = if is_dark {
        ("#141414", "#dcdcdc")
    } else {
        ("#ffffff", "#000000")
    };
    format!(
        "<body bgcolor=\"{bgcolor}\" text=\"{text_color}\"><font face=\"Helvetica\">{html}</font></body>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_html_for_helpview_light() {
        let wrapped = wrap_html_for_helpview("<p>Hello</p>", false);
        assert!(wrapped.starts_with("<body bgcolor=\"#ffffff\""));
        assert!(wrapped.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_wrap_html_for_helpview_dark() {
        let wrapped = wrap_html_for_helpview("<p>Hello</p>", true);
        assert!(wrapped.contains("text=\"#dcdcdc\""));
        assert!(wrapped.contains("<p>Hello</p>"));
    }
}

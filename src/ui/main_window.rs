use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, FrameType},
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    valuator::HorNiceSlider,
    window::Window,
};

use crate::app::levels::ExplanationLevel;
use crate::app::messages::Message;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub input: TextEditor,
    pub level_slider: HorNiceSlider,
    pub level_caption: Frame,
    pub explain_button: Button,
    pub clear_button: Button,
    pub export_button: Button,
    pub error_banner: Frame,
    pub output: HelpView,
}

pub fn build_main_window(sender: &Sender<Message>, initial_level: ExplanationLevel) -> MainWidgets {
    let mut wind = Window::new(100, 100, 720, 640, "ExplainPad");
    wind.set_xclass("ExplainPad");

    let mut flex = Flex::new(10, 10, 700, 620, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(8);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    // Error strip (initially hidden), styled by the theme
    let mut error_banner = Frame::default().with_size(0, 0);
    error_banner.set_frame(FrameType::FlatBox);
    error_banner.set_label_size(13);
    error_banner.hide();
    flex.fixed(&error_banner, 0);

    let mut input_label = Frame::default().with_label("Your text:");
    input_label.set_align(Align::Inside | Align::Left);
    input_label.set_label_size(13);
    flex.fixed(&input_label, 20);

    let mut input = TextEditor::new(0, 0, 0, 0, "");
    input.set_buffer(TextBuffer::default());
    input.wrap_mode(WrapMode::AtBounds, 0);

    let mut level_caption = Frame::default();
    level_caption.set_align(Align::Inside | Align::Left);
    level_caption.set_label_size(12);
    level_caption.set_label(&level_caption_text(initial_level));
    flex.fixed(&level_caption, 20);

    let mut level_slider = HorNiceSlider::default();
    level_slider.set_bounds(0.0, (ExplanationLevel::ALL.len() - 1) as f64);
    level_slider.set_step(1.0, 1);
    level_slider.set_value(initial_level.ordinal() as f64);
    level_slider.set_callback({
        let s = *sender;
        move |slider| s.send(Message::LevelChanged(slider.value().round() as u8))
    });
    flex.fixed(&level_slider, 24);

    // Level tick labels under the slider, one per position
    let mut tick_row = Flex::default();
    tick_row.set_type(fltk::group::FlexType::Row);
    for level in ExplanationLevel::ALL {
        let mut tick = Frame::default().with_label(level.label());
        tick.set_label_size(10);
        tick.set_label_color(Color::from_rgb(120, 120, 120));
    }
    tick_row.end();
    flex.fixed(&tick_row, 16);

    let mut button_row = Flex::default();
    button_row.set_type(fltk::group::FlexType::Row);
    button_row.set_spacing(10);

    let mut explain_button = Button::default().with_label("Explain");
    explain_button.emit(*sender, Message::Explain);

    let mut clear_button = Button::default().with_label("Clear");
    clear_button.emit(*sender, Message::ClearAll);

    let mut export_button = Button::default().with_label("Export");
    export_button.emit(*sender, Message::ExportOutput);

    button_row.end();
    flex.fixed(&button_row, 35);

    let mut output_label = Frame::default().with_label("Explanation:");
    output_label.set_align(Align::Inside | Align::Left);
    output_label.set_label_size(13);
    flex.fixed(&output_label, 20);

    let output = HelpView::new(0, 0, 0, 0, "");

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        flex,
        menu,
        input,
        level_slider,
        level_caption,
        explain_button,
        clear_button,
        export_button,
        error_banner,
        output,
    }
}

/// Caption shown above the level slider.
pub fn level_caption_text(level: ExplanationLevel) -> String {
    format!("Explanation level: {}", level.label())
}

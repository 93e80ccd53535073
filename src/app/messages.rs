/// All messages that can be sent through the FLTK channel.
/// Widget and menu callbacks send one of these; the dispatch loop in main
/// handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Actions
    Explain,
    ClearAll,
    ExportOutput,
    LevelChanged(u8),

    // Sent by the worker thread when the completion request settles.
    ExplainFinished(Result<String, String>),

    // View
    ToggleDarkMode,
    SetFontSize(i32),

    // Help & app
    ShowAbout,
    Quit,
}

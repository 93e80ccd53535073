use fltk::dialog::{FileDialogType, NativeFileChooser};

/// Native save dialog with a suggested file name. Returns the chosen path,
/// or None when the user cancels.
pub fn native_save_dialog(preset_name: &str) -> Option<String> {
    let mut chooser = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    chooser.set_filter("*.txt");
    chooser.set_preset_file(preset_name);
    chooser.show(); // blocks until close
    let filename = chooser.filename();
    let path = filename.to_string_lossy();
    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}

//! ExplainPad - paste in complex text and get an explanation at the level
//! you choose.
//!
//! A single FLTK window drives the whole app: the user pastes text, picks
//! one of five explanation levels, and the text plus a level-specific
//! instruction goes to an OpenAI-compatible chat-completion endpoint on a
//! worker thread. The returned markdown-ish text is rewritten to HTML by
//! [`app::formatter`] and shown in a `HelpView` pane, from where it can be
//! exported as a dated plain-text file.

pub mod app;
pub mod ui;

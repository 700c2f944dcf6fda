mod text_generator;

pub use text_generator::{ScriptedTextGenerator, TextGenerator};

//! Gopher translator core: word/sentence translation and the shared
//! translation history.

pub mod config;
pub mod error;
pub mod history;
pub mod translator;

pub use config::GopherConfig;
pub use error::{ErrorKind, GopherError, Result, TranslationError};
pub use history::{History, Records};
pub use translator::{split_trailing_mark, translate_sentence, translate_word};

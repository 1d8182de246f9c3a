mod pdf2zh_runner;

pub use pdf2zh_runner::{find_translated_output, Pdf2zhRunner, TRANSLATION_TIMEOUT};

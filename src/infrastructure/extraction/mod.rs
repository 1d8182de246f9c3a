mod pdf_extractor;

pub use pdf_extractor::{PdfExtractor, MAX_CHARS, MAX_PAGES};

use lopdf::Document;
use tracing::{info, warn};

use crate::error::ParseError;

/// Extracts the text of every page, in page order.
///
/// A page whose content cannot be decoded yields an empty string so the rest
/// of the document is still scanned.
pub fn extract_pages(pdf: &[u8]) -> Result<Vec<String>, ParseError> {
    let doc = Document::load_mem(pdf)?;
    let pages = doc.get_pages();
    info!("Loaded PDF with {} page(s)", pages.len());

    let mut texts = Vec::with_capacity(pages.len());
    for page_num in pages.keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(text) => texts.push(text),
            Err(source) => {
                let err = ParseError::Page {
                    page: *page_num,
                    source,
                };
                warn!("{}", err);
                texts.push(String::new());
            }
        }
    }

    Ok(texts)
}

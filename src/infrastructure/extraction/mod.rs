use lopdf::Document;

/// Extract the text of every page of a PDF, pages joined with newline
/// separators. A page that yields no text contributes an empty line rather
/// than failing the whole document.
pub fn extract_pages(bytes: &[u8]) -> Result<String, String> {
    let document =
        Document::load_mem(bytes).map_err(|e| format!("Failed to parse PDF: {}", e))?;

    let mut pages = Vec::new();
    for (page_number, _) in document.get_pages() {
        match document.extract_text(&[page_number]) {
            Ok(text) => pages.push(text),
            Err(e) => {
                tracing::warn!(page = page_number, error = %e, "Failed to extract page text");
                pages.push(String::new());
            }
        }
    }

    Ok(pages.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bytes_are_rejected() {
        let result = extract_pages(b"definitely not a pdf");
        assert!(result.is_err());
    }
}

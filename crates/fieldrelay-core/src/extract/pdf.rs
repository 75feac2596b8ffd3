use lopdf::Document;

use crate::error::{Error, Result};

/// Read a PDF and join the extracted text of every page in document order
/// with newline separators. A page that yields no text contributes an
/// empty segment rather than an error.
pub fn read_text(bytes: &[u8]) -> Result<String> {
    let doc = Document::load_mem(bytes).map_err(|e| failed(e.to_string()))?;

    let mut pages = Vec::new();
    for page_number in doc.get_pages().keys() {
        let page_text = doc
            .extract_text(&[*page_number])
            .map_err(|e| failed(e.to_string()))?;
        pages.push(page_text);
    }

    Ok(pages.join("\n"))
}

fn failed(message: String) -> Error {
    Error::ExtractionFailed {
        filename: String::new(),
        message,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Build a one-page PDF with the given line of text.
    pub(crate) fn sample_pdf(text: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_extracts_page_text() {
        let bytes = sample_pdf("VIN: 1HGCM82633A004352");
        let text = read_text(&bytes).unwrap();
        assert!(text.contains("VIN: 1HGCM82633A004352"), "got: {text:?}");
    }

    #[test]
    fn test_garbage_bytes_fail() {
        assert!(matches!(
            read_text(b"%PDF-nope"),
            Err(Error::ExtractionFailed { .. })
        ));
    }
}

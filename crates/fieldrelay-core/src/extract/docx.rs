use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::error::{Error, Result};

/// Read a word-processor document and join the text of every paragraph in
/// document order with newline separators.
pub fn read_text(bytes: &[u8]) -> Result<String> {
    let docx = read_docx(bytes).map_err(|e| Error::ExtractionFailed {
        filename: String::new(),
        message: e.to_string(),
    })?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

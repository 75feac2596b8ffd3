use crate::schema::ExtractionMode;

const PORTAL_INSTRUCTION: &str = "For Create Client Web Portal, return 'true' if enabled or \
     'false' if not mentioned or disabled. ";

/// Build the extraction prompt for a mode: the field list verbatim, the
/// null-if-missing instruction, and the full extracted text inline at the
/// end. Plain interpolation, no templating.
#[must_use]
pub fn build_prompt(mode: ExtractionMode, text: &str) -> String {
    let extra = match mode {
        ExtractionMode::Vehicle => "",
        ExtractionMode::Personal => PORTAL_INSTRUCTION,
    };

    format!(
        "Extract the following fields from this text and return them as a JSON object: {}. \
         {extra}If any field is not found, set it to null. Text: {text}",
        mode.field_names().join(", "),
    )
}

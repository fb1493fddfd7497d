//! Pretty printing of compact XML documents

use ormgen_core::error::{MappingError, Result};
use quick_xml::events::Event;
use quick_xml::{Reader, Writer};

/// Re-emit `xml` with one element per line, indented by `indent` spaces
/// per level
///
/// Whitespace-only text is dropped; everything else, including escaping,
/// is copied unchanged. The result ends with a newline.
///
/// # Errors
///
/// Returns a format error if `xml` is not well formed.
pub fn pretty_print(xml: &str, indent: usize) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', indent);

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(event) => writer
                .write_event(event)
                .map_err(|e| MappingError::format(format!("XML write error: {e}")))?,
            Err(e) => {
                return Err(MappingError::format(format!(
                    "XML parse error at position {}: {e}",
                    reader.buffer_position()
                )));
            }
        }
    }

    let mut text = String::from_utf8(writer.into_inner())
        .map_err(|e| MappingError::format(format!("Output is not UTF-8: {e}")))?;
    text.push('\n');
    Ok(text)
}

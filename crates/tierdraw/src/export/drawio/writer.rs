//! Indented XML serialization of an [`Element`] tree.

use std::fmt::{self, Write};

use super::element::Element;

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const INDENT: &str = "  ";

/// Write an XML declaration followed by `root`, one element per line.
///
/// Elements without children are self-closed; attribute values are escaped.
pub fn write_document<W: Write>(out: &mut W, root: &Element) -> fmt::Result {
    writeln!(out, "{DECLARATION}")?;
    write_element(out, root, 0)
}

fn write_element<W: Write>(out: &mut W, element: &Element, depth: usize) -> fmt::Result {
    write_indent(out, depth)?;
    write!(out, "<{}", element.name())?;
    for (name, value) in element.attributes() {
        write!(out, " {name}=\"")?;
        write_escaped(out, value)?;
        out.write_char('"')?;
    }

    if element.children().is_empty() {
        return writeln!(out, "/>");
    }

    writeln!(out, ">")?;
    for child in element.children() {
        write_element(out, child, depth + 1)?;
    }
    write_indent(out, depth)?;
    writeln!(out, "</{}>", element.name())
}

fn write_indent<W: Write>(out: &mut W, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str(INDENT)?;
    }
    Ok(())
}

/// Escape an attribute value.
///
/// Line breaks and tabs become character references so they survive
/// attribute-value normalization. Other control characters cannot appear
/// in XML 1.0 at all and are replaced with U+FFFD.
fn write_escaped<W: Write>(out: &mut W, value: &str) -> fmt::Result {
    for ch in value.chars() {
        match ch {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            '\n' => out.write_str("&#10;")?,
            '\r' => out.write_str("&#13;")?,
            '\t' => out.write_str("&#9;")?,
            c if c < '\u{20}' => out.write_char('\u{FFFD}')?,
            c => out.write_char(c)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(element: &Element) -> String {
        let mut out = String::new();
        write_document(&mut out, element).unwrap();
        out
    }

    #[test]
    fn test_nested_indentation() {
        let tree = Element::new("a")
            .with_attribute("k", "v")
            .with_child(Element::new("b").with_child(Element::new("c").with_attribute("x", 1)))
            .with_child(Element::new("d"));

        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<a k=\"v\">\n",
            "  <b>\n",
            "    <c x=\"1\"/>\n",
            "  </b>\n",
            "  <d/>\n",
            "</a>\n",
        );
        assert_eq!(render(&tree), expected);
    }

    #[test]
    fn test_escaping() {
        let mut out = String::new();
        write_escaped(&mut out, "R&D <\"edge\"> it's\nok\t\u{1}").unwrap();

        assert_eq!(out, "R&amp;D &lt;&quot;edge&quot;&gt; it's&#10;ok&#9;\u{FFFD}");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        let mut out = String::new();
        write_escaped(&mut out, "Données → S3 ✓").unwrap();

        assert_eq!(out, "Données → S3 ✓");
    }
}

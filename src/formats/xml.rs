//! Minimal owned XML element tree built on quick-xml events

use crate::error::{PlaylistError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// An element with its attributes, direct text and child elements
///
/// Names are stored without namespace prefix.
#[derive(Debug, Clone, Default)]
pub(crate) struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn from_start(start: &BytesStart) -> Result<Self> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            ..Self::default()
        })
    }

    /// First direct child with the given name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Direct children with the given name, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Every element below this one with the given name, in document order
    pub fn descendants_named<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Text and CDATA directly inside this element
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text of the first child with the given name, empty when absent
    pub fn child_text(&self, name: &str) -> String {
        self.child(name)
            .map(|c| c.text.clone())
            .unwrap_or_default()
    }
}

/// Parse a whole document into a nameless document node
///
/// Declarations, comments, processing instructions and doctypes are
/// skipped. Text is trimmed and unescaped.
pub(crate) fn parse_document(text: &str) -> Result<Element> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut stack = vec![Element::default()];

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(Element::from_start(&e)?),
            Event::Empty(e) => {
                let element = Element::from_start(&e)?;
                append_child(&mut stack, element);
            }
            Event::End(e) => {
                if stack.len() < 2 {
                    return Err(PlaylistError::MalformedXml(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(e.local_name().as_ref())
                    )));
                }
                if let Some(element) = stack.pop() {
                    append_child(&mut stack, element);
                }
            }
            Event::Text(e) => {
                let content = e.unescape()?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&content);
                }
            }
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if stack.len() > 1 {
        let unclosed = stack.last().map(|e| e.name.clone()).unwrap_or_default();
        return Err(PlaylistError::MalformedXml(format!(
            "unexpected end of document, <{}> is not closed",
            unclosed
        )));
    }

    stack
        .pop()
        .ok_or_else(|| PlaylistError::MalformedXml("empty document".to_string()))
}

fn append_child(stack: &mut [Element], element: Element) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_shape() {
        let doc = parse_document(
            r#"<?xml version="1.0"?>
<!-- a comment -->
<root a="1" xmlns:x="urn:x">
  <x:item>one &amp; two</x:item>
  <item><![CDATA[<three>]]></item>
  <empty/>
  <nested><item>deep</item></nested>
</root>"#,
        )
        .unwrap();

        let root = doc.child("root").unwrap();
        assert_eq!(root.attribute("a"), Some("1"));
        assert_eq!(root.attribute("missing"), None);

        let items: Vec<&str> = root.children_named("item").map(|e| e.text()).collect();
        assert_eq!(items, vec!["one & two", "<three>"]);

        let all: Vec<&str> = root.descendants_named("item").iter().map(|e| e.text()).collect();
        assert_eq!(all, vec!["one & two", "<three>", "deep"]);

        assert!(root.child("empty").is_some());
        assert_eq!(root.child_text("empty"), "");
        assert_eq!(root.child_text("absent"), "");
    }

    #[test]
    fn test_mismatched_tags() {
        assert!(matches!(
            parse_document("<a><b></a>"),
            Err(PlaylistError::MalformedXml(_))
        ));
    }

    #[test]
    fn test_unclosed_element() {
        assert!(matches!(
            parse_document("<a><b></b>"),
            Err(PlaylistError::MalformedXml(_))
        ));
    }
}

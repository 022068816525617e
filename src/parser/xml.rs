use super::{EmitSummary, FormatHandler, HandlerError, OutputLine, OutputWriter};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::Path;

const ROOT_ELEMENT: &str = "menu";
const ITEM_ELEMENT: &str = "item";
const ITEM_FIELDS: [&str; 3] = ["name", "price", "uom"];

/// Emits one record per `/menu/item` element with its name, price and unit
pub struct XmlHandler;

impl FormatHandler for XmlHandler {
    fn name(&self) -> &str {
        "XML"
    }

    fn extensions(&self) -> &[&str] {
        &[".xml"]
    }

    fn parse_and_emit(&self, path: &Path) -> Result<EmitSummary, HandlerError> {
        // Parse before touching the output so malformed input leaves no file behind
        let text = fs::read_to_string(path)?;
        let doc = XmlDocument::parse(text.strip_prefix('\u{feff}').unwrap_or(&text))?;

        let mut out = OutputWriter::create(path)?;
        for (i, item) in menu_items(&doc).enumerate() {
            out.write_line(&item_record(item, i + 1)?)?;
        }

        out.finish()
    }
}

/// Items matched by `/menu/item`, in document order
pub fn menu_items(doc: &XmlDocument) -> impl Iterator<Item = &XmlElement> {
    let root = Some(doc.root()).filter(|root| root.name() == ROOT_ELEMENT);
    root.into_iter().flat_map(|root| root.children_named(ITEM_ELEMENT))
}

/// Build the `name ==> price ==> uom` record for one item
///
/// Fails with `MissingField` if any of the three children is absent.
pub fn item_record(item: &XmlElement, line_number: usize) -> Result<OutputLine, HandlerError> {
    let mut values = Vec::with_capacity(ITEM_FIELDS.len());
    for field in ITEM_FIELDS {
        let child = item.child(field).ok_or_else(|| HandlerError::MissingField {
            field: field.to_string(),
            item: line_number,
        })?;
        values.push(child.inner_text());
    }

    Ok(OutputLine::record(line_number, values))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// Element with its child elements and text, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    children: Vec<XmlNode>,
}

impl XmlElement {
    fn new(start: &BytesStart<'_>) -> Result<Self, HandlerError> {
        let name = std::str::from_utf8(start.name().as_ref())
            .map_err(|e| HandlerError::xml(format!("Invalid tag name: {e}")))?
            .to_string();

        Ok(Self {
            name,
            children: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// First direct child element with the given name
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find_map(|node| match node {
            XmlNode::Element(e) if e.name == name => Some(e),
            _ => None,
        })
    }

    pub fn children_named<'a, 'n: 'a>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter_map(move |node| match node {
            XmlNode::Element(e) if e.name == name => Some(e),
            _ => None,
        })
    }

    /// Concatenated text of all descendants
    pub fn inner_text(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, buf: &mut String) {
        for node in &self.children {
            match node {
                XmlNode::Text(t) => buf.push_str(t),
                XmlNode::Element(e) => e.collect_text(buf),
            }
        }
    }
}

/// Parsed XML document with a single root element
#[derive(Debug, Clone)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    /// Build the element tree, rejecting documents that are not well-formed
    pub fn parse(text: &str) -> Result<Self, HandlerError> {
        let mut reader = Reader::from_str(text);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            let event = match reader.read_event() {
                Ok(event) => event,
                Err(e) => {
                    return Err(HandlerError::xml(format!(
                        "parse error at position {}: {e}",
                        reader.error_position()
                    )));
                }
            };

            match event {
                Event::Start(ref e) => {
                    stack.push(XmlElement::new(e)?);
                }
                Event::Empty(ref e) => {
                    let element = XmlElement::new(e)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    // End names are checked by the reader
                    if let Some(element) = stack.pop() {
                        attach(&mut stack, &mut root, element)?;
                    }
                }
                Event::Text(ref t) => {
                    let text = t
                        .unescape()
                        .map_err(|e| HandlerError::xml(format!("Invalid text: {e}")))?;
                    push_text(&mut stack, &text)?;
                }
                Event::CData(c) => {
                    let text = String::from_utf8_lossy(&c.into_inner()).into_owned();
                    push_text(&mut stack, &text)?;
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions, doctype
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(HandlerError::xml(format!(
                "unexpected end of document: <{}> is not closed",
                open.name
            )));
        }

        let root = root.ok_or_else(|| HandlerError::xml("root element is missing"))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), HandlerError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(XmlNode::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(HandlerError::xml(format!(
            "multiple root elements: <{}>",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}

/// Whitespace-only text is formatting and is dropped
fn push_text(stack: &mut [XmlElement], text: &str) -> Result<(), HandlerError> {
    if text.trim().is_empty() {
        return Ok(());
    }
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(XmlNode::Text(text.to_string()));
            Ok(())
        }
        None => Err(HandlerError::xml("text outside the root element")),
    }
}

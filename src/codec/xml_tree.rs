use crate::codec::CodecError;
use quick_xml::Reader;
use quick_xml::events::Event;

/// A minimal element tree: enough structure to walk an XML-RPC envelope.
///
/// Character data directly inside an element (text and CDATA, unescaped) is
/// concatenated into `text`; attributes, comments and processing
/// instructions are dropped since the protocol carries none.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct XmlElement {
    pub name: String,
    pub children: Vec<XmlElement>,
    pub text: String,
}

impl XmlElement {
    fn named(name: &[u8]) -> Self {
        Self {
            name: String::from_utf8_lossy(name).into_owned(),
            ..Default::default()
        }
    }

    /// First child element with the given tag name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All child elements with the given tag name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }
}

/// Parses `xml` into its root element.
pub(crate) fn parse_document(xml: &str) -> Result<XmlElement, CodecError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                if root.is_some() {
                    return Err(CodecError::malformed("content after the root element"));
                }
                stack.push(XmlElement::named(start.name().as_ref()));
            }
            Ok(Event::Empty(empty)) => {
                let element = XmlElement::named(empty.name().as_ref());
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| CodecError::malformed("unmatched closing tag"))?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(text)) => {
                let unescaped = text.unescape().map_err(CodecError::malformed)?;
                push_text(&mut stack, &unescaped)?;
            }
            Ok(Event::CData(cdata)) => {
                let raw = std::str::from_utf8(&cdata).map_err(CodecError::malformed)?;
                push_text(&mut stack, raw)?;
            }
            Ok(Event::Eof) => break,
            // Declaration, comments, processing instructions, doctype
            Ok(_) => {}
            Err(err) => return Err(CodecError::malformed(err)),
        }
    }

    if !stack.is_empty() {
        return Err(CodecError::malformed("unexpected end of document"));
    }

    root.ok_or_else(|| CodecError::malformed("document has no root element"))
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), CodecError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(CodecError::malformed("multiple root elements")),
    }
    Ok(())
}

fn push_text(stack: &mut [XmlElement], text: &str) -> Result<(), CodecError> {
    match stack.last_mut() {
        Some(current) => current.text.push_str(text),
        // Whitespace around the root element is insignificant
        None if text.trim().is_empty() => {}
        None => return Err(CodecError::malformed("text outside the root element")),
    }
    Ok(())
}

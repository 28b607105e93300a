//! Feature model loading
//!
//! Reads the model file with quick-xml into the generic `XmlDocument` the
//! tree builder consumes. Comments, processing instructions and the XML
//! declaration are dropped; whitespace-only text is trimmed away.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::domain::entities::{FeatureNode, XmlDocument, XmlElement, XmlNode};
use crate::domain::services::{build_tree, TreeBuildError, MAX_TREE_DEPTH};
use crate::error::{FmError, FmResult};

/// Loads a feature model file and builds its feature tree
pub fn load_feature_tree(path: &Path) -> FmResult<FeatureNode> {
    let document = load_document(path)?;
    let tree = build_tree(&document).map_err(|e| match e {
        TreeBuildError::MissingStruct => FmError::MissingStructElement {
            path: path.to_path_buf(),
        },
        TreeBuildError::TooDeep => FmError::ModelTooDeep {
            depth: MAX_TREE_DEPTH,
        },
    })?;
    debug!(path = %path.display(), nodes = tree.iter().count(), "Built feature tree");
    Ok(tree)
}

/// Reads and parses a model document
pub fn load_document(path: &Path) -> FmResult<XmlDocument> {
    if !path.is_file() {
        return Err(FmError::MissingModelFile {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_document(&content).map_err(|message| FmError::InvalidXml {
        path: path.to_path_buf(),
        message,
    })
}

/// Parses XML text into a document
pub fn parse_document(xml: &str) -> Result<XmlDocument, String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    // Open elements; the bottom entry is a synthetic holder for top-level nodes.
    let mut stack: Vec<XmlElement> = vec![XmlElement::default()];

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if stack.len() > MAX_TREE_DEPTH * 2 {
                    return Err(format!("nesting deeper than {} elements", MAX_TREE_DEPTH * 2));
                }
                stack.push(element_from(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let element = element_from(&e)?;
                push_child(&mut stack, XmlNode::Element(element));
            }
            Ok(Event::End(_)) => {
                if stack.len() < 2 {
                    return Err(format!("unexpected closing tag at byte {}", reader.buffer_position()));
                }
                if let Some(element) = stack.pop() {
                    push_child(&mut stack, XmlNode::Element(element));
                }
            }
            Ok(Event::Text(t)) => {
                let text = t.unescape().map_err(|e| e.to_string())?;
                push_child(&mut stack, XmlNode::Text(text.into_owned()));
            }
            Ok(Event::CData(t)) => {
                let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                push_child(&mut stack, XmlNode::Text(text));
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(format!("{} at byte {}", err, reader.buffer_position()));
            }
            _ => {}
        }
    }

    if stack.len() != 1 {
        return Err("unexpected end of document: unclosed element".to_string());
    }

    let holder = stack.pop().unwrap_or_default();
    holder
        .children
        .into_iter()
        .find_map(|node| match node {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
        .map(XmlDocument::new)
        .ok_or_else(|| "document has no root element".to_string())
}

fn element_from(start: &BytesStart<'_>) -> Result<XmlElement, String> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = XmlElement::new(tag);
    for attr in start.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(|e| e.to_string())?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn push_child(stack: &mut [XmlElement], node: XmlNode) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

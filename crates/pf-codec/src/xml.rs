//! XML parsing and serialization.
//!
//! Parsing checks well-formedness per XML 1.0 and maps elements into the
//! canonical tree. Attributes land in the [`Attributed`] overlay, and
//! repeated sibling elements collapse into a `Sequence` under their shared
//! name. Element text always stays a string scalar (never numerically
//! coerced); whitespace-only text nodes are ignored.
//!
//! Serialization requires the root node to resolve to exactly one named
//! element. `@`-prefixed mapping keys emit as attributes and a `#text` entry
//! as character data, inverting the overlay's mapping projection, so a
//! document that passed through another notation keeps its attributes on the
//! way back.

use std::fmt::Write as _;

use pf_model::{Attributed, Mapping, Node, Notation, Scalar};

use crate::error::{ParseError, ParseResult, Position, WriteError, WriteResult};
use crate::SerializeOptions;

pub fn parse(text: &str) -> ParseResult<Node> {
    let document = roxmltree::Document::parse(text).map_err(|e| {
        let pos = e.pos();
        ParseError::Syntax {
            notation: Notation::Xml,
            message: e.to_string(),
            position: Some(Position {
                line: pos.row as usize,
                column: pos.col as usize,
            }),
        }
    })?;

    let root = document.root_element();
    let mut mapping = Mapping::new();
    mapping.insert(root.tag_name().name(), convert_element(root));
    Ok(Node::Mapping(mapping))
}

fn convert_element(element: roxmltree::Node<'_, '_>) -> Node {
    let attributes: Vec<(String, Scalar)> = element
        .attributes()
        .map(|a| (a.name().to_owned(), Scalar::String(a.value().to_owned())))
        .collect();

    let mut children = Mapping::new();
    let mut text_parts: Vec<&str> = Vec::new();
    for child in element.children() {
        if child.is_element() {
            let name = child.tag_name().name().to_owned();
            let value = convert_element(child);
            if !children.contains_key(&name) {
                children.insert(name, value);
            } else if let Some(existing) = children.get_mut(&name) {
                match existing {
                    // convert_element never returns a Sequence itself, so an
                    // existing Sequence is always a prior sibling collapse.
                    Node::Sequence(items) => items.push(value),
                    _ => {
                        let first = std::mem::replace(existing, Node::null());
                        *existing = Node::Sequence(vec![first, value]);
                    }
                }
            }
        } else if child.is_text() {
            if let Some(t) = child.text() {
                let t = t.trim();
                if !t.is_empty() {
                    text_parts.push(t);
                }
            }
        }
    }

    let text = if text_parts.is_empty() {
        None
    } else {
        Some(text_parts.join(" "))
    };

    if attributes.is_empty() {
        match (text, children.is_empty()) {
            (None, true) => Node::string(""),
            (Some(t), true) => Node::string(t),
            (None, false) => Node::Mapping(children),
            // Mixed content needs the overlay's text slot even without
            // attributes.
            (text @ Some(_), false) => Node::Attributed(Attributed {
                attributes,
                text,
                children,
            }),
        }
    } else {
        Node::Attributed(Attributed {
            attributes,
            text,
            children,
        })
    }
}

pub fn serialize(node: &Node, options: &SerializeOptions) -> WriteResult<String> {
    let (name, content) = root_element(node)?;
    let mut out = String::new();
    write_element(&mut out, name, content, 0, options);
    Ok(out)
}

fn root_element(node: &Node) -> WriteResult<(&str, &Node)> {
    let Node::Mapping(mapping) = node else {
        return Err(WriteError::XmlRoot(format!("a {}", node.kind())));
    };
    let mut entries = mapping.iter();
    match (entries.next(), entries.next()) {
        (Some((name, _)), _) if name.starts_with('@') || name == "#text" => {
            Err(WriteError::XmlRoot(format!("the reserved key {name:?}")))
        }
        (Some((name, content)), None) => Ok((name, content)),
        _ => Err(WriteError::XmlRoot(format!(
            "a mapping with {} entries",
            mapping.len()
        ))),
    }
}

fn write_element(out: &mut String, name: &str, node: &Node, depth: usize, options: &SerializeOptions) {
    match node {
        // A sequence repeats the parent tag per item. This also covers
        // mixed scalar/object arrays: each item emits in order under the
        // same name.
        Node::Sequence(items) => {
            for item in items {
                write_element(out, name, item, depth, options);
            }
        }
        Node::Scalar(scalar) => {
            write_tagged(out, name, &[], Some(&scalar.to_text()), &[], depth, options);
        }
        Node::Mapping(mapping) => {
            let (attributes, text, children) = split_projected(mapping);
            write_tagged(out, name, &attributes, text.as_deref(), &children, depth, options);
        }
        Node::Attributed(attributed) => {
            let attributes: Vec<(&str, String)> = attributed
                .attributes
                .iter()
                .map(|(n, v)| (n.as_str(), v.to_text()))
                .collect();
            let children: Vec<(&str, &Node)> = attributed.children.iter().collect();
            write_tagged(
                out,
                name,
                &attributes,
                attributed.text.as_deref(),
                &children,
                depth,
                options,
            );
        }
    }
}

/// Read the `@attribute` / `#text` projection back out of a plain mapping.
fn split_projected(mapping: &Mapping) -> (Vec<(&str, String)>, Option<String>, Vec<(&str, &Node)>) {
    let mut attributes = Vec::new();
    let mut text = None;
    let mut children = Vec::new();
    for (key, value) in mapping.iter() {
        if let (Some(attr), Node::Scalar(scalar)) = (key.strip_prefix('@'), value) {
            attributes.push((attr, scalar.to_text()));
            continue;
        }
        if key == "#text" {
            if let Node::Scalar(scalar) = value {
                text = Some(scalar.to_text());
                continue;
            }
        }
        children.push((key, value));
    }
    (attributes, text, children)
}

fn write_tagged(
    out: &mut String,
    name: &str,
    attributes: &[(&str, String)],
    text: Option<&str>,
    children: &[(&str, &Node)],
    depth: usize,
    options: &SerializeOptions,
) {
    push_indent(out, depth, options);
    out.push('<');
    out.push_str(name);
    for (attr_name, attr_value) in attributes {
        write!(out, " {attr_name}=\"{}\"", escape_attr(attr_value)).ok();
    }

    let text = text.filter(|t| !t.is_empty());
    match (text, children.is_empty()) {
        // Empty content collapses to a self-closing tag.
        (None, true) => out.push_str("/>\n"),
        (Some(t), true) => {
            writeln!(out, ">{}</{name}>", escape_text(t)).ok();
        }
        (text, _) => {
            out.push_str(">\n");
            if let Some(t) = text {
                push_indent(out, depth + 1, options);
                out.push_str(&escape_text(t));
                out.push('\n');
            }
            for (child_name, child) in children {
                write_element(out, child_name, child, depth + 1, options);
            }
            push_indent(out, depth, options);
            writeln!(out, "</{name}>").ok();
        }
    }
}

fn push_indent(out: &mut String, depth: usize, options: &SerializeOptions) {
    for _ in 0..depth * options.indent {
        out.push(' ');
    }
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

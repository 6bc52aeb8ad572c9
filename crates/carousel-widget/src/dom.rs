//! Minimal page tree standing in for the browser DOM.
//!
//! Supports what the carousel needs from a host document: compound
//! selectors (`tag`, `#id`, `.class`, and combinations such as
//! `button.carousel-button.prev`), class and inline-style mutation,
//! `data-*` attributes, inserting after an anchor, and HTML output.

use std::fmt::Write as _;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("unsupported or empty selector \"{0}\"")]
    InvalidSelector(String),
}

/// A compound selector: optional tag, optional id, and any number of classes,
/// all of which must match the same element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    /// Parses a compound selector.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::InvalidSelector`] for empty input, combinators
    /// (whitespace, `>`, `+`, `~`), attribute selectors, or pseudo-classes.
    pub fn parse(raw: &str) -> Result<Self, DomError> {
        let invalid = || DomError::InvalidSelector(raw.to_owned());
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '>' | '+' | '~' | '[' | ']' | ':' | ','))
        {
            return Err(invalid());
        }

        let mut selector = Self {
            tag: None,
            id: None,
            classes: Vec::new(),
        };
        let mut rest = trimmed;
        let tag_end = rest.find(['.', '#']).unwrap_or(rest.len());
        if tag_end > 0 {
            selector.tag = Some(rest[..tag_end].to_ascii_lowercase());
        }
        rest = &rest[tag_end..];

        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['.', '#']).unwrap_or(body.len());
            let name = &body[..end];
            if name.is_empty() {
                return Err(invalid());
            }
            if marker == '#' {
                if selector.id.is_some() {
                    return Err(invalid());
                }
                selector.id = Some(name.to_owned());
            } else {
                selector.classes.push(name.to_owned());
            }
            rest = &body[end..];
        }
        Ok(selector)
    }

    /// Selector matching elements that carry all of `classes`.
    #[must_use]
    pub fn classes(classes: &[&str]) -> Self {
        Self {
            tag: None,
            id: None,
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
        }
    }

    /// Creates an element this selector matches (`div` when no tag is given).
    #[must_use]
    pub fn to_element(&self) -> Element {
        let mut element = Element::new(self.tag.as_deref().unwrap_or("div"));
        element.id.clone_from(&self.id);
        for class in &self.classes {
            element.add_class(class);
        }
        element
    }

    fn matches(&self, element: &Element) -> bool {
        self.tag.as_deref().is_none_or(|t| element.tag == t)
            && self
                .id
                .as_deref()
                .is_none_or(|id| element.id.as_deref() == Some(id))
            && self.classes.iter().all(|c| element.has_class(c))
    }
}

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    style: Vec<(String, String)>,
    children: Vec<Node>,
}

const VOID_TAGS: &[&str] = &["img", "br", "meta", "link", "input", "hr"];
const RAW_TEXT_TAGS: &[&str] = &["style", "script"];

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            style: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_owned());
        self
    }

    /// Adds each whitespace-separated class in `classes`.
    #[must_use]
    pub fn with_class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_owned()));
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => value.clone_into(v),
            None => self.attributes.push((name.to_owned(), value.to_owned())),
        }
    }

    /// Reads a `data-*` attribute by its dataset name (`product-id` for
    /// `data-product-id`).
    pub fn data(&self, name: &str) -> Option<&str> {
        self.attr(&format!("data-{name}"))
    }

    /// Inline style property value, e.g. `style("opacity")`.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        match self.style.iter_mut().find(|(k, _)| k == property) {
            Some((_, v)) => value.clone_into(v),
            None => self.style.push((property.to_owned(), value.to_owned())),
        }
    }

    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    /// True if this element itself matches `selector`.
    pub fn matches(&self, selector: &Selector) -> bool {
        selector.matches(self)
    }

    /// First descendant (document order, excluding `self`) matching `selector`.
    pub fn query_selector(&self, selector: &Selector) -> Option<&Element> {
        for child in self.children() {
            if child.matches(selector) {
                return Some(child);
            }
            if let Some(found) = child.query_selector(selector) {
                return Some(found);
            }
        }
        None
    }

    pub fn query_selector_mut(&mut self, selector: &Selector) -> Option<&mut Element> {
        self.find_mut(&|el: &Element| el.matches(selector))
    }

    /// First descendant (document order, excluding `self`) satisfying
    /// `predicate`.
    pub fn find_mut(&mut self, predicate: &dyn Fn(&Element) -> bool) -> Option<&mut Element> {
        for node in &mut self.children {
            if let Node::Element(child) = node {
                if predicate(child) {
                    return Some(child);
                }
                if let Some(found) = child.find_mut(predicate) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// All descendants matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &Selector) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_matches(selector, &mut out);
        out
    }

    fn collect_matches<'a>(&'a self, selector: &Selector, out: &mut Vec<&'a Element>) {
        for child in self.children() {
            if child.matches(selector) {
                out.push(child);
            }
            child.collect_matches(selector, out);
        }
    }

    /// Inserts `new` as the next sibling of the first descendant matching
    /// `anchor`. Hands `new` back when no descendant matches.
    ///
    /// # Errors
    ///
    /// Returns `Err(new)` if there is no matching anchor.
    pub fn insert_after(&mut self, anchor: &Selector, new: Element) -> Result<(), Element> {
        let position = self
            .children
            .iter()
            .position(|n| matches!(n, Node::Element(el) if el.matches(anchor)));
        if let Some(index) = position {
            self.children.insert(index + 1, Node::Element(new));
            return Ok(());
        }

        let mut new = new;
        for node in &mut self.children {
            if let Node::Element(child) = node {
                match child.insert_after(anchor, new) {
                    Ok(()) => return Ok(()),
                    Err(returned) => new = returned,
                }
            }
        }
        Err(new)
    }

    /// Serializes this element and its subtree as HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(id) = &self.id {
            write_attr(out, "id", id);
        }
        if !self.classes.is_empty() {
            write_attr(out, "class", &self.classes.join(" "));
        }
        for (name, value) in &self.attributes {
            write_attr(out, name, value);
        }
        if !self.style.is_empty() {
            let inline = self
                .style
                .iter()
                .map(|(k, v)| format!("{k}: {v};"))
                .collect::<Vec<_>>()
                .join(" ");
            write_attr(out, "style", &inline);
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        let raw_text = RAW_TEXT_TAGS.contains(&self.tag.as_str());
        for node in &self.children {
            match node {
                Node::Text(text) if raw_text => out.push_str(text),
                Node::Text(text) => out.push_str(&escape_html(text)),
                Node::Element(el) => el.write_html(out),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {name}=\"{}\"", escape_html(value));
}

/// Escapes text for use in HTML content or a double-quoted attribute.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A host document: request path, viewport width, `<head>` and `<body>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    path: String,
    viewport_width: u32,
    head: Element,
    body: Element,
}

impl Page {
    pub fn new(path: &str, viewport_width: u32) -> Self {
        Self {
            path: path.to_owned(),
            viewport_width,
            head: Element::new("head"),
            body: Element::new("body"),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    pub fn head(&self) -> &Element {
        &self.head
    }

    pub fn head_mut(&mut self) -> &mut Element {
        &mut self.head
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    /// First element in the document (head, then body) matching `selector`.
    pub fn query_selector(&self, selector: &Selector) -> Option<&Element> {
        self.head
            .query_selector(selector)
            .or_else(|| self.body.query_selector(selector))
    }

    pub fn query_selector_mut(&mut self, selector: &Selector) -> Option<&mut Element> {
        if self.head.query_selector(selector).is_some() {
            return self.head.query_selector_mut(selector);
        }
        self.body.query_selector_mut(selector)
    }

    pub fn query_selector_all(&self, selector: &Selector) -> Vec<&Element> {
        let mut all = self.head.query_selector_all(selector);
        all.extend(self.body.query_selector_all(selector));
        all
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        let selector = Selector {
            tag: None,
            id: Some(id.to_owned()),
            classes: Vec::new(),
        };
        self.query_selector(&selector)
    }

    /// Inserts `new` right after the first body element matching `anchor`.
    ///
    /// # Errors
    ///
    /// Returns `Err(new)` if the anchor is not in the body.
    pub fn insert_after(&mut self, anchor: &Selector, new: Element) -> Result<(), Element> {
        self.body.insert_after(anchor, new)
    }

    pub fn to_html(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"tr\">{}{}</html>\n",
            self.head.to_html(),
            self.body.to_html()
        )
    }
}

#[cfg(test)]
#[path = "dom_test.rs"]
mod tests;

// File: crates/case-chart-core/src/element.rs
// Summary: Minimal SVG element tree with ordered attributes and XML serialization.

use indexmap::IndexMap;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Format a number the way a browser stringifies it (`310`, `0.5`, `1e21`).
pub fn fmt_num(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    let mut buf = ryu_js::Buffer::new();
    buf.format(v).to_string()
}

fn escape_xml(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// A drawing node: tag, attributes in insertion order, children and optional text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: IndexMap<String, String>,
    pub children: Vec<Element>,
    pub text: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), ..Self::default() }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.insert(name.to_string(), value.into());
        self
    }

    pub fn attr_num(self, name: &str, value: f64) -> Self {
        self.attr(name, fmt_num(value))
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn get_num(&self, name: &str) -> Option<f64> {
        self.get_attr(name).and_then(|v| v.parse().ok())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class").is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    /// This element and all nested elements, depth-first in document order.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a Element>) {
        out.push(self);
        for c in &self.children {
            c.collect(out);
        }
    }

    /// Nested elements (self included) with the given tag.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        self.descendants().into_iter().filter(|e| e.tag == tag).collect()
    }

    pub fn write_xml(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (k, v) in &self.attrs {
            out.push(' ');
            out.push_str(k);
            out.push_str("=\"");
            escape_xml(v, out);
            out.push('"');
        }
        if self.children.is_empty() && self.text.is_none() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(t) = &self.text {
            escape_xml(t, out);
        }
        for c in &self.children {
            c.write_xml(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }

    /// Serialize as a standalone `.svg` file (adds the SVG namespace to the root).
    pub fn to_standalone_svg(&self) -> String {
        let mut root = self.clone();
        if !root.attrs.contains_key("xmlns") {
            root.attrs.shift_insert(0, "xmlns".to_string(), SVG_NS.to_string());
        }
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        root.write_xml(&mut out);
        out.push('\n');
        out
    }
}

// File: crates/case-chart-core/src/document.rs
// Summary: Host page model: named containers holding rendered chart surfaces.

use indexmap::IndexMap;
use tracing::warn;

use crate::element::Element;
use crate::region::{Region, COMBINED_CONTAINER};

const PAGE_STYLE: &str = "\
body { font-family: sans-serif; margin: 24px; }
.line { fill: none; stroke-width: 2px; }
";

/// Containers addressed by id, in page order. Each holds zero or more `<svg>` surfaces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    containers: IndexMap<String, Vec<Element>>,
    background: Option<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_containers<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            containers: ids.into_iter().map(|id| (id.into(), Vec::new())).collect(),
            background: None,
        }
    }

    /// The page layout: one container per region followed by the combined container.
    pub fn chart_page() -> Self {
        let mut ids: Vec<String> = Region::ALL.iter().map(Region::container_id).collect();
        ids.push(COMBINED_CONTAINER.to_string());
        Self::with_containers(ids)
    }

    /// Page background used by `to_html`.
    pub fn set_background(&mut self, css_color: impl Into<String>) {
        self.background = Some(css_color.into());
    }

    pub fn container(&self, id: &str) -> Option<&[Element]> {
        self.containers.get(id).map(Vec::as_slice)
    }

    /// Append a surface to a container. A missing container swallows the surface.
    pub fn append_surface(&mut self, id: &str, surface: Element) -> bool {
        match self.containers.get_mut(id) {
            Some(children) => {
                children.push(surface);
                true
            }
            None => {
                warn!(container = id, "no such container; surface dropped");
                false
            }
        }
    }

    /// Remove the first `<svg>` in the container, if any.
    pub fn remove_surface(&mut self, id: &str) -> Option<Element> {
        let children = self.containers.get_mut(id)?;
        let pos = children.iter().position(|e| e.tag == "svg")?;
        Some(children.remove(pos))
    }

    /// First surface of a container.
    pub fn surface(&self, id: &str) -> Option<&Element> {
        self.containers.get(id)?.iter().find(|e| e.tag == "svg")
    }

    /// Every `(container id, surface)` pair on the page.
    pub fn surfaces(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.containers
            .iter()
            .flat_map(|(id, children)| children.iter().map(move |e| (id.as_str(), e)))
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces().filter(|(_, e)| e.tag == "svg").count()
    }

    /// Standalone HTML page with every container and its surfaces inlined.
    pub fn to_html(&self, title: &str) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let title_el = Element::new("title").text(title);
        title_el.write_xml(&mut out);
        out.push_str("\n<style>\n");
        out.push_str(PAGE_STYLE);
        if let Some(bg) = &self.background {
            out.push_str(&format!("body {{ background: {bg}; }}\n"));
        }
        out.push_str("</style>\n</head>\n<body>\n");
        for (id, children) in &self.containers {
            let mut div = Element::new("div").attr("id", id.as_str());
            for c in children {
                div.push(c.clone());
            }
            if div.children.is_empty() {
                // Keep an explicit close tag; `<div/>` is not valid HTML.
                div.text = Some(String::new());
            }
            div.write_xml(&mut out);
            out.push('\n');
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

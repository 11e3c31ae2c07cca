use crate::ast::{Component, non_blank};
use crate::provider::Provider;
use crate::renderer::{Graph, Value};

/// Ambient values the assembler hands to every sketcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stamp<'a> {
    pub id: &'a str,
    pub bottom_top: bool,
    pub provider: Option<Provider>,
}

/// Turns one component into a node of `graph`.
pub trait Sketcher {
    fn sketch(&self, graph: &mut Graph, component: &Component, stamp: &Stamp<'_>);
}

/// A filled node with a fixed shape and default colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub shape: &'static str,
    pub fill: &'static str,
    pub font: &'static str,
    pub rounded: bool,
}

impl Shape {
    pub const fn new(shape: &'static str, fill: &'static str, font: &'static str) -> Self {
        Self {
            shape,
            fill,
            font,
            rounded: false,
        }
    }

    pub const fn rounded(self) -> Self {
        Self {
            rounded: true,
            ..self
        }
    }
}

impl Sketcher for Shape {
    fn sketch(&self, graph: &mut Graph, component: &Component, stamp: &Stamp<'_>) {
        let annotation = match (non_blank(&component.impl_), stamp.provider) {
            (Some(explicit), _) => Some(explicit),
            (None, Some(provider)) => provider.implementation(&component.kind),
            (None, None) => None,
        };

        let mut style = vec!["filled"];
        if self.rounded || component.rounded {
            style.push("rounded");
        }

        let node = graph.node(stamp.id);
        node.attr("shape", self.shape)
            .attr("style", style.join(","))
            .attr("fillcolor", non_blank(&component.fill_color).unwrap_or(self.fill))
            .attr("fontcolor", non_blank(&component.font_color).unwrap_or(self.font))
            .attr("label", html_label(title(component, stamp), annotation, stamp.bottom_top));

        if let Some(provider) = stamp.provider {
            node.attr("color", provider.accent());
        }
    }
}

/// Node for kinds drawn as plain text. It has no styling of its own; only
/// the component's explicit colors and `impl` annotation are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placeholder;

impl Sketcher for Placeholder {
    fn sketch(&self, graph: &mut Graph, component: &Component, stamp: &Stamp<'_>) {
        let annotation = non_blank(&component.impl_);
        let node = graph.node(stamp.id);
        node.attr("shape", "plaintext").attr(
            "label",
            html_label(title(component, stamp), annotation, stamp.bottom_top),
        );
        if let Some(fill) = non_blank(&component.fill_color) {
            node.attr("style", "filled").attr("fillcolor", fill);
        }
        if let Some(font) = non_blank(&component.font_color) {
            node.attr("fontcolor", font);
        }
    }
}

fn title<'a>(component: &'a Component, stamp: &Stamp<'a>) -> &'a str {
    non_blank(&component.label).unwrap_or(stamp.id)
}

// In bottom-top layouts the annotation sits above the label.
fn html_label(title: &str, annotation: Option<&str>, bottom_top: bool) -> Value {
    let title = escape(title);
    let Some(annotation) = annotation else {
        return Value::html(title);
    };
    let annotation = format!(r#"<font point-size="7">{}</font>"#, escape(annotation));
    if bottom_top {
        Value::html(format!("{annotation}<br/>{title}"))
    } else {
        Value::html(format!("{title}<br/>{annotation}"))
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use crate::error::{Error, Result};

const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// An attribute value. HTML-like values are written between `<` and `>`
/// instead of double quotes.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Html(String),
}

impl Value {
    pub fn html(s: impl Into<String>) -> Self {
        Value::Html(s.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Value::Text(s) | Value::Html(s) => s,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

type Attributes = BTreeMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: String,
    attrs: Attributes,
}

impl Node {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            attrs: Attributes::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attr(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.attrs.insert(key.to_string(), value.into());
        self
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    from: String,
    to: String,
    attrs: Attributes,
}

impl Edge {
    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn attr(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.attrs.insert(key.to_string(), value.into());
        self
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(Value::as_str)
    }
}

/// A directed graph, or one of its clusters.
///
/// Nodes and clusters keep insertion order so that the same sequence of
/// calls always serializes to the same text.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    name: Option<String>,
    attrs: Attributes,
    node_defaults: Attributes,
    edge_defaults: Attributes,
    nodes: IndexMap<String, Node>,
    clusters: IndexMap<String, Graph>,
    edges: Vec<Edge>,
    same_ranks: IndexMap<String, Vec<String>>,
}

impl Graph {
    pub fn directed() -> Self {
        Self::with_name(None)
    }

    fn with_name(name: Option<String>) -> Self {
        Self {
            name,
            attrs: Attributes::new(),
            node_defaults: Attributes::new(),
            edge_defaults: Attributes::new(),
            nodes: IndexMap::new(),
            clusters: IndexMap::new(),
            edges: Vec::new(),
            same_ranks: IndexMap::new(),
        }
    }

    pub fn attr(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.attrs.insert(key.to_string(), value.into());
        self
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(Value::as_str)
    }

    pub fn node_default(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.node_defaults.insert(key.to_string(), value.into());
        self
    }

    pub fn edge_default(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.edge_defaults.insert(key.to_string(), value.into());
        self
    }

    /// Returns the node with this id in this graph, creating it if absent.
    pub fn node(&mut self, id: &str) -> &mut Node {
        self.nodes
            .entry(id.to_string())
            .or_insert_with(|| Node::new(id))
    }

    /// Looks a node up in this graph and, recursively, in its clusters.
    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.nodes
            .get(id)
            .or_else(|| self.clusters.values().find_map(|c| c.find_node(id)))
    }

    /// Returns the cluster with this name, creating it if absent.
    pub fn cluster(&mut self, name: &str) -> &mut Graph {
        self.clusters.entry(name.to_string()).or_insert_with(|| {
            let mut cluster = Graph::with_name(Some(format!("cluster_{name}")));
            cluster.attr("label", name);
            cluster
        })
    }

    pub fn find_cluster(&self, name: &str) -> Option<&Graph> {
        self.clusters.get(name)
    }

    pub fn clusters(&self) -> impl Iterator<Item = &Graph> {
        self.clusters.values()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Adds a directed edge. Both endpoints must already exist somewhere in
    /// this graph.
    pub fn edge(&mut self, from: &str, to: &str) -> Result<&mut Edge> {
        for id in [from, to] {
            if self.find_node(id).is_none() {
                return Err(Error::UnknownNode { id: id.to_string() });
            }
        }
        self.edges.push(Edge {
            from: from.to_string(),
            to: to.to_string(),
            attrs: Attributes::new(),
        });
        let last = self.edges.len() - 1;
        Ok(&mut self.edges[last])
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn add_to_same_rank(&mut self, group: &str, id: &str) {
        let members = self.same_ranks.entry(group.to_string()).or_default();
        if !members.iter().any(|m| m == id) {
            members.push(id.to_string());
        }
    }

    pub fn same_rank(&self, group: &str) -> Option<&[String]> {
        self.same_ranks.get(group).map(Vec::as_slice)
    }

    pub fn same_rank_count(&self) -> usize {
        self.same_ranks.len()
    }

    fn write_body(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "\t".repeat(depth);

        for (key, value) in &self.attrs {
            writeln!(f, "{pad}{key}={};", format_value(value))?;
        }
        if !self.node_defaults.is_empty() {
            writeln!(f, "{pad}node {};", format_attrs(&self.node_defaults))?;
        }
        if !self.edge_defaults.is_empty() {
            writeln!(f, "{pad}edge {};", format_attrs(&self.edge_defaults))?;
        }

        for cluster in self.clusters.values() {
            let name = cluster.name.as_deref().unwrap_or_default();
            writeln!(f, "{pad}subgraph {} {{", format_id(name))?;
            cluster.write_body(f, depth + 1)?;
            writeln!(f, "{pad}}}")?;
        }

        for node in self.nodes.values() {
            if node.attrs.is_empty() {
                writeln!(f, "{pad}{};", format_id(&node.id))?;
            } else {
                writeln!(f, "{pad}{} {};", format_id(&node.id), format_attrs(&node.attrs))?;
            }
        }

        for edge in &self.edges {
            write!(f, "{pad}{} -> {}", format_id(&edge.from), format_id(&edge.to))?;
            if !edge.attrs.is_empty() {
                write!(f, " {}", format_attrs(&edge.attrs))?;
            }
            writeln!(f, ";")?;
        }

        for members in self.same_ranks.values() {
            let ids: Vec<String> = members.iter().map(|m| format!("{};", format_id(m))).collect();
            writeln!(f, "{pad}{{rank=same; {}}}", ids.join(" "))?;
        }

        Ok(())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        self.write_body(f, 1)?;
        writeln!(f, "}}")
    }
}

fn format_attrs(attrs: &Attributes) -> String {
    let parts: Vec<String> = attrs
        .iter()
        .map(|(key, value)| format!("{key}={}", format_value(value)))
        .collect();
    format!("[{}]", parts.join(", "))
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Text(s) => quote(s),
        Value::Html(s) => format!("<{s}>"),
    }
}

fn format_id(id: &str) -> String {
    if is_plain_id(id) {
        id.to_string()
    } else {
        quote(id)
    }
}

fn quote(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{escaped}\"")
}

/// True when `s` can be written as a bare DOT identifier.
pub fn is_plain_id(s: &str) -> bool {
    if KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(s)) {
        return false;
    }
    alt((identifier, numeral)).parse(s).is_ok()
}

fn identifier<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)
}

fn numeral<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    (
        opt("-"),
        alt(((".", digit1).void(), (digit1, opt((".", digit0))).void())),
    )
        .take()
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_ids() {
        assert!(is_plain_id("gtw1"));
        assert!(is_plain_id("_x"));
        assert!(is_plain_id("42"));
        assert!(is_plain_id("-1.5"));
        assert!(is_plain_id(".5"));
        assert!(!is_plain_id("1abc"));
        assert!(!is_plain_id("my node"));
        assert!(!is_plain_id("a-b"));
        assert!(!is_plain_id(""));
        assert!(!is_plain_id("node"));
        assert!(!is_plain_id("Graph"));
    }

    #[test]
    fn node_is_get_or_create() {
        let mut g = Graph::directed();
        g.node("a").attr("shape", "box");
        g.node("a").attr("color", "red");
        assert_eq!(g.nodes().count(), 1);
        let a = g.find_node("a").unwrap();
        assert_eq!(a.value("shape"), Some("box"));
        assert_eq!(a.value("color"), Some("red"));
    }

    #[test]
    fn cluster_is_reused_by_name() {
        let mut g = Graph::directed();
        g.cluster("backend").node("a");
        g.cluster("backend").node("b");
        assert_eq!(g.clusters().count(), 1);
        let backend = g.find_cluster("backend").unwrap();
        assert_eq!(backend.nodes().count(), 2);
        assert_eq!(backend.value("label"), Some("backend"));
    }

    #[test]
    fn find_node_searches_clusters() {
        let mut g = Graph::directed();
        g.cluster("c").node("inner");
        assert!(g.find_node("inner").is_some());
        assert!(g.find_node("missing").is_none());
    }

    #[test]
    fn edge_requires_both_endpoints() {
        let mut g = Graph::directed();
        g.node("a");
        let err = g.edge("a", "b").unwrap_err();
        assert!(matches!(err, Error::UnknownNode { ref id } if id == "b"));
        let err = g.edge("z", "a").unwrap_err();
        assert!(matches!(err, Error::UnknownNode { ref id } if id == "z"));
        assert!(g.edges().is_empty());
    }

    #[test]
    fn same_rank_ignores_repeated_members() {
        let mut g = Graph::directed();
        g.add_to_same_rank("top", "a");
        g.add_to_same_rank("top", "a");
        g.add_to_same_rank("top", "b");
        assert_eq!(g.same_rank("top").unwrap(), ["a", "b"]);
    }

    #[test]
    fn serializes_in_stable_order() {
        let mut g = Graph::directed();
        g.attr("rankdir", "TB");
        g.node_default("fontname", "Fira Mono");
        g.cluster("my group").node("c").attr("shape", "note");
        g.node("a").attr("shape", "box").attr("label", Value::html("<b>A</b>"));
        g.node("b node");
        g.edge("a", "b node").unwrap().attr("label", "say \"hi\"");
        g.add_to_same_rank("r", "a");
        g.add_to_same_rank("r", "c");

        let expected = "\
digraph {
\trankdir=\"TB\";
\tnode [fontname=\"Fira Mono\"];
\tsubgraph \"cluster_my group\" {
\t\tlabel=\"my group\";
\t\tc [shape=\"note\"];
\t}
\ta [label=<<b>A</b>>, shape=\"box\"];
\t\"b node\";
\ta -> \"b node\" [label=\"say \\\"hi\\\"\"];
\t{rank=same; a; c;}
}
";
        assert_eq!(g.to_string(), expected);
    }

    #[test]
    fn trailing_backslash_keeps_strings_terminated() {
        let mut g = Graph::directed();
        g.attr("label", "a\\");
        g.node("x\\").attr("label", Value::html("C:\\"));
        g.node("y");
        g.edge("x\\", "y").unwrap().attr("label", "C:\\");

        let expected = "\
digraph {
\tlabel=\"a\\\\\";
\t\"x\\\\\" [label=<C:\\>];
\ty;
\t\"x\\\\\" -> y [label=\"C:\\\\\"];
}
";
        assert_eq!(g.to_string(), expected);
    }
}

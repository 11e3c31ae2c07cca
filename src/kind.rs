use std::collections::HashMap;

use crate::sketcher::{Placeholder, Shape, Sketcher};

pub const HTML: &str = "html";
pub const CLIENT: &str = "cli";
pub const GATEWAY: &str = "gtw";
pub const SERVICE: &str = "ser";
pub const QUEUE: &str = "que";
pub const PUB_SUB: &str = "msg";
pub const OBJECT_STORE: &str = "ost";
pub const RDB: &str = "rdb";
pub const DOCUMENT_STORE: &str = "doc";
pub const FUNCTION: &str = "fun";
pub const LOAD_BALANCER: &str = "lba";
pub const CDN: &str = "cdn";
pub const DNS: &str = "dns";
pub const FIREWALL: &str = "waf";
pub const ORCHESTRATOR: &str = "kub";
pub const BLOCK_STORE: &str = "bst";
pub const CACHE: &str = "mem";
pub const FILE_STORE: &str = "fst";

/// Maps a kind code to the sketcher that draws it.
pub struct Registry {
    sketchers: HashMap<String, Box<dyn Sketcher>>,
}

impl Registry {
    pub fn empty() -> Self {
        Self {
            sketchers: HashMap::new(),
        }
    }

    /// Adds a kind, replacing any sketcher already registered for it.
    pub fn register(&mut self, kind: &str, sketcher: impl Sketcher + 'static) -> &mut Self {
        self.sketchers.insert(kind.to_string(), Box::new(sketcher));
        self
    }

    pub fn lookup(&self, kind: &str) -> Option<&dyn Sketcher> {
        self.sketchers.get(kind).map(|s| s.as_ref())
    }

    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.sketchers.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(HTML, Shape::new("tab", "#e8eaf6", "#1a237e"))
            .register(CLIENT, Placeholder)
            .register(GATEWAY, Shape::new("doublecircle", "#ffb74d", "#3e2723"))
            .register(SERVICE, Shape::new("box", "#90caf9", "#0d47a1").rounded())
            .register(QUEUE, Shape::new("cds", "#ffe082", "#4e342e"))
            .register(PUB_SUB, Shape::new("hexagon", "#ffcc80", "#4e342e"))
            .register(OBJECT_STORE, Shape::new("folder", "#a5d6a7", "#1b5e20"))
            .register(RDB, Shape::new("cylinder", "#80cbc4", "#004d40"))
            .register(DOCUMENT_STORE, Shape::new("note", "#c5e1a5", "#33691e"))
            .register(FUNCTION, Shape::new("signature", "#ce93d8", "#4a148c"))
            .register(LOAD_BALANCER, Shape::new("Mdiamond", "#b0bec5", "#263238"))
            .register(CDN, Shape::new("doubleoctagon", "#b39ddb", "#311b92"))
            .register(DNS, Shape::new("circle", "#bcaaa4", "#3e2723"))
            .register(FIREWALL, Shape::new("octagon", "#ef9a9a", "#b71c1c"))
            .register(ORCHESTRATOR, Shape::new("component", "#81d4fa", "#01579b"))
            .register(BLOCK_STORE, Shape::new("box3d", "#cfd8dc", "#37474f"))
            .register(CACHE, Shape::new("Msquare", "#f48fb1", "#880e4f"))
            .register(FILE_STORE, Shape::new("tab", "#dce775", "#827717"));
        registry
    }
}

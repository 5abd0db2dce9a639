use ego_tree::iter::Edge;
use scraper::node::Node;
use scraper::Html;

/// Elements whose text content is never rendered.
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Structural region a selector can be scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Footer,
    Nav,
    Body,
}

impl Region {
    pub fn tag(self) -> &'static str {
        match self {
            Region::Footer => "footer",
            Region::Nav => "nav",
            Region::Body => "body",
        }
    }
}

/// Whether text must sit inside an `<a>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linkage {
    Any,
    /// Text with an `<a>` ancestor.
    Linked,
    /// Text with no `<a>` ancestor.
    Unlinked,
}

/// A structural predicate over text leaves: an optional region scope plus a
/// linkage constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSelector {
    pub region: Option<Region>,
    pub linkage: Linkage,
}

impl TextSelector {
    pub const fn new(region: Option<Region>, linkage: Linkage) -> Self {
        Self { region, linkage }
    }

    /// The equivalent CSS selector, e.g. `footer :not(a)`.
    pub fn css(&self) -> String {
        let link = match self.linkage {
            Linkage::Any => None,
            Linkage::Linked => Some("a"),
            Linkage::Unlinked => Some(":not(a)"),
        };
        match (self.region, link) {
            (Some(r), Some(l)) => format!("{} {}", r.tag(), l),
            (Some(r), None) => r.tag().to_owned(),
            (None, Some(l)) => l.to_owned(),
            (None, None) => "*".to_owned(),
        }
    }
}

/// Ancestor counts for the node currently being visited.
#[derive(Default)]
struct Ancestry {
    anchor: usize,
    footer: usize,
    nav: usize,
    body: usize,
    hidden: usize,
}

impl Ancestry {
    fn enter(&mut self, tag: &str) {
        self.adjust(tag, true);
    }

    fn leave(&mut self, tag: &str) {
        self.adjust(tag, false);
    }

    fn adjust(&mut self, tag: &str, open: bool) {
        let counter = match tag {
            "a" => &mut self.anchor,
            "footer" => &mut self.footer,
            "nav" => &mut self.nav,
            "body" => &mut self.body,
            t if HIDDEN_TAGS.contains(&t) => &mut self.hidden,
            _ => return,
        };
        if open {
            *counter += 1;
        } else {
            *counter = counter.saturating_sub(1);
        }
    }

    fn in_region(&self, region: Region) -> bool {
        match region {
            Region::Footer => self.footer > 0,
            Region::Nav => self.nav > 0,
            Region::Body => self.body > 0,
        }
    }

    fn matches(&self, selector: Option<&TextSelector>) -> bool {
        let Some(sel) = selector else {
            return true;
        };
        if let Some(region) = sel.region {
            if !self.in_region(region) {
                return false;
            }
        }
        match sel.linkage {
            Linkage::Any => true,
            Linkage::Linked => self.anchor > 0,
            Linkage::Unlinked => self.anchor == 0,
        }
    }
}

/// Collapse every whitespace run to one space and strip both ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Visible text leaves matching `selector`, in document order.
///
/// A visible leaf is a text node outside `script`, `style`, `noscript` and
/// `template`. Each leaf is whitespace-collapsed; blank leaves are dropped.
/// `None` selects every visible leaf.
pub fn text_leaves(doc: &Html, selector: Option<&TextSelector>) -> Vec<String> {
    let mut ancestry = Ancestry::default();
    let mut leaves = Vec::new();

    for edge in doc.tree.root().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(el) => ancestry.enter(el.name()),
                Node::Text(text) => {
                    if ancestry.hidden > 0 || !ancestry.matches(selector) {
                        continue;
                    }
                    let collapsed = collapse_whitespace(&text.text);
                    if !collapsed.is_empty() {
                        leaves.push(collapsed);
                    }
                }
                // Comments, doctypes and processing instructions carry no text.
                _ => {}
            },
            Edge::Close(node) => {
                if let Node::Element(el) = node.value() {
                    ancestry.leave(el.name());
                }
            }
        }
    }
    leaves
}

/// Text of every leaf matching `selector`, joined by single spaces.
///
/// A selector that matches nothing yields an empty string.
pub fn extract_text(doc: &Html, selector: Option<&TextSelector>) -> String {
    text_leaves(doc, selector).join(" ")
}

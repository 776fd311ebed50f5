//! Default content tree

use serde::Serialize;

use super::{ContentFactory, ContentKind, TextStyle};
use crate::model::{PlatformSet, SymbolId};

/// A node of the rendered content tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "kebab-case")]
pub enum ContentNode {
    Text {
        text: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        styles: Vec<TextStyle>,
        platforms: PlatformSet,
    },
    Link {
        text: String,
        target: SymbolId,
        platforms: PlatformSet,
    },
    Group {
        /// Set for nodes scoped to a declaration
        #[serde(skip_serializing_if = "Option::is_none")]
        kind: Option<ContentKind>,
        #[serde(skip_serializing_if = "Option::is_none")]
        owner: Option<SymbolId>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        styles: Vec<TextStyle>,
        platforms: PlatformSet,
        children: Vec<ContentNode>,
    },
}

impl ContentNode {
    pub fn platforms(&self) -> &PlatformSet {
        match self {
            ContentNode::Text { platforms, .. }
            | ContentNode::Link { platforms, .. }
            | ContentNode::Group { platforms, .. } => platforms,
        }
    }

    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Group { children, .. } => children.as_slice(),
            ContentNode::Text { .. } | ContentNode::Link { .. } => &[],
        }
    }

    pub fn styles(&self) -> &[TextStyle] {
        match self {
            ContentNode::Text { styles, .. } | ContentNode::Group { styles, .. } => {
                styles.as_slice()
            }
            ContentNode::Link { .. } => &[],
        }
    }

    pub fn kind(&self) -> Option<ContentKind> {
        match self {
            ContentNode::Group { kind, .. } => *kind,
            ContentNode::Text { .. } | ContentNode::Link { .. } => None,
        }
    }

    /// Concatenated text of every leaf, in order
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        match self {
            ContentNode::Text { text, .. } | ContentNode::Link { text, .. } => out.push_str(text),
            ContentNode::Group { children, .. } => {
                for child in children {
                    child.write_text(out);
                }
            }
        }
    }

    /// Outermost signature nodes in this tree, in document order
    pub fn symbols(&self) -> Vec<&ContentNode> {
        let mut found = Vec::new();
        self.collect_symbols(&mut found);
        found
    }

    fn collect_symbols<'a>(&'a self, found: &mut Vec<&'a ContentNode>) {
        if self.kind() == Some(ContentKind::Symbol) {
            found.push(self);
            return;
        }
        for child in self.children() {
            child.collect_symbols(found);
        }
    }

    /// Every link target in this tree, in document order
    pub fn links(&self) -> Vec<&SymbolId> {
        let mut found = Vec::new();
        self.collect_links(&mut found);
        found
    }

    fn collect_links<'a>(&'a self, found: &mut Vec<&'a SymbolId>) {
        match self {
            ContentNode::Link { target, .. } => found.push(target),
            ContentNode::Text { .. } => {}
            ContentNode::Group { children, .. } => {
                for child in children {
                    child.collect_links(found);
                }
            }
        }
    }
}

/// Factory building [`ContentNode`] trees
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTree;

impl ContentFactory for ContentTree {
    type Node = ContentNode;

    fn text(&self, text: &str, styles: &[TextStyle], platforms: &PlatformSet) -> ContentNode {
        ContentNode::Text {
            text: text.to_string(),
            styles: styles.to_vec(),
            platforms: platforms.clone(),
        }
    }

    fn link(&self, text: &str, target: &SymbolId, platforms: &PlatformSet) -> ContentNode {
        ContentNode::Link {
            text: text.to_string(),
            target: target.clone(),
            platforms: platforms.clone(),
        }
    }

    fn group(
        &self,
        children: Vec<ContentNode>,
        styles: &[TextStyle],
        platforms: &PlatformSet,
    ) -> ContentNode {
        ContentNode::Group {
            kind: None,
            owner: None,
            styles: styles.to_vec(),
            platforms: platforms.clone(),
            children,
        }
    }

    fn content_for(
        &self,
        owner: &SymbolId,
        kind: ContentKind,
        styles: &[TextStyle],
        platforms: &PlatformSet,
        children: Vec<ContentNode>,
    ) -> ContentNode {
        ContentNode::Group {
            kind: Some(kind),
            owner: Some(owner.clone()),
            styles: styles.to_vec(),
            platforms: platforms.clone(),
            children,
        }
    }
}

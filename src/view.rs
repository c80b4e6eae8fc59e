// src/view.rs
use std::fmt;

/// A piece of rendered content. The terminal layer decides how each kind looks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Image { src: String, alt: String },
    Heading(String),
    Text(String),
    Tags(Vec<String>),
    Caption(String),
    ListItem(String),
}

impl fmt::Display for ViewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewNode::Image { src, alt } if src.is_empty() => write!(f, "[{}]", alt),
            ViewNode::Image { src, alt } => write!(f, "[{}] {}", alt, src),
            ViewNode::Heading(text) | ViewNode::Text(text) | ViewNode::Caption(text) => {
                write!(f, "{}", text)
            }
            ViewNode::Tags(tags) => {
                let joined: Vec<String> = tags.iter().map(|t| format!("[{}]", t)).collect();
                write!(f, "{}", joined.join(" "))
            }
            ViewNode::ListItem(text) => write!(f, "- {}", text),
        }
    }
}

/// Insertion point owned by exactly one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<T> {
    children: Vec<T>,
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self { children: Vec::new() }
    }
}

impl<T> Container<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, child: T) {
        self.children.push(child);
    }

    /// Inserts at `index`, clamped to the end.
    pub fn insert(&mut self, index: usize, child: T) {
        let index = index.min(self.children.len());
        self.children.insert(index, child);
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.children.len() { Some(self.children.remove(index)) } else { None }
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn children(&self) -> &[T] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [T] {
        &mut self.children
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.children.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.children.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.children.iter()
    }
}

impl Container<ViewNode> {
    /// All `ListItem` texts in order.
    pub fn list_items(&self) -> Vec<&str> {
        self.children
            .iter()
            .filter_map(|node| match node {
                ViewNode::ListItem(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn heading(&self) -> Option<&str> {
        self.children.iter().find_map(|node| match node {
            ViewNode::Heading(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn tags(&self) -> &[String] {
        self.children
            .iter()
            .find_map(|node| match node {
                ViewNode::Tags(tags) => Some(tags.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }
}

impl fmt::Display for Container<ViewNode> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.children {
            writeln!(f, "{}", node)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_clear() {
        let mut container: Container<ViewNode> = Container::new();
        container.append(ViewNode::Text("b".to_string()));
        container.insert(0, ViewNode::Heading("a".to_string()));
        container.insert(99, ViewNode::Caption("c".to_string()));

        assert_eq!(container.len(), 3);
        assert_eq!(container.heading(), Some("a"));
        assert_eq!(container.remove(1), Some(ViewNode::Text("b".to_string())));
        assert_eq!(container.remove(5), None);

        container.clear();
        assert!(container.is_empty());
    }

    #[test]
    fn test_display_renders_one_line_per_node() {
        let mut container = Container::new();
        container.append(ViewNode::Image { src: String::new(), alt: "Show cover".to_string() });
        container.append(ViewNode::Tags(vec!["News".to_string(), "Unknown".to_string()]));
        container.append(ViewNode::ListItem("Season 1: Pilot".to_string()));

        assert_eq!(container.to_string(), "[Show cover]\n[News] [Unknown]\n- Season 1: Pilot\n");
    }
}

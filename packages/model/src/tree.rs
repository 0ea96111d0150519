//! Tree view over the flat component list.
//!
//! Built once per render (or per structural query) so nested lookups are
//! map reads rather than repeated scans of the whole list.

use crate::component::Component;
use std::collections::{HashMap, HashSet};

pub struct TreeView<'a> {
    by_id: HashMap<&'a str, &'a Component>,
    roots: Vec<&'a Component>,
    children: HashMap<&'a str, Vec<&'a Component>>,
}

impl<'a> TreeView<'a> {
    /// Group components by parent, each group stable-sorted by `order`
    pub fn build(components: &'a [Component]) -> Self {
        let mut by_id = HashMap::with_capacity(components.len());
        let mut roots = Vec::new();
        let mut children: HashMap<&'a str, Vec<&'a Component>> = HashMap::new();

        for component in components {
            by_id.insert(component.id.as_str(), component);
            match &component.parent_id {
                Some(parent) => children.entry(parent.as_str()).or_default().push(component),
                None => roots.push(component),
            }
        }

        roots.sort_by_key(|c| c.order);
        for siblings in children.values_mut() {
            siblings.sort_by_key(|c| c.order);
        }

        Self {
            by_id,
            roots,
            children,
        }
    }

    pub fn roots(&self) -> &[&'a Component] {
        &self.roots
    }

    pub fn children(&self, id: &str) -> &[&'a Component] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Siblings under `parent` (`None` = root level)
    pub fn siblings(&self, parent: Option<&str>) -> &[&'a Component] {
        match parent {
            Some(id) => self.children(id),
            None => self.roots(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&'a Component> {
        self.by_id.get(id).copied()
    }

    /// All transitive children of `id` in depth-first order
    pub fn descendants(&self, id: &str) -> Vec<&'a Component> {
        let mut result = Vec::new();
        let mut seen: HashSet<&str> = HashSet::from([id]);
        let mut stack: Vec<&'a Component> = self.children(id).iter().rev().copied().collect();

        while let Some(component) = stack.pop() {
            // Unrepaired documents may contain cycles
            if !seen.insert(component.id.as_str()) {
                continue;
            }
            result.push(component);
            stack.extend(self.children(component.id.as_str()).iter().rev().copied());
        }

        result
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentId;
    use crate::properties::{ContainerProperties, TextProperties};
    use crate::schema::PropertySchema;

    fn text(id: &str, parent: Option<&str>, order: i64) -> Component {
        Component::new(ComponentId::from(id), TextProperties::default_kind())
            .with_parent(parent.map(ComponentId::from))
            .with_order(order)
    }

    fn container(id: &str, parent: Option<&str>, order: i64) -> Component {
        Component::new(ComponentId::from(id), ContainerProperties::default_kind())
            .with_parent(parent.map(ComponentId::from))
            .with_order(order)
    }

    fn ids(components: &[&Component]) -> Vec<String> {
        components.iter().map(|c| c.id.to_string()).collect()
    }

    #[test]
    fn test_roots_sorted_by_order() {
        let components = vec![text("a", None, 2), text("b", None, 0), text("c", None, 1)];
        let tree = TreeView::build(&components);

        assert_eq!(ids(tree.roots()), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_order_ties_keep_list_position() {
        let components = vec![text("a", None, 1), text("b", None, 0), text("c", None, 1)];
        let tree = TreeView::build(&components);

        assert_eq!(ids(tree.roots()), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_children_and_descendants() {
        let components = vec![
            container("outer", None, 0),
            container("inner", Some("outer"), 1),
            text("t1", Some("outer"), 0),
            text("t2", Some("inner"), 0),
            text("loose", None, 1),
        ];
        let tree = TreeView::build(&components);

        assert_eq!(ids(tree.children("outer")), vec!["t1", "inner"]);
        assert_eq!(ids(&tree.descendants("outer")), vec!["t1", "inner", "t2"]);
        assert!(tree.children("t1").is_empty());
        assert!(tree.descendants("missing").is_empty());
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_descendants_stop_at_cycles() {
        let components = vec![container("a", Some("b"), 0), container("b", Some("a"), 0)];
        let tree = TreeView::build(&components);

        assert!(tree.roots().is_empty());
        assert_eq!(ids(&tree.descendants("a")), vec!["b"]);
        assert_eq!(ids(&tree.descendants("b")), vec!["a"]);
    }
}

mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Visit every element of the tree, parents before children.
pub fn walk<'a>(root: &'a Element, visit: &mut impl FnMut(&'a Element, Option<&'a Element>)) {
    fn go<'a>(
        element: &'a Element,
        parent: Option<&'a Element>,
        visit: &mut impl FnMut(&'a Element, Option<&'a Element>),
    ) {
        visit(element, parent);
        for child in element.child_elements() {
            go(child, Some(element), visit);
        }
    }
    go(root, None, visit);
}

//! TLV tree nodes
//!
//! A [`Tlv`] is a handle onto shared node storage. Cloning a handle
//! yields a second handle onto the same storage, so changes made through
//! one are visible through the other. Use [`Tlv::identical`] to test for
//! shared storage and `==` to compare content.
//!
//! Children are owned by their parent's child list. The parent link is a
//! [`Weak`] reference: it never keeps the parent alive, and once the
//! parent storage is gone [`Tlv::parent`] returns `None`.
//!
//! A node holds either a leaf value or children, never both. Setting one
//! clears the other.

use crate::tag::Tag;
use crate::value::{IntoValue, Value, read_u64};
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

#[derive(Default)]
pub(crate) struct NodeData {
    pub(crate) tag: Tag,
    pub(crate) parent: Weak<RefCell<NodeData>>,
    pub(crate) value: Value,
    pub(crate) children: Vec<Tlv>,
}

/// Handle onto one tag-length-value element, or onto an untagged grouping
/// node whose children are a sibling series
#[derive(Clone, Default)]
pub struct Tlv {
    pub(crate) data: Rc<RefCell<NodeData>>,
}

impl Tlv {
    /// Create an untagged, empty node
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(tag: impl Into<Tag>) -> Self {
        let node = Self::new();
        node.data.borrow_mut().tag = tag.into();
        node
    }

    /// Create a leaf node
    ///
    /// # Example
    /// ```
    /// use tlv_ber::Tlv;
    ///
    /// let node = Tlv::with_value(0x8A, "test");
    /// assert_eq!(node.dump(), [0x8A, 0x04, b't', b'e', b's', b't']);
    /// ```
    pub fn with_value(tag: impl Into<Tag>, value: impl IntoValue) -> Self {
        let node = Self::with_tag(tag);
        node.data.borrow_mut().value = value.into_value();
        node
    }

    /// Create a node holding `child` as its only child
    pub fn with_child(tag: impl Into<Tag>, child: &Tlv) -> Self {
        let node = Self::with_tag(tag);
        node.push_back(child);
        node
    }

    // Capacity

    /// True if the node has no tag
    pub fn is_empty(&self) -> bool {
        self.data.borrow().tag.is_empty()
    }

    pub fn has_tag(&self) -> bool {
        !self.is_empty()
    }

    pub fn has_value(&self) -> bool {
        !self.data.borrow().value.is_empty()
    }

    pub fn value_size(&self) -> usize {
        self.data.borrow().value.len()
    }

    pub fn has_parent(&self) -> bool {
        self.data.borrow().parent.strong_count() > 0
    }

    pub fn has_children(&self) -> bool {
        !self.data.borrow().children.is_empty()
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.data.borrow().children.len()
    }

    // Element access

    pub fn tag(&self) -> Tag {
        self.data.borrow().tag
    }

    /// Borrow the leaf value
    ///
    /// The borrow must be released before the node is mutated.
    pub fn value(&self) -> Ref<'_, [u8]> {
        Ref::map(self.data.borrow(), |d| d.value.as_slice())
    }

    /// Handles onto the direct children, in order
    pub fn children(&self) -> Vec<Tlv> {
        self.data.borrow().children.clone()
    }

    pub fn front(&self) -> Option<Tlv> {
        self.data.borrow().children.first().cloned()
    }

    pub fn back(&self) -> Option<Tlv> {
        self.data.borrow().children.last().cloned()
    }

    pub fn parent(&self) -> Option<Tlv> {
        self.data.borrow().parent.upgrade().map(|data| Tlv { data })
    }

    /// Value as a string, invalid UTF-8 is replaced
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.data.borrow().value).into_owned()
    }

    /// First value byte as a boolean, `false` for an empty value
    pub fn as_bool(&self) -> bool {
        self.as_u8() != 0
    }

    /// First value byte, `0` for an empty value
    pub fn as_u8(&self) -> u8 {
        self.data.borrow().value.first().copied().unwrap_or(0)
    }

    pub fn as_i8(&self) -> i8 {
        self.as_u8() as i8
    }

    /// First (up to) 8 value bytes read big-endian
    pub fn as_u64(&self) -> u64 {
        read_u64(&self.data.borrow().value)
    }

    pub fn as_u32(&self) -> u32 {
        self.as_u64() as u32
    }

    pub fn as_u16(&self) -> u16 {
        self.as_u64() as u16
    }

    pub fn as_i64(&self) -> i64 {
        self.as_u64() as i64
    }

    pub fn as_i32(&self) -> i32 {
        self.as_u64() as i32
    }

    pub fn as_i16(&self) -> i16 {
        self.as_u64() as i16
    }

    // Modifiers

    pub fn set_tag(&self, tag: impl Into<Tag>) -> &Self {
        self.data.borrow_mut().tag = tag.into();
        self
    }

    /// Replace the leaf value, dropping all children
    pub fn set_value(&self, value: impl IntoValue) -> &Self {
        let removed = {
            let mut data = self.data.borrow_mut();
            data.value = value.into_value();
            std::mem::take(&mut data.children)
        };
        for child in &removed {
            child.unlink_from(self);
        }
        self
    }

    /// Attach this node as the last child of `parent`
    ///
    /// Clears `parent`'s value. Nothing is appended if this node already
    /// is one of `parent`'s children.
    pub fn set_parent(&self, parent: &Tlv) -> &Self {
        let already_child = parent
            .data
            .borrow()
            .children
            .iter()
            .any(|c| c.identical(self));
        if already_child {
            self.data.borrow_mut().parent = Rc::downgrade(&parent.data);
            parent.data.borrow_mut().value.clear();
        } else {
            parent.push_back(self);
        }
        self
    }

    pub fn push_front(&self, node: &Tlv) -> &Self {
        self.insert_child(0, node)
    }

    pub fn push_back(&self, node: &Tlv) -> &Self {
        let at = self.len();
        self.insert_child(at, node)
    }

    fn insert_child(&self, at: usize, node: &Tlv) -> &Self {
        if node.reaches(self) {
            log::warn!(
                "Refusing to insert node {} below itself or its descendant {}",
                node.tag(),
                self.tag()
            );
            return self;
        }
        {
            let mut data = self.data.borrow_mut();
            data.value.clear();
            data.children.insert(at, node.clone());
        }
        node.data.borrow_mut().parent = Rc::downgrade(&self.data);
        self
    }

    /// True if `target` is `self` or is held anywhere in the subtree below it
    ///
    /// Walks child lists rather than parent links: an aliased node is owned
    /// by every parent listing it, but only links back to the latest one.
    fn reaches(&self, target: &Tlv) -> bool {
        let mut stack = vec![self.clone()];
        while let Some(n) = stack.pop() {
            if n.identical(target) {
                return true;
            }
            stack.extend(n.data.borrow().children.iter().cloned());
        }
        false
    }

    /// Remove and return the first child
    pub fn pop_front(&self) -> Option<Tlv> {
        let removed = {
            let mut data = self.data.borrow_mut();
            if data.children.is_empty() {
                None
            } else {
                Some(data.children.remove(0))
            }
        };
        if let Some(child) = &removed {
            child.unlink_from(self);
        }
        removed
    }

    /// Remove and return the last child
    pub fn pop_back(&self) -> Option<Tlv> {
        let removed = self.data.borrow_mut().children.pop();
        if let Some(child) = &removed {
            child.unlink_from(self);
        }
        removed
    }

    /// Remove this node from its parent's children and clear the parent link
    pub fn detach(&self) -> &Self {
        if let Some(parent) = self.parent() {
            let mut parent_data = parent.data.borrow_mut();
            if let Some(pos) = parent_data.children.iter().position(|c| c.identical(self)) {
                parent_data.children.remove(pos);
            }
        }
        self.data.borrow_mut().parent = Weak::new();
        self
    }

    /// Remove all direct children carrying `tag`
    pub fn erase(&self, tag: impl Into<Tag>) -> &Self {
        let tag = tag.into();
        let removed: Vec<Tlv> = {
            let mut data = self.data.borrow_mut();
            let (removed, kept) = std::mem::take(&mut data.children)
                .into_iter()
                .partition(|c| c.tag() == tag);
            data.children = kept;
            removed
        };
        for child in &removed {
            child.unlink_from(self);
        }
        self
    }

    /// Clear the parent link if it still points at `parent`
    fn unlink_from(&self, parent: &Tlv) {
        let mut data = self.data.borrow_mut();
        if Weak::ptr_eq(&data.parent, &Rc::downgrade(&parent.data)) {
            data.parent = Weak::new();
        }
    }

    /// True if both handles refer to the same storage
    pub fn identical(&self, other: &Tlv) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Exchange the storage referenced by the two handles
    pub fn swap(&mut self, other: &mut Tlv) {
        std::mem::swap(&mut self.data, &mut other.data);
    }

    /// Point this handle at fresh, empty storage
    ///
    /// Other handles onto the previous storage are not affected.
    pub fn clear(&mut self) {
        self.data = Rc::default();
    }

    fn content_eq(&self, other: &Tlv) -> bool {
        if self.identical(other) {
            return true;
        }
        let a = self.data.borrow();
        let b = other.data.borrow();
        a.tag == b.tag
            && a.value == b.value
            && a.children.len() == b.children.len()
            && a.children
                .iter()
                .zip(b.children.iter())
                .all(|(x, y)| x.content_eq(y))
    }
}

/// Structural equality
///
/// Tag, value and children (recursively, by content) must match, and both
/// nodes must have the same parent, or both none. Children are compared by
/// content only, since their parents are the nodes being compared.
impl PartialEq for Tlv {
    fn eq(&self, other: &Self) -> bool {
        let same_parent = {
            let a = self.data.borrow();
            let b = other.data.borrow();
            Weak::ptr_eq(&a.parent, &b.parent)
                || (a.parent.strong_count() == 0 && b.parent.strong_count() == 0)
        };
        same_parent && self.content_eq(other)
    }
}

impl Eq for Tlv {}

impl fmt::Debug for Tlv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data.borrow();
        let mut s = f.debug_struct("Tlv");
        s.field("tag", &format_args!("{}", data.tag));
        if data.children.is_empty() {
            s.field("value", &format_args!("{}", tlv_core::hexify(&data.value, false)));
        } else {
            s.field("children", &data.children);
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tlv_core::hexify;

    fn hex_dump(node: &Tlv) -> String {
        hexify(&node.dump(), false)
    }

    #[test]
    fn test_default_node() {
        let t = Tlv::new();
        assert!(t.is_empty());
        assert!(!t.has_parent());
        assert!(!t.has_children());
    }

    #[test]
    fn test_tag_only_node() {
        let t = Tlv::with_tag(0x1F81);
        assert!(!t.is_empty());
        assert!(t.has_tag());
        assert!(!t.has_value());
        assert!(!t.has_children());
    }

    #[test]
    fn test_tag_value_node() {
        let t = Tlv::with_value(0x1F81, b"test\0".as_slice());
        assert_eq!(t.tag().raw(), 0x1F81);
        assert!(t.has_value());
        assert_eq!(t.value_size(), 5);
        assert_eq!(&t.value()[..4], b"test");
        assert!(!t.has_children());
    }

    #[test]
    fn test_build_tree() {
        let root = Tlv::with_tag(0x9F8501);
        root.push_back(&Tlv::with_value(0x92, 0x123));
        assert_eq!(root.back().unwrap().tag().raw(), 0x92);
        root.push_back(&Tlv::with_tag(0xAA));
        root.back().unwrap().push_back(&Tlv::with_value(0x8A, "test"));
        assert_eq!(root.back().unwrap().back().unwrap().tag().raw(), 0x8A);
        root.push_back(&Tlv::with_value(0x93, 0x0ABB_CCDD));
        assert_eq!(hex_dump(&root), "9F85011292020123AA068A047465737493040ABBCCDD");
    }

    #[test]
    fn test_build_nested_chain() {
        let n8a = Tlv::with_value(0x8A, "test");
        let naa = Tlv::with_child(0xAA, &n8a);
        let n92 = Tlv::with_child(0x92, &naa);
        let root = Tlv::with_child(0x9F8501, &n92);
        assert_eq!(hex_dump(&root), "9F85010A9208AA068A0474657374");
    }

    #[test]
    fn test_graft_front() {
        let tree = Tlv::new();
        tree.push_back(&Tlv::with_value(0x45, 1));
        tree.push_back(&Tlv::with_tag(0x9F8501));
        tree.back().unwrap().push_back(&Tlv::with_value(0x93, 0x0ABB_CCDD));

        let branch = Tlv::with_tag(0xAA);
        branch.push_back(&Tlv::with_value(0x8A, "test"));
        tree.back().unwrap().push_front(&branch);
        tree.push_back(&Tlv::with_value(0x5F41, 0x345));

        assert_eq!(
            hex_dump(&tree),
            "4501019F85010EAA068A047465737493040ABBCCDD5F41020345"
        );

        assert!(!tree.has_parent());
        let children = tree.children();
        assert_eq!(children.len(), 3);
        assert!(children.iter().all(|c| c.parent().unwrap().identical(&tree)));

        let inner = children[1].children();
        assert_eq!(inner[0].tag().raw(), 0xAA);
        assert!(inner[0].parent().unwrap().identical(&children[1]));
        let leaf = inner[0].front().unwrap();
        assert!(leaf.has_parent());
        assert_eq!(leaf.as_string(), "test");
        assert_eq!(inner[1].value()[0], 0x0A);
    }

    #[test]
    fn test_set_parent() {
        let root = Tlv::with_value(0xAA, 10);
        let node = Tlv::with_value(0xA1, "test");
        node.set_parent(&root);
        assert!(!root.has_value());
        assert!(node.parent().unwrap().identical(&root));
        assert_eq!(hex_dump(&root), "AA06A10474657374");

        // Already a child: no duplicate edge
        node.set_parent(&root);
        assert_eq!(root.len(), 1);
    }

    #[test]
    fn test_set_value_clears_children() {
        let root = Tlv::with_tag(0xA1);
        let child = Tlv::with_value(0x81, 1);
        root.push_back(&child);
        root.set_value(0x42);
        assert!(!root.has_children());
        assert!(!child.has_parent());
        assert_eq!(hex_dump(&root), "A10142");
    }

    #[test]
    fn test_push_clears_value() {
        let root = Tlv::with_value(0xA1, 7);
        root.push_front(&Tlv::with_value(0x81, 1));
        assert!(!root.has_value());
        assert_eq!(root.len(), 1);
    }

    #[test]
    fn test_pop() {
        let root = Tlv::with_tag(0xA0);
        root.push_back(&Tlv::with_value(0x81, 1));
        root.push_back(&Tlv::with_value(0x82, 2));
        root.push_back(&Tlv::with_value(0x83, 3));

        let first = root.pop_front().unwrap();
        assert_eq!(first.tag().raw(), 0x81);
        assert!(!first.has_parent());
        let last = root.pop_back().unwrap();
        assert_eq!(last.tag().raw(), 0x83);
        assert_eq!(hex_dump(&root), "A003820102");

        root.pop_back();
        assert!(root.pop_front().is_none());
        assert!(root.pop_back().is_none());
    }

    #[test]
    fn test_detach() {
        let root = Tlv::with_tag(0xAA);
        root.push_back(&Tlv::with_value(0x88, 1));
        root.push_back(&Tlv::with_value(0x89, 2));

        let first = root.front().unwrap();
        first.detach();
        assert!(!first.has_parent());
        assert_eq!(root.len(), 1);
        assert_eq!(hex_dump(&root), "AA03890102");

        // Already rootless
        first.detach();
        assert!(!first.has_parent());
    }

    #[test]
    fn test_erase() {
        let root = Tlv::with_tag(0xBF01);
        root.push_back(&Tlv::with_value(0x8A, 1));
        root.push_back(&Tlv::with_value(0x8B, "ABC"));
        root.push_back(&Tlv::with_value(0x8A, 2));
        let nested = Tlv::with_tag(0x30);
        nested.push_back(&Tlv::with_value(0x8A, 3));
        root.push_back(&nested);

        root.erase(0x8A);
        assert_eq!(root.len(), 2);
        assert_eq!(root.front().unwrap().tag().raw(), 0x8B);
        // Only direct children are erased
        assert_eq!(nested.len(), 1);
    }

    #[test]
    fn test_refuses_cycles() {
        let root = Tlv::with_tag(0xA1);
        let child = Tlv::with_tag(0xA2);
        root.push_back(&child);

        root.push_back(&root);
        child.push_back(&root);
        assert_eq!(root.len(), 1);
        assert!(!child.has_children());
    }

    #[test]
    fn test_refuses_cycles_through_aliased_child() {
        let a = Tlv::with_tag(0xA1);
        let b = Tlv::with_tag(0xA2);
        let y = Tlv::with_tag(0xA3);
        a.push_back(&b);
        y.push_back(&b);
        // b now links back to y only, but a still owns it
        assert!(b.parent().unwrap().identical(&y));

        b.push_back(&a);
        assert!(!b.has_children());
        assert_eq!(hex_dump(&a), "A102A200");
        assert_eq!(hex_dump(&y), "A302A200");
    }

    #[test]
    fn test_refuses_cycles_deep_below_alias() {
        let a = Tlv::with_tag(0xA1);
        let b = Tlv::with_tag(0xA2);
        let c = Tlv::with_tag(0xA3);
        let other = Tlv::with_tag(0xE1);
        a.push_back(&b);
        b.push_back(&c);
        other.push_back(&b);

        c.push_back(&a);
        assert!(!c.has_children());
        assert_eq!(hex_dump(&a), "A104A202A300");
    }

    #[test]
    fn test_push_aliased_node() {
        let first = Tlv::with_tag(0xE1);
        let second = Tlv::with_tag(0xE2);
        let shared = Tlv::with_value(0x81, 1);
        first.push_back(&shared);
        second.push_back(&shared);

        assert!(first.front().unwrap().identical(&shared));
        assert!(second.front().unwrap().identical(&shared));
        assert!(shared.parent().unwrap().identical(&second));
        assert_eq!(hex_dump(&first), "E103810101");
        assert_eq!(hex_dump(&second), "E203810101");

        // Changes show through both parents
        shared.set_value(2);
        assert_eq!(hex_dump(&first), "E103810102");

        // Detach only leaves the parent it links to
        shared.detach();
        assert!(!shared.has_parent());
        assert!(!second.has_children());
        assert_eq!(first.len(), 1);
        assert!(first.front().unwrap().identical(&shared));
    }

    #[test]
    fn test_deep_branches_with_late_pushes() {
        let root = Tlv::with_tag(0xF1);
        for _ in 0..2 {
            let f2 = Tlv::with_tag(0xF2);
            root.push_back(&f2);
            let f3 = Tlv::with_tag(0xF3);
            f2.push_back(&f3);
            f3.push_back(&Tlv::with_value(0xD4, 1));
        }
        assert_eq!(hex_dump(&root), "F10EF205F303D40101F205F303D40101");
    }

    #[test]
    fn test_parent_dropped() {
        let child = Tlv::with_value(0xD1, 1);
        {
            let root = Tlv::with_tag(0xF1);
            root.push_back(&child);
            assert!(child.has_parent());
        }
        assert!(!child.has_parent());
        assert!(child.parent().is_none());
    }

    #[test]
    fn test_child_outlives_handle() {
        let root = Tlv::with_tag(0xF1);
        {
            let child = Tlv::with_value(0xD1, 1);
            root.push_back(&child);
            assert!(child.has_parent());
        }
        assert!(root.has_children());
        assert_eq!(root.front().unwrap().tag().raw(), 0xD1);
        assert!(root.front().unwrap().has_parent());
    }

    #[test]
    fn test_subtree_orphaned_when_root_dropped() {
        let root = Tlv::with_tag(0xF1);
        let branch = Tlv::with_tag(0xF2);
        root.push_back(&branch);
        branch.push_back(&Tlv::with_value(0xD1, 1));
        drop(root);

        assert!(!branch.has_parent());
        let leaf = branch.front().unwrap();
        assert!(leaf.parent().unwrap().identical(&branch));
    }

    #[test]
    fn test_handle_copy_identity() {
        let node = Tlv::with_tag(0xF1);
        let other = node.clone();
        let third = Tlv::with_tag(0xF1);

        assert_eq!(node, other);
        assert_eq!(node, third);
        assert_eq!(other, third);

        assert!(node.identical(&other));
        assert!(!node.identical(&third));
        assert!(!other.identical(&third));

        node.push_back(&Tlv::with_value(0xD1, 0xFF));
        other.push_back(&Tlv::with_value(0xD2, 0xFF));

        assert!(node.has_children());
        assert!(other.has_children());
        assert!(node.back().unwrap().identical(&other.back().unwrap()));
        assert!(node.front().unwrap().identical(&other.front().unwrap()));
        assert_ne!(node, third);

        let moved = other;
        assert!(node.identical(&moved));
        assert_eq!(node, moved);
    }

    #[test]
    fn test_equality_ignores_child_storage() {
        let a = Tlv::with_tag(0xA1);
        a.push_back(&Tlv::with_value(0x81, 1));
        let b = Tlv::with_tag(0xA1);
        b.push_back(&Tlv::with_value(0x81, 1));
        assert_eq!(a, b);
        assert!(!a.identical(&b));

        b.front().unwrap().set_value(2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_checks_parent() {
        let p1 = Tlv::with_tag(0xA1);
        let p2 = Tlv::with_tag(0xA1);
        let c1 = Tlv::with_value(0x81, 1);
        let c2 = Tlv::with_value(0x81, 1);
        p1.push_back(&c1);
        p2.push_back(&c2);
        assert_ne!(c1, c2);

        c2.detach();
        c1.detach();
        assert_eq!(c1, c2);
    }

    #[test]
    fn test_swap_and_clear() {
        let mut a = Tlv::with_value(0x81, 1);
        let mut b = Tlv::with_value(0x82, 2);
        let alias = a.clone();
        a.swap(&mut b);
        assert_eq!(a.tag().raw(), 0x82);
        assert_eq!(b.tag().raw(), 0x81);
        assert!(b.identical(&alias));

        b.clear();
        assert!(b.is_empty());
        assert_eq!(alias.tag().raw(), 0x81);
    }

    #[test]
    fn test_typed_values() {
        let t = Tlv::with_value(0x8A, "test");
        assert_eq!(hex_dump(&t), "8A0474657374");
        assert_eq!(t.as_string(), "test");

        let t = Tlv::with_value(0x8A, true);
        assert_eq!(hex_dump(&t), "8A0101");
        assert!(t.as_bool());

        let t = Tlv::with_value(0x8A, -5i8);
        assert_eq!(hex_dump(&t), "8A01FB");
        assert_eq!(t.as_i8(), -5);

        let t = Tlv::with_value(0x8A, -1365i16);
        assert_eq!(hex_dump(&t), "8A02FAAB");
        assert_eq!(t.as_i16(), -1365);

        let t = Tlv::with_value(0x8A, 0x555_5555i32);
        assert_eq!(hex_dump(&t), "8A0405555555");
        assert_eq!(t.as_i32(), 0x555_5555);

        let t = Tlv::with_value(0x8A, -89_478_485i32);
        assert_eq!(hex_dump(&t), "8A04FAAAAAAB");
        assert_eq!(t.as_i32(), -89_478_485);

        let t = Tlv::with_value(0x8A, -384_307_168_202_282_325i64);
        assert_eq!(hex_dump(&t), "8A08FAAAAAAAAAAAAAAB");
        assert_eq!(t.as_i64(), -384_307_168_202_282_325);

        let t = Tlv::with_value(0x8A, 0x123i64);
        assert_eq!(hex_dump(&t), "8A020123");
        assert_eq!(t.as_i16(), 0x123);
        assert_eq!(t.as_u32(), 0x123);
        assert_eq!(t.as_u64(), 0x123);
    }

    #[test]
    fn test_empty_value_accessors() {
        let t = Tlv::with_tag(0x81);
        assert!(!t.as_bool());
        assert_eq!(t.as_u8(), 0);
        assert_eq!(t.as_u64(), 0);
        assert_eq!(t.as_string(), "");
    }

    #[test]
    fn test_debug_output() {
        let root = Tlv::with_tag(0xA1);
        root.push_back(&Tlv::with_value(0x81, 0xAB));
        let s = format!("{:?}", root);
        assert!(s.contains("A1"));
        assert!(s.contains("AB"));
    }
}

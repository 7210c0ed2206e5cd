//! Traversal over elements and members.
//!
//! [`Visitor`] has one hook per [`ElementKind`] and per [`MemberKind`]
//! variant. Every hook defaults to the matching `walk_*` function, which
//! visits the node's children in document order. An override that still
//! wants the subtree visited calls the walk function itself; one that does
//! not simply returns, pruning the subtree.
//!
//! ```rust
//! use xmldoc::element::{Element, ElementKind};
//! use xmldoc::visitor::{Visitor, walk_element};
//!
//! #[derive(Default)]
//! struct CountParas(usize);
//!
//! impl Visitor for CountParas {
//!     fn visit_para(&mut self, element: &Element) {
//!         self.0 += 1;
//!         walk_element(self, element);
//!     }
//! }
//!
//! let remarks = Element::container(
//!     ElementKind::Remarks,
//!     vec![
//!         Element::container(ElementKind::Para, vec![Element::text("One.")]),
//!         Element::container(ElementKind::Para, vec![Element::text("Two.")]),
//!     ],
//! );
//! let mut counter = CountParas::default();
//! remarks.accept(&mut counter);
//! assert_eq!(counter.0, 2);
//! ```

use crate::element::{Element, ElementKind, ListKind};
use crate::member::{Member, MemberKind};

pub trait Visitor {
    /// Dispatch on the element's kind. Rarely overridden.
    fn visit_element(&mut self, element: &Element) {
        accept_element(self, element);
    }

    fn visit_summary(&mut self, element: &Element) {
        walk_element(self, element);
    }

    fn visit_remarks(&mut self, element: &Element) {
        walk_element(self, element);
    }

    fn visit_example(&mut self, element: &Element) {
        walk_element(self, element);
    }

    fn visit_para(&mut self, element: &Element) {
        walk_element(self, element);
    }

    fn visit_param(&mut self, element: &Element, _name: &str) {
        walk_element(self, element);
    }

    fn visit_param_ref(&mut self, element: &Element, _name: &str) {
        walk_element(self, element);
    }

    fn visit_type_param(&mut self, element: &Element, _name: &str) {
        walk_element(self, element);
    }

    fn visit_type_param_ref(&mut self, element: &Element, _name: &str) {
        walk_element(self, element);
    }

    fn visit_code(&mut self, element: &Element, _content: &str) {
        walk_element(self, element);
    }

    fn visit_inline_code(&mut self, element: &Element, _content: &str) {
        walk_element(self, element);
    }

    fn visit_see(&mut self, element: &Element, _cref: Option<&str>, _langword: Option<&str>) {
        walk_element(self, element);
    }

    fn visit_see_also(&mut self, element: &Element, _cref: Option<&str>) {
        walk_element(self, element);
    }

    fn visit_list(&mut self, element: &Element, _kind: &ListKind) {
        walk_element(self, element);
    }

    fn visit_list_header(&mut self, element: &Element) {
        walk_element(self, element);
    }

    fn visit_term(&mut self, element: &Element) {
        walk_element(self, element);
    }

    fn visit_description(&mut self, element: &Element) {
        walk_element(self, element);
    }

    fn visit_item(&mut self, element: &Element) {
        walk_element(self, element);
    }

    fn visit_exception(&mut self, element: &Element, _cref: Option<&str>) {
        walk_element(self, element);
    }

    fn visit_value(&mut self, element: &Element) {
        walk_element(self, element);
    }

    fn visit_returns(&mut self, element: &Element) {
        walk_element(self, element);
    }

    fn visit_text(&mut self, element: &Element, _content: &str) {
        walk_element(self, element);
    }

    /// A tag the content parser did not recognize.
    fn visit_unknown(&mut self, element: &Element, _name: &str) {
        walk_element(self, element);
    }

    /// Dispatch on the member's kind. Rarely overridden.
    fn visit_member(&mut self, member: &Member) {
        accept_member(self, member);
    }

    fn visit_type(&mut self, member: &Member) {
        walk_member(self, member);
    }

    fn visit_interface(&mut self, member: &Member) {
        walk_member(self, member);
    }

    fn visit_class(&mut self, member: &Member) {
        walk_member(self, member);
    }

    fn visit_enum(&mut self, member: &Member) {
        walk_member(self, member);
    }

    fn visit_struct(&mut self, member: &Member) {
        walk_member(self, member);
    }

    fn visit_field(&mut self, member: &Member) {
        walk_member(self, member);
    }

    fn visit_property(&mut self, member: &Member) {
        walk_member(self, member);
    }

    fn visit_method(&mut self, member: &Member) {
        walk_member(self, member);
    }

    fn visit_extension_method(&mut self, member: &Member, _extended_type: &str) {
        walk_member(self, member);
    }

    fn visit_event(&mut self, member: &Member) {
        walk_member(self, member);
    }

    fn visit_unknown_member(&mut self, member: &Member) {
        walk_member(self, member);
    }
}

/// Call the hook matching `element`'s kind.
pub fn accept_element<V: Visitor + ?Sized>(visitor: &mut V, element: &Element) {
    match element.kind() {
        ElementKind::Summary => visitor.visit_summary(element),
        ElementKind::Remarks => visitor.visit_remarks(element),
        ElementKind::Example => visitor.visit_example(element),
        ElementKind::Para => visitor.visit_para(element),
        ElementKind::Param { name } => visitor.visit_param(element, name),
        ElementKind::ParamRef { name } => visitor.visit_param_ref(element, name),
        ElementKind::TypeParam { name } => visitor.visit_type_param(element, name),
        ElementKind::TypeParamRef { name } => visitor.visit_type_param_ref(element, name),
        ElementKind::Code { content } => visitor.visit_code(element, content),
        ElementKind::InlineCode { content } => visitor.visit_inline_code(element, content),
        ElementKind::See { cref, langword, .. } => {
            visitor.visit_see(element, cref.as_deref(), langword.as_deref())
        }
        ElementKind::SeeAlso { cref, .. } => visitor.visit_see_also(element, cref.as_deref()),
        ElementKind::List { kind } => visitor.visit_list(element, kind),
        ElementKind::ListHeader => visitor.visit_list_header(element),
        ElementKind::Term => visitor.visit_term(element),
        ElementKind::Description => visitor.visit_description(element),
        ElementKind::Item => visitor.visit_item(element),
        ElementKind::Exception { cref } => visitor.visit_exception(element, cref.as_deref()),
        ElementKind::Value => visitor.visit_value(element),
        ElementKind::Returns => visitor.visit_returns(element),
        ElementKind::Text { content } => visitor.visit_text(element, content),
        ElementKind::Unknown { name } => visitor.visit_unknown(element, name),
    }
}

/// Call the hook matching `member`'s kind.
pub fn accept_member<V: Visitor + ?Sized>(visitor: &mut V, member: &Member) {
    match member.kind() {
        MemberKind::Type => visitor.visit_type(member),
        MemberKind::Interface => visitor.visit_interface(member),
        MemberKind::Class => visitor.visit_class(member),
        MemberKind::Enum => visitor.visit_enum(member),
        MemberKind::Struct => visitor.visit_struct(member),
        MemberKind::Field => visitor.visit_field(member),
        MemberKind::Property => visitor.visit_property(member),
        MemberKind::Method => visitor.visit_method(member),
        MemberKind::ExtensionMethod { extended_type } => {
            visitor.visit_extension_method(member, extended_type)
        }
        MemberKind::Event => visitor.visit_event(member),
        MemberKind::Unknown => visitor.visit_unknown_member(member),
    }
}

/// Visit the children of `element`, in order.
pub fn walk_element<V: Visitor + ?Sized>(visitor: &mut V, element: &Element) {
    for child in element.children() {
        visitor.visit_element(child);
    }
}

/// Visit the top-level elements of `member`, in order.
pub fn walk_member<V: Visitor + ?Sized>(visitor: &mut V, member: &Member) {
    for element in member.elements() {
        visitor.visit_element(element);
    }
}

impl Element {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_element(self);
    }
}

impl Member {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_member(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Records the tag of every element it enters.
    #[derive(Default)]
    struct Trace {
        tags: Vec<String>,
    }

    impl Visitor for Trace {
        fn visit_element(&mut self, element: &Element) {
            self.tags.push(element.tag_name().to_string());
            accept_element(self, element);
        }
    }

    /// Does not descend into `<remarks>`.
    #[derive(Default)]
    struct SkipRemarks {
        texts: Vec<String>,
    }

    impl Visitor for SkipRemarks {
        fn visit_remarks(&mut self, _element: &Element) {}

        fn visit_text(&mut self, _element: &Element, content: &str) {
            self.texts.push(content.to_string());
        }
    }

    fn para(text: &str) -> Element {
        Element::container(ElementKind::Para, vec![Element::text(text)])
    }

    fn member(id: &str) -> Member {
        Member::new(
            id,
            vec![
                Element::container(ElementKind::Summary, vec![Element::text("Sum.")]),
                Element::container(ElementKind::Remarks, vec![para("Hidden.")]),
            ],
            None,
        )
    }

    #[test]
    fn test_default_hooks_walk_in_document_order() {
        let list = Element::container(
            ElementKind::List {
                kind: ListKind::Bullet,
            },
            vec![Element::container(
                ElementKind::Item,
                vec![
                    Element::container(ElementKind::Term, vec![Element::text("a")]),
                    Element::container(ElementKind::Description, vec![Element::text("b")]),
                ],
            )],
        );

        let mut trace = Trace::default();
        list.accept(&mut trace);

        assert_eq!(
            trace.tags,
            vec!["list", "item", "term", "#text", "description", "#text"]
        );
    }

    #[test]
    fn test_unknown_elements_are_walked() {
        let unknown = Element::container(
            ElementKind::Unknown {
                name: "future".to_string(),
            },
            vec![para("inside")],
        );

        let mut trace = Trace::default();
        unknown.accept(&mut trace);
        assert_eq!(trace.tags, vec!["future", "para", "#text"]);
    }

    #[test]
    fn test_override_without_walk_prunes() {
        let mut visitor = SkipRemarks::default();
        member("T:My.Foo").accept(&mut visitor);
        assert_eq!(visitor.texts, vec!["Sum."]);
    }

    #[test]
    fn test_member_dispatch_by_kind() {
        #[derive(Default)]
        struct Kinds(Vec<String>);

        impl Visitor for Kinds {
            fn visit_type(&mut self, _member: &Member) {
                self.0.push("type".to_string());
            }
            fn visit_method(&mut self, _member: &Member) {
                self.0.push("method".to_string());
            }
            fn visit_unknown_member(&mut self, member: &Member) {
                self.0.push(format!("unknown {}", member.id()));
            }
        }

        let mut kinds = Kinds::default();
        for id in ["T:A", "M:A.B", "Q:A"] {
            member(id).accept(&mut kinds);
        }
        assert_eq!(kinds.0, vec!["type", "method", "unknown Q:A"]);
    }

    #[test]
    fn test_hooks_receive_variant_data() {
        #[derive(Default)]
        struct Refs(Vec<String>);

        impl Visitor for Refs {
            fn visit_see(&mut self, _element: &Element, cref: Option<&str>, langword: Option<&str>) {
                self.0.push(format!("{:?}/{:?}", cref, langword));
            }
            fn visit_param_ref(&mut self, _element: &Element, name: &str) {
                self.0.push(name.to_string());
            }
        }

        let summary = Element::container(
            ElementKind::Summary,
            vec![
                Element::container(
                    ElementKind::See {
                        cref: Some("T:A".to_string()),
                        langword: None,
                        inner_text: String::new(),
                    },
                    vec![],
                ),
                Element::container(
                    ElementKind::ParamRef {
                        name: "count".to_string(),
                    },
                    vec![],
                ),
            ],
        );

        let mut refs = Refs::default();
        summary.accept(&mut refs);
        assert_eq!(refs.0, vec!["Some(\"T:A\")/None", "count"]);
    }
}

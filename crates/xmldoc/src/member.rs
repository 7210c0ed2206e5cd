//! Documented members and their resolution against reflection metadata.

use crate::element::{Element, ElementKind};
use crate::identity::{IdentityMap, ReflectionHandle};
use crate::metadata::TypeCategory;
use xmldoc_source_map::SourceInfo;

/// What kind of entity a [`Member`] documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKind {
    /// A type that could not be resolved to a category.
    Type,
    Interface,
    Class,
    Enum,
    Struct,
    Field,
    Property,
    Method,
    /// A method whose first parameter is logically its receiver.
    ExtensionMethod {
        /// Identifier of the receiver type, e.g. `T:My.Namespace.Baz`.
        extended_type: String,
    },
    Event,
    Unknown,
}

impl MemberKind {
    /// The kind implied by an identifier's prefix character alone.
    pub fn from_identifier(id: &str) -> Self {
        match id.chars().next() {
            Some('T') => MemberKind::Type,
            Some('F') => MemberKind::Field,
            Some('P') => MemberKind::Property,
            Some('M') => MemberKind::Method,
            Some('E') => MemberKind::Event,
            _ => MemberKind::Unknown,
        }
    }

    pub fn is_type(&self) -> bool {
        matches!(
            self,
            MemberKind::Type
                | MemberKind::Interface
                | MemberKind::Class
                | MemberKind::Enum
                | MemberKind::Struct
        )
    }

    pub fn is_method(&self) -> bool {
        matches!(
            self,
            MemberKind::Method | MemberKind::ExtensionMethod { .. }
        )
    }
}

impl From<TypeCategory> for MemberKind {
    fn from(category: TypeCategory) -> Self {
        match category {
            TypeCategory::Interface => MemberKind::Interface,
            TypeCategory::Enum => MemberKind::Enum,
            TypeCategory::Struct => MemberKind::Struct,
            TypeCategory::Class | TypeCategory::Delegate => MemberKind::Class,
        }
    }
}

/// One `<member>` of a documentation file.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    id: String,
    kind: MemberKind,
    elements: Vec<Element>,
    handle: Option<ReflectionHandle>,
    source_info: Option<SourceInfo>,
}

impl Member {
    /// Build a member without reflection metadata. The kind comes from the
    /// identifier prefix.
    pub fn new(id: impl Into<String>, elements: Vec<Element>, source_info: Option<SourceInfo>) -> Self {
        let id = id.into();
        let kind = MemberKind::from_identifier(&id);
        tracing::trace!(member = %id, ?kind, "Constructed member");
        Self {
            id,
            kind,
            elements,
            handle: None,
            source_info,
        }
    }

    /// Build a member in its final form, resolving it against `map`.
    ///
    /// Types are refined by category and extension methods by receiver.
    /// Anything the map does not know keeps its prefix kind and gets no
    /// handle.
    pub fn resolve(
        id: impl Into<String>,
        elements: Vec<Element>,
        source_info: Option<SourceInfo>,
        map: &IdentityMap,
    ) -> Self {
        let id = id.into();
        let handle = map.get(&id).cloned();

        let kind = match (MemberKind::from_identifier(&id), &handle) {
            (MemberKind::Type, Some(ReflectionHandle::Type(ty))) => MemberKind::from(ty.category),
            (MemberKind::Method, Some(ReflectionHandle::Method(..))) => {
                match map.extended_type(&id) {
                    Some(extended) => MemberKind::ExtensionMethod {
                        extended_type: extended.to_string(),
                    },
                    None => MemberKind::Method,
                }
            }
            (kind, None) => {
                if kind != MemberKind::Unknown {
                    tracing::debug!(member = %id, "Member not found in reflection metadata");
                }
                kind
            }
            (kind, Some(_)) => kind,
        };

        tracing::trace!(member = %id, ?kind, resolved = handle.is_some(), "Resolved member");
        Self {
            id,
            kind,
            elements,
            handle,
            source_info,
        }
    }

    /// The full identifier, e.g. `M:My.Widget.Spin(System.Int32)`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The identifier without its `X:` prefix.
    pub fn name(&self) -> &str {
        match self.id.split_once(':') {
            Some((prefix, rest)) if prefix.len() == 1 => rest,
            _ => &self.id,
        }
    }

    pub fn kind(&self) -> &MemberKind {
        &self.kind
    }

    /// The top-level elements of the documentation block.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn handle(&self) -> Option<&ReflectionHandle> {
        self.handle.as_ref()
    }

    /// Where the `<member>` element starts in the documentation file.
    pub fn source_info(&self) -> Option<&SourceInfo> {
        self.source_info.as_ref()
    }

    pub fn summary(&self) -> Option<&Element> {
        self.elements_named("summary").next()
    }

    pub fn remarks(&self) -> Option<&Element> {
        self.elements_named("remarks").next()
    }

    pub fn returns(&self) -> Option<&Element> {
        self.elements_named("returns").next()
    }

    /// `<param>` elements in declaration order.
    pub fn params(&self) -> impl Iterator<Item = &Element> {
        self.elements_named("param")
    }

    /// The `<param>` documenting the parameter called `name`.
    pub fn param(&self, name: &str) -> Option<&Element> {
        self.params()
            .find(|e| matches!(e.kind(), ElementKind::Param { name: n } if n == name))
    }

    /// Top-level elements with the given tag name.
    pub fn elements_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.elements.iter().filter(move |e| e.tag_name() == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{Assembly, MethodInfo, TypeInfo, TypeRef};
    use pretty_assertions::assert_eq;

    fn map() -> IdentityMap {
        let assembly = Assembly::new("My.Library", "My.Library.dll")
            .with_type(
                TypeInfo::new(Some("My.Namespace"), "Foo", TypeCategory::Class)
                    .with_method(
                        MethodInfo::new("Bar")
                            .extension()
                            .with_parameter("value", TypeRef::named("My.Namespace.Baz")),
                    )
                    .with_method(MethodInfo::new("Plain")),
            )
            .with_type(TypeInfo::new(Some("My.Namespace"), "Baz", TypeCategory::Struct))
            .with_type(TypeInfo::new(Some("My.Namespace"), "IShape", TypeCategory::Interface))
            .with_type(TypeInfo::new(Some("My.Namespace"), "Color", TypeCategory::Enum))
            .with_type(TypeInfo::new(Some("My.Namespace"), "Callback", TypeCategory::Delegate));
        IdentityMap::build(&assembly)
    }

    #[test]
    fn test_kind_from_prefix() {
        let cases = [
            ("T:A", MemberKind::Type),
            ("F:A.b", MemberKind::Field),
            ("P:A.B", MemberKind::Property),
            ("M:A.B", MemberKind::Method),
            ("E:A.B", MemberKind::Event),
            ("N:A", MemberKind::Unknown),
            ("", MemberKind::Unknown),
        ];
        for (id, kind) in cases {
            assert_eq!(Member::new(id, vec![], None).kind(), &kind, "{}", id);
        }
    }

    #[test]
    fn test_types_are_refined_by_category() {
        let map = map();
        let kind = |id: &str| Member::resolve(id, vec![], None, &map).kind().clone();

        assert_eq!(kind("T:My.Namespace.Foo"), MemberKind::Class);
        assert_eq!(kind("T:My.Namespace.Baz"), MemberKind::Struct);
        assert_eq!(kind("T:My.Namespace.IShape"), MemberKind::Interface);
        assert_eq!(kind("T:My.Namespace.Color"), MemberKind::Enum);
        assert_eq!(kind("T:My.Namespace.Callback"), MemberKind::Class);
    }

    #[test]
    fn test_unresolved_type_stays_generic() {
        let member = Member::resolve("T:My.Namespace.Gone", vec![], None, &map());
        assert_eq!(member.kind(), &MemberKind::Type);
        assert!(member.handle().is_none());
    }

    #[test]
    fn test_extension_method() {
        let member = Member::resolve(
            "M:My.Namespace.Foo.Bar(My.Namespace.Baz)",
            vec![],
            None,
            &map(),
        );
        assert_eq!(
            member.kind(),
            &MemberKind::ExtensionMethod {
                extended_type: "T:My.Namespace.Baz".to_string()
            }
        );
        assert_eq!(member.handle().map(ReflectionHandle::kind_name), Some("method"));
        assert_eq!(member.id(), "M:My.Namespace.Foo.Bar(My.Namespace.Baz)");
    }

    #[test]
    fn test_plain_method_keeps_method_kind() {
        let member = Member::resolve("M:My.Namespace.Foo.Plain", vec![], None, &map());
        assert_eq!(member.kind(), &MemberKind::Method);
        assert!(member.handle().is_some());
    }

    #[test]
    fn test_name_strips_prefix() {
        assert_eq!(Member::new("T:My.Foo", vec![], None).name(), "My.Foo");
        assert_eq!(Member::new("odd", vec![], None).name(), "odd");
    }

    #[test]
    fn test_element_lookups() {
        let member = Member::new(
            "M:My.Foo.Run(System.Int32,System.Int32)",
            vec![
                Element::container(ElementKind::Summary, vec![Element::text("Runs.")]),
                Element::container(
                    ElementKind::Param {
                        name: "x".to_string(),
                    },
                    vec![Element::text("first")],
                ),
                Element::container(
                    ElementKind::Param {
                        name: "y".to_string(),
                    },
                    vec![Element::text("second")],
                ),
                Element::container(ElementKind::Returns, vec![Element::text("nothing")]),
            ],
            None,
        );

        assert_eq!(member.summary().map(Element::text_content), Some("Runs.".to_string()));
        assert_eq!(member.params().count(), 2);
        assert_eq!(
            member.param("y").map(Element::text_content),
            Some("second".to_string())
        );
        assert!(member.param("z").is_none());
        assert!(member.remarks().is_none());
        assert_eq!(member.returns().map(Element::text_content), Some("nothing".to_string()));
    }
}

//! Member identity map: documentation identifiers to reflection handles.

use crate::doc_id;
use crate::metadata::{
    EventInfo, FieldInfo, MethodInfo, PropertyInfo, TypeCategory, TypeInfo, TypeRef,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// A type or member of a loaded binary.
///
/// Member handles carry their declaring type, which is needed to build
/// their identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum ReflectionHandle {
    Type(Arc<TypeInfo>),
    Field(Arc<TypeInfo>, Arc<FieldInfo>),
    Property(Arc<TypeInfo>, Arc<PropertyInfo>),
    Method(Arc<TypeInfo>, Arc<MethodInfo>),
    Event(Arc<TypeInfo>, Arc<EventInfo>),
}

impl ReflectionHandle {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ReflectionHandle::Type(_) => "type",
            ReflectionHandle::Field(..) => "field",
            ReflectionHandle::Property(..) => "property",
            ReflectionHandle::Method(..) => "method",
            ReflectionHandle::Event(..) => "event",
        }
    }

    /// The type itself, or the declaring type of a member.
    pub fn declaring_type(&self) -> &Arc<TypeInfo> {
        match self {
            ReflectionHandle::Type(ty)
            | ReflectionHandle::Field(ty, _)
            | ReflectionHandle::Property(ty, _)
            | ReflectionHandle::Method(ty, _)
            | ReflectionHandle::Event(ty, _) => ty,
        }
    }

    pub fn as_type(&self) -> Option<&TypeInfo> {
        match self {
            ReflectionHandle::Type(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodInfo> {
        match self {
            ReflectionHandle::Method(_, method) => Some(method),
            _ => None,
        }
    }

    /// Identity of the declaring type and the member object, for reverse
    /// lookups. Cloned types share member objects, so both are needed.
    fn address(&self) -> (usize, usize) {
        let ty = Arc::as_ptr(self.declaring_type()) as usize;
        let member = match self {
            ReflectionHandle::Type(_) => 0,
            ReflectionHandle::Field(_, m) => Arc::as_ptr(m) as usize,
            ReflectionHandle::Property(_, m) => Arc::as_ptr(m) as usize,
            ReflectionHandle::Method(_, m) => Arc::as_ptr(m) as usize,
            ReflectionHandle::Event(_, m) => Arc::as_ptr(m) as usize,
        };
        (ty, member)
    }
}

/// What the documentation model needs from a loaded binary.
pub trait ReflectionSource {
    /// Where the binary lives; the documentation file is looked up next to it.
    fn location(&self) -> &Path;

    /// Every declared type and member.
    fn handles(&self) -> Vec<ReflectionHandle>;

    /// The documentation identifier of a handle.
    fn identifier(&self, handle: &ReflectionHandle) -> String {
        match handle {
            ReflectionHandle::Type(ty) => doc_id::type_id(ty),
            ReflectionHandle::Field(ty, field) => doc_id::field_id(ty, field),
            ReflectionHandle::Property(ty, property) => doc_id::property_id(ty, property),
            ReflectionHandle::Method(ty, method) => doc_id::method_id(ty, method),
            ReflectionHandle::Event(ty, event) => doc_id::event_id(ty, event),
        }
    }

    /// The receiver type of an extension method, or `None` when the method
    /// carries no extension marker.
    fn extension_receiver(&self, method: &MethodInfo) -> Option<TypeRef> {
        method.extension_receiver().cloned()
    }
}

/// Identifier-keyed index over every type and member of one binary.
///
/// Built once, eagerly, then only read.
#[derive(Debug, Clone, Default)]
pub struct IdentityMap {
    by_id: HashMap<String, ReflectionHandle>,
    by_address: HashMap<(usize, usize), String>,
    /// Extension method identifier to the identifier of its receiver type.
    receivers: HashMap<String, String>,
}

impl IdentityMap {
    /// Enumerate `source` and index every handle by its identifier.
    pub fn build<S: ReflectionSource + ?Sized>(source: &S) -> Self {
        let mut map = IdentityMap::default();
        let mut extension_methods = Vec::new();

        for handle in source.handles() {
            let id = source.identifier(&handle);
            if let Some(receiver) = handle
                .as_method()
                .and_then(|method| source.extension_receiver(method))
            {
                extension_methods.push((id.clone(), receiver));
            }
            map.by_address.insert(handle.address(), id.clone());
            map.by_id.insert(id, handle);
        }

        // Receivers are resolved once every type is indexed.
        for (id, receiver) in extension_methods {
            let receiver_id = map.type_identifier(&receiver);
            map.receivers.insert(id, receiver_id);
        }

        tracing::debug!(
            handles = map.by_id.len(),
            extension_methods = map.receivers.len(),
            "Built member identity map"
        );
        map
    }

    pub fn get(&self, id: &str) -> Option<&ReflectionHandle> {
        self.by_id.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Reverse lookup: the identifier a handle was indexed under.
    pub fn identifier_of(&self, handle: &ReflectionHandle) -> Option<&str> {
        self.by_address.get(&handle.address()).map(String::as_str)
    }

    /// The structural category of the type with this identifier.
    pub fn type_category(&self, id: &str) -> Option<TypeCategory> {
        self.get(id).and_then(ReflectionHandle::as_type).map(|ty| ty.category)
    }

    /// For an extension method, the identifier of the type it extends.
    pub fn extended_type(&self, method_id: &str) -> Option<&str> {
        self.receivers.get(method_id).map(String::as_str)
    }

    /// The documentation identifier of a signature type. Types this binary
    /// does not declare get one too; the miss is only traced.
    pub fn type_identifier(&self, ty: &TypeRef) -> String {
        let id = doc_id::declared_type_id(ty);
        if !self.contains(&id) {
            tracing::trace!(type_id = %id, "Type is not declared by this binary");
        }
        id
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
    use crate::metadata::{Assembly, MethodInfo, PropertyInfo, TypeCategory, TypeInfo};
    use pretty_assertions::assert_eq;

    fn assembly() -> Assembly {
        Assembly::new("My.Library", "My.Library.dll")
            .with_type(
                TypeInfo::new(Some("My.Namespace"), "Foo", TypeCategory::Class)
                    .with_method(
                        MethodInfo::new("Bar")
                            .extension()
                            .with_parameter("baz", TypeRef::named("My.Namespace.Baz")),
                    )
                    .with_property(PropertyInfo::new("Size"))
                    .with_field("count")
                    .with_event("Changed"),
            )
            .with_type(TypeInfo::new(Some("My.Namespace"), "Baz", TypeCategory::Struct))
            .with_type(TypeInfo::new(Some("My.Namespace"), "IThing", TypeCategory::Interface))
    }

    #[test]
    fn test_every_member_is_indexed() {
        let map = IdentityMap::build(&assembly());

        assert_eq!(map.len(), 7);
        for id in [
            "T:My.Namespace.Foo",
            "T:My.Namespace.Baz",
            "T:My.Namespace.IThing",
            "M:My.Namespace.Foo.Bar(My.Namespace.Baz)",
            "P:My.Namespace.Foo.Size",
            "F:My.Namespace.Foo.count",
            "E:My.Namespace.Foo.Changed",
        ] {
            assert!(map.contains(id), "missing {}", id);
        }
    }

    #[test]
    fn test_misses_are_silent() {
        let map = IdentityMap::build(&assembly());
        assert!(map.get("T:My.Namespace.Missing").is_none());
        // Identifiers must match exactly
        assert!(map.get("M:My.Namespace.Foo.Bar").is_none());
        assert!(map.get("t:My.Namespace.Foo").is_none());
    }

    #[test]
    fn test_reverse_lookup() {
        let assembly = assembly();
        let map = IdentityMap::build(&assembly);

        let handle = ReflectionHandle::Type(Arc::clone(&assembly.types[1]));
        assert_eq!(map.identifier_of(&handle), Some("T:My.Namespace.Baz"));

        let unrelated = ReflectionHandle::Type(Arc::new(TypeInfo::new(
            Some("My.Namespace"),
            "Baz",
            TypeCategory::Struct,
        )));
        assert_eq!(map.identifier_of(&unrelated), None);
    }

    #[test]
    fn test_reverse_lookup_distinguishes_cloned_types() {
        let base =
            TypeInfo::new(Some("My"), "A", TypeCategory::Class).with_method(MethodInfo::new("Run"));
        let mut other = base.clone();
        other.name = "B".to_string();
        let assembly = Assembly::new("My", "My.dll").with_type(base).with_type(other);
        let map = IdentityMap::build(&assembly);

        let a = &assembly.types[0];
        let b = &assembly.types[1];
        assert!(Arc::ptr_eq(&a.methods[0], &b.methods[0]));

        let run_on_a = ReflectionHandle::Method(Arc::clone(a), Arc::clone(&a.methods[0]));
        let run_on_b = ReflectionHandle::Method(Arc::clone(b), Arc::clone(&b.methods[0]));
        assert_eq!(map.identifier_of(&run_on_a), Some("M:My.A.Run"));
        assert_eq!(map.identifier_of(&run_on_b), Some("M:My.B.Run"));
        assert_eq!(
            map.identifier_of(&ReflectionHandle::Type(Arc::clone(a))),
            Some("T:My.A")
        );
    }

    #[test]
    fn test_type_categories() {
        let map = IdentityMap::build(&assembly());
        assert_eq!(
            map.type_category("T:My.Namespace.IThing"),
            Some(TypeCategory::Interface)
        );
        assert_eq!(map.type_category("F:My.Namespace.Foo.count"), None);
    }

    #[test]
    fn test_extension_receivers() {
        let map = IdentityMap::build(&assembly());
        assert_eq!(
            map.extended_type("M:My.Namespace.Foo.Bar(My.Namespace.Baz)"),
            Some("T:My.Namespace.Baz")
        );
        assert_eq!(map.extended_type("P:My.Namespace.Foo.Size"), None);
    }

    #[test]
    fn test_empty_source() {
        let map = IdentityMap::build(&Assembly::new("Empty", "Empty.dll"));
        assert!(map.is_empty());
    }
}

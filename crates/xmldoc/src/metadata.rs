//! Reflection metadata of a compiled binary.
//!
//! Loading a binary is somebody else's job. This module describes what the
//! documentation model needs to know about one once it is loaded: its
//! declared types and their members, enough signature information to build
//! documentation identifiers, and the extension-method marker.
//!
//! The model deserializes from JSON, so a metadata dump produced by an
//! external tool can be fed straight into [`Assembly::from_json`]:
//!
//! ```json
//! {
//!   "name": "My.Library",
//!   "location": "bin/My.Library.dll",
//!   "types": [
//!     { "namespace": "My", "name": "Widget", "category": "class",
//!       "methods": [{ "name": "Spin", "parameters": [
//!         { "name": "speed", "type": { "kind": "named", "name": "System.Int32" } }
//!       ]}] }
//!   ]
//! }
//! ```

use crate::error::Result;
use crate::identity::{ReflectionHandle, ReflectionSource};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The structural category of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCategory {
    Class,
    Interface,
    Enum,
    Struct,
    Delegate,
}

/// A loaded binary: its location and every type it declares.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assembly {
    pub name: String,
    pub location: PathBuf,
    /// All declared types, nested ones included.
    #[serde(default)]
    pub types: Vec<Arc<TypeInfo>>,
}

/// A declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeInfo {
    #[serde(default)]
    pub namespace: Option<String>,
    /// Simple name, without generic arity.
    pub name: String,
    #[serde(default)]
    pub generic_arity: usize,
    pub category: TypeCategory,
    /// For nested types, the identifier name of the enclosing type
    /// (e.g. `My.Outer` or ``My.Outer`1``).
    #[serde(default)]
    pub declaring_type: Option<String>,
    #[serde(default)]
    pub fields: Vec<Arc<FieldInfo>>,
    #[serde(default)]
    pub properties: Vec<Arc<PropertyInfo>>,
    #[serde(default)]
    pub methods: Vec<Arc<MethodInfo>>,
    #[serde(default)]
    pub events: Vec<Arc<EventInfo>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
    pub name: String,
}

/// A property; indexers have parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParameterInfo>,
}

/// A method or constructor (`.ctor` / `.cctor`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    #[serde(default)]
    pub generic_arity: usize,
    #[serde(default)]
    pub parameters: Vec<ParameterInfo>,
    #[serde(default)]
    pub return_type: Option<TypeRef>,
    /// Marks a static method whose first parameter is logically the receiver.
    #[serde(default)]
    pub is_extension: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// A reference to a type as it appears in a signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TypeRef {
    /// A named type, e.g. `System.String`, with generic arguments if it is
    /// a constructed generic type.
    Named {
        name: String,
        #[serde(default)]
        arguments: Vec<TypeRef>,
    },
    Array {
        element: Box<TypeRef>,
        #[serde(default = "default_rank")]
        rank: usize,
    },
    ByRef {
        element: Box<TypeRef>,
    },
    Pointer {
        element: Box<TypeRef>,
    },
    /// A generic parameter of the declaring type, by position.
    TypeParameter {
        position: usize,
    },
    /// A generic parameter of the method itself, by position.
    MethodTypeParameter {
        position: usize,
    },
}

fn default_rank() -> usize {
    1
}

impl Assembly {
    pub fn new(name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            types: Vec::new(),
        }
    }

    pub fn with_type(mut self, ty: TypeInfo) -> Self {
        self.types.push(Arc::new(ty));
        self
    }

    /// Parse a JSON metadata dump.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl ReflectionSource for Assembly {
    fn location(&self) -> &Path {
        &self.location
    }

    fn handles(&self) -> Vec<ReflectionHandle> {
        let mut handles = Vec::new();
        for ty in &self.types {
            handles.push(ReflectionHandle::Type(Arc::clone(ty)));
            handles.extend(
                ty.fields
                    .iter()
                    .map(|f| ReflectionHandle::Field(Arc::clone(ty), Arc::clone(f))),
            );
            handles.extend(
                ty.properties
                    .iter()
                    .map(|p| ReflectionHandle::Property(Arc::clone(ty), Arc::clone(p))),
            );
            handles.extend(
                ty.methods
                    .iter()
                    .map(|m| ReflectionHandle::Method(Arc::clone(ty), Arc::clone(m))),
            );
            handles.extend(
                ty.events
                    .iter()
                    .map(|e| ReflectionHandle::Event(Arc::clone(ty), Arc::clone(e))),
            );
        }
        handles
    }
}

impl TypeInfo {
    pub fn new(namespace: Option<&str>, name: impl Into<String>, category: TypeCategory) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
            name: name.into(),
            generic_arity: 0,
            category,
            declaring_type: None,
            fields: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn generic(mut self, arity: usize) -> Self {
        self.generic_arity = arity;
        self
    }

    pub fn nested_in(mut self, declaring_type: impl Into<String>) -> Self {
        self.declaring_type = Some(declaring_type.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(Arc::new(FieldInfo { name: name.into() }));
        self
    }

    pub fn with_event(mut self, name: impl Into<String>) -> Self {
        self.events.push(Arc::new(EventInfo { name: name.into() }));
        self
    }

    pub fn with_property(mut self, property: PropertyInfo) -> Self {
        self.properties.push(Arc::new(property));
        self
    }

    pub fn with_method(mut self, method: MethodInfo) -> Self {
        self.methods.push(Arc::new(method));
        self
    }
}

impl PropertyInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.parameters.push(ParameterInfo::new(name, ty));
        self
    }
}

impl MethodInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generic_arity: 0,
            parameters: Vec::new(),
            return_type: None,
            is_extension: false,
        }
    }

    pub fn generic(mut self, arity: usize) -> Self {
        self.generic_arity = arity;
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.parameters.push(ParameterInfo::new(name, ty));
        self
    }

    pub fn returning(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn extension(mut self) -> Self {
        self.is_extension = true;
        self
    }

    /// The declared type of the receiver, for extension methods.
    pub fn extension_receiver(&self) -> Option<&TypeRef> {
        if !self.is_extension {
            return None;
        }
        self.parameters.first().map(|p| &p.ty)
    }
}

impl ParameterInfo {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, arguments: Vec<TypeRef>) -> Self {
        TypeRef::Named {
            name: name.into(),
            arguments,
        }
    }

    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array {
            element: Box::new(element),
            rank: 1,
        }
    }

    pub fn by_ref(element: TypeRef) -> Self {
        TypeRef::ByRef {
            element: Box::new(element),
        }
    }
}

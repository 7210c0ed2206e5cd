//! Documentation comment identifiers.
//!
//! Compilers key every `<member>` of a documentation file with an ID string
//! made of a kind prefix and a fully qualified signature:
//!
//! | Member | Example |
//! |---|---|
//! | type | ``T:My.Collections.Bag`1`` |
//! | field | `F:My.Widget.count` |
//! | property / indexer | `P:My.Grid.Item(System.Int32,System.Int32)` |
//! | method | ``M:My.Widget.Map``1(System.Func{`0,``0})`` |
//! | constructor | `M:My.Widget.#ctor(System.String)` |
//! | conversion | `M:My.Money.op_Implicit(System.Decimal)~My.Money` |
//! | event | `E:My.Widget.Spun` |
//!
//! The functions here produce the same strings from reflection metadata. A
//! mismatch is not an error anywhere downstream, it just means a lookup
//! misses, so the format has to be exact.

use crate::metadata::{
    EventInfo, FieldInfo, MethodInfo, ParameterInfo, PropertyInfo, TypeInfo, TypeRef,
};

/// The type's name as used inside identifiers, without the `T:` prefix.
pub fn type_name(ty: &TypeInfo) -> String {
    let mut name = match (&ty.declaring_type, &ty.namespace) {
        (Some(outer), _) => format!("{}.{}", outer, ty.name),
        (None, Some(ns)) if !ns.is_empty() => format!("{}.{}", ns, ty.name),
        _ => ty.name.clone(),
    };
    if ty.generic_arity > 0 {
        name.push('`');
        name.push_str(&ty.generic_arity.to_string());
    }
    name
}

pub fn type_id(ty: &TypeInfo) -> String {
    format!("T:{}", type_name(ty))
}

pub fn field_id(ty: &TypeInfo, field: &FieldInfo) -> String {
    format!("F:{}.{}", type_name(ty), member_name(&field.name))
}

pub fn event_id(ty: &TypeInfo, event: &EventInfo) -> String {
    format!("E:{}.{}", type_name(ty), member_name(&event.name))
}

pub fn property_id(ty: &TypeInfo, property: &PropertyInfo) -> String {
    format!(
        "P:{}.{}{}",
        type_name(ty),
        member_name(&property.name),
        parameter_list(&property.parameters)
    )
}

pub fn method_id(ty: &TypeInfo, method: &MethodInfo) -> String {
    let mut id = format!("M:{}.{}", type_name(ty), member_name(&method.name));
    if method.generic_arity > 0 {
        id.push_str("``");
        id.push_str(&method.generic_arity.to_string());
    }
    id.push_str(&parameter_list(&method.parameters));

    let is_conversion = matches!(method.name.as_str(), "op_Implicit" | "op_Explicit");
    match &method.return_type {
        Some(ret) if is_conversion => {
            id.push('~');
            id.push_str(&parameter_type(ret));
        }
        _ => {}
    }
    id
}

/// The identifier of the type a parameter is declared as.
///
/// By-ref parameters resolve to the referenced type. Constructed generic
/// types resolve to their generic definition (``T:System.Nullable`1``).
/// Arrays, pointers and generic parameters have no type of their own; they
/// are rendered with the parameter encoding behind a `T:` prefix.
pub fn declared_type_id(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Named { name, arguments } if arguments.is_empty() => format!("T:{}", name),
        TypeRef::Named { name, arguments } => format!("T:{}`{}", name, arguments.len()),
        TypeRef::ByRef { element } => declared_type_id(element),
        other => format!("T:{}", parameter_type(other)),
    }
}

/// Encode a type as it appears in an identifier's parameter list.
pub fn parameter_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Named { name, arguments } if arguments.is_empty() => name.clone(),
        TypeRef::Named { name, arguments } => {
            let args: Vec<String> = arguments.iter().map(parameter_type).collect();
            format!("{}{{{}}}", name, args.join(","))
        }
        TypeRef::Array { element, rank } => {
            let dims = if *rank <= 1 {
                String::new()
            } else {
                vec!["0:"; *rank].join(",")
            };
            format!("{}[{}]", parameter_type(element), dims)
        }
        TypeRef::ByRef { element } => format!("{}@", parameter_type(element)),
        TypeRef::Pointer { element } => format!("{}*", parameter_type(element)),
        TypeRef::TypeParameter { position } => format!("`{}", position),
        TypeRef::MethodTypeParameter { position } => format!("``{}", position),
    }
}

fn parameter_list(parameters: &[ParameterInfo]) -> String {
    if parameters.is_empty() {
        return String::new();
    }
    let types: Vec<String> = parameters.iter().map(|p| parameter_type(&p.ty)).collect();
    format!("({})", types.join(","))
}

/// Dots inside member names (`.ctor`, explicit interface implementations)
/// become `#`.
fn member_name(name: &str) -> String {
    name.replace('.', "#")
}

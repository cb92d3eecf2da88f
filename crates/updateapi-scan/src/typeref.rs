//! Closed shape classification for declared types.
//!
//! Field classification and ack resolution both work over [`TypeShape`]
//! rather than raw `syn` types, so the "is this transportable" decision is a
//! single match instead of duck-typing scattered across the scanners.

use quote::quote;
use syn::{GenericArgument, PathArguments, Type};
use updateapi_schema::ScalarKind;

/// The shapes the scanners know how to handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TypeShape {
    Scalar(ScalarKind),
    /// A reference to a declared record or enum; qualified paths are reduced
    /// to their final segment.
    Named(String),
    Array(Box<TypeShape>),
    Optional(Box<TypeShape>),
    Unsupported,
}

pub(crate) fn shape_of(ty: &Type) -> TypeShape {
    let Type::Path(type_path) = ty else {
        return TypeShape::Unsupported;
    };
    if type_path.qself.is_some() {
        return TypeShape::Unsupported;
    }
    let Some(segment) = type_path.path.segments.last() else {
        return TypeShape::Unsupported;
    };

    match segment.ident.to_string().as_str() {
        "String" => TypeShape::Scalar(ScalarKind::String),
        "bool" => TypeShape::Scalar(ScalarKind::Boolean),
        "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" | "u64" | "f32" | "f64" => {
            TypeShape::Scalar(ScalarKind::Number)
        }
        "Vec" => match generic_arg(&segment.arguments) {
            Some(inner) => TypeShape::Array(Box::new(shape_of(inner))),
            None => TypeShape::Unsupported,
        },
        "Option" => match generic_arg(&segment.arguments) {
            Some(inner) => TypeShape::Optional(Box::new(shape_of(inner))),
            None => TypeShape::Unsupported,
        },
        name => {
            if segment.arguments.is_empty() {
                TypeShape::Named(name.to_string())
            } else {
                TypeShape::Unsupported
            }
        }
    }
}

/// The single generic type argument of `Vec<T>`/`Option<T>`, if well-formed.
fn generic_arg(arguments: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first() {
        Some(GenericArgument::Type(inner)) => Some(inner),
        _ => None,
    }
}

/// Whether a type is a multi-member wrapper that can never be an ack.
pub(crate) fn is_multi_member(ty: &Type) -> bool {
    if matches!(ty, Type::Tuple(t) if !t.elems.is_empty()) {
        return true;
    }
    let Type::Path(type_path) = ty else {
        return false;
    };
    type_path
        .path
        .segments
        .last()
        .is_some_and(|s| s.ident == "Result")
}

/// Render a type for diagnostics.
pub(crate) fn render_type(ty: &Type) -> String {
    quote!(#ty).to_string()
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn shape(src: &str) -> TypeShape {
        shape_of(&syn::parse_str::<Type>(src).unwrap())
    }

    #[test]
    fn shape_of___classifies_scalars() {
        assert_eq!(shape("String"), TypeShape::Scalar(ScalarKind::String));
        assert_eq!(shape("bool"), TypeShape::Scalar(ScalarKind::Boolean));
        assert_eq!(shape("u32"), TypeShape::Scalar(ScalarKind::Number));
        assert_eq!(shape("f64"), TypeShape::Scalar(ScalarKind::Number));
    }

    #[test]
    fn shape_of___qualified_name___keeps_final_segment() {
        assert_eq!(
            shape("common::geo::Location"),
            TypeShape::Named("Location".to_string())
        );
    }

    #[test]
    fn shape_of___vec_and_option___recurse() {
        assert_eq!(
            shape("Option<Vec<String>>"),
            TypeShape::Optional(Box::new(TypeShape::Array(Box::new(TypeShape::Scalar(
                ScalarKind::String
            )))))
        );
    }

    #[test]
    fn shape_of___references_and_generics___are_unsupported() {
        assert_eq!(shape("&'static str"), TypeShape::Unsupported);
        assert_eq!(shape("HashMap<String, String>"), TypeShape::Unsupported);
        assert_eq!(shape("(String, u32)"), TypeShape::Unsupported);
    }

    #[test]
    fn is_multi_member___flags_result_and_tuples() {
        assert!(is_multi_member(&syn::parse_str("Result<String, Error>").unwrap()));
        assert!(is_multi_member(&syn::parse_str("(String, u32)").unwrap()));
        assert!(!is_multi_member(&syn::parse_str("Option<String>").unwrap()));
    }
}

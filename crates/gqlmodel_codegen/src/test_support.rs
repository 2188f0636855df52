//! Schema builders for tests.

use gqlmodel_schema::{EnumValue, Field, FullType, InputValue, Schema, TypeKind, TypeRef};

pub(crate) fn schema(types: Vec<FullType>) -> Schema {
    Schema {
        types,
        ..Schema::default()
    }
}

pub(crate) fn field(name: &str, ty: TypeRef) -> Field {
    Field::new(name, ty)
}

pub(crate) fn scalar(name: &str) -> FullType {
    FullType::new(TypeKind::Scalar, name)
}

pub(crate) fn object(name: &str, fields: Vec<Field>) -> FullType {
    FullType {
        fields: Some(fields),
        interfaces: Some(Vec::new()),
        ..FullType::new(TypeKind::Object, name)
    }
}

pub(crate) fn input_object(name: &str, fields: Vec<InputValue>) -> FullType {
    FullType {
        input_fields: Some(fields),
        ..FullType::new(TypeKind::InputObject, name)
    }
}

pub(crate) fn interface(name: &str, fields: Vec<Field>) -> FullType {
    FullType {
        fields: Some(fields),
        possible_types: Some(Vec::new()),
        ..FullType::new(TypeKind::Interface, name)
    }
}

pub(crate) fn enumeration(name: &str, values: &[&str]) -> FullType {
    FullType {
        enum_values: Some(values.iter().copied().map(EnumValue::new).collect()),
        ..FullType::new(TypeKind::Enum, name)
    }
}

use apollo_compiler::{
    Name,
    ast::{FieldDefinition, InputValueDefinition, Type},
    schema::ExtendedType,
};

/// A field of an object, interface or input object type
pub(crate) struct SchemaField<'a> {
    pub(crate) name: &'a Name,
    pub(crate) ty: &'a Type,
    pub(crate) description: Option<&'a str>,
}

impl<'a> From<&'a FieldDefinition> for SchemaField<'a> {
    fn from(field: &'a FieldDefinition) -> Self {
        Self {
            name: &field.name,
            ty: &field.ty,
            description: field.description.as_deref(),
        }
    }
}

impl<'a> From<&'a InputValueDefinition> for SchemaField<'a> {
    fn from(field: &'a InputValueDefinition) -> Self {
        Self {
            name: &field.name,
            ty: &field.ty,
            description: field.description.as_deref(),
        }
    }
}

/// The fields of a type in declaration order. Scalars, enums and unions have none.
pub(crate) fn fields_of(ty: &ExtendedType) -> Vec<SchemaField<'_>> {
    match ty {
        ExtendedType::Object(object) => object
            .fields
            .values()
            .map(|field| SchemaField::from(&*field.node))
            .collect(),
        ExtendedType::Interface(interface) => interface
            .fields
            .values()
            .map(|field| SchemaField::from(&*field.node))
            .collect(),
        ExtendedType::InputObject(input) => input
            .fields
            .values()
            .map(|field| SchemaField::from(&*field.node))
            .collect(),
        ExtendedType::Scalar(_) | ExtendedType::Union(_) | ExtendedType::Enum(_) => Vec::new(),
    }
}

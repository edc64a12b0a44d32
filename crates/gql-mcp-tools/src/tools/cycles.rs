use std::collections::HashSet;

use apollo_compiler::{Name, Schema, ast::OperationType};
use tracing::debug;

use super::fields::{SchemaField, fields_of};

/// The set of types whose fields can reach themselves.
///
/// A type is cyclic when a walk starting at one of its fields meets the same
/// field name twice. Only names are compared, so two unrelated types that
/// share a field name along a walk are reported as cyclic too. Root operation
/// types and introspection types are never walked.
#[derive(Debug, Default, Clone)]
pub struct CycleTable {
    cyclic: HashSet<Name>,
}

impl CycleTable {
    pub fn build(schema: &Schema) -> Self {
        let roots: Vec<&Name> = [OperationType::Query, OperationType::Mutation]
            .into_iter()
            .filter_map(|operation| schema.root_operation(operation))
            .collect();

        let cyclic: HashSet<Name> = schema
            .types
            .iter()
            .filter(|(name, _)| !name.as_str().starts_with("__") && !roots.contains(name))
            .filter(|(_, ty)| {
                fields_of(ty)
                    .iter()
                    .any(|field| has_cycle(field, &mut HashSet::new(), schema))
            })
            .map(|(name, _)| name.clone())
            .collect();

        debug!(count = cyclic.len(), "Detected cyclic types");
        Self { cyclic }
    }

    pub fn is_cyclic(&self, type_name: &str) -> bool {
        self.cyclic.contains(type_name)
    }
}

/// Walk from a field into the fields of its type. The set of seen names lives
/// for the whole walk, so every field name is entered at most once.
fn has_cycle<'a>(field: &SchemaField<'a>, seen: &mut HashSet<&'a str>, schema: &'a Schema) -> bool {
    if !seen.insert(field.name.as_str()) {
        return true;
    }

    let Some(ty) = schema.types.get(field.ty.inner_named_type()) else {
        return false;
    };
    fields_of(ty)
        .iter()
        .any(|field| has_cycle(field, seen, schema))
}

//! Operation document synthesis
//!
//! Builds the document sent when a tool is invoked. The selection set covers
//! every field reachable from the root field's type, one field per line and
//! indented with tabs. Types flagged by the [`CycleTable`] are expanded only
//! once per document.

use std::collections::HashSet;

use apollo_compiler::{
    Name, Schema,
    ast::{FieldDefinition, OperationType, Type},
    schema::ExtendedType,
};

use super::cycles::CycleTable;
use super::fields::{SchemaField, fields_of};
use super::{lookup, operation_keyword};
use crate::errors::ToolError;

/// Depth of the fields selected directly on the root field
const ROOT_SELECTION_DEPTH: usize = 2;

pub(crate) fn operation_document(
    field: &FieldDefinition,
    operation: OperationType,
    schema: &Schema,
    cycles: &CycleTable,
) -> Result<String, ToolError> {
    let (variables, arguments) = if field.arguments.is_empty() {
        (String::new(), String::new())
    } else {
        let variables = field
            .arguments
            .iter()
            .map(|argument| {
                let ty: &Type = &argument.ty;
                format!("${}: {ty}", argument.name)
            })
            .collect::<Vec<_>>();
        let arguments = field
            .arguments
            .iter()
            .map(|argument| format!("{0}: ${0}", argument.name))
            .collect::<Vec<_>>();
        (
            format!("({})", variables.join(", ")),
            format!("({})", arguments.join(", ")),
        )
    };

    let mut visited = HashSet::new();
    let selection = SelectionWriter { schema, cycles }
        .selection_set(&field.ty, ROOT_SELECTION_DEPTH, &mut visited)?
        .unwrap_or_else(|| format!("{{\n{}\t}}", line(ROOT_SELECTION_DEPTH, "__typename")));

    let mut document = format!(
        "{} {}{variables} {{\n\t{}{arguments}",
        operation_keyword(operation),
        field.name,
        field.name,
    );
    if !selection.is_empty() {
        document.push(' ');
        document.push_str(&selection);
    }
    document.push_str("\n}");

    Ok(document)
}

struct SelectionWriter<'a> {
    schema: &'a Schema,
    cycles: &'a CycleTable,
}

impl SelectionWriter<'_> {
    /// Whether a type has already been expanded in this document and must not
    /// be expanded again. Root operation types never appear in the cycle
    /// table, so they are cut on their second occurrence too.
    fn is_truncated(&self, name: &Name, visited: &HashSet<Name>) -> bool {
        visited.contains(name) && (self.cycles.is_cyclic(name.as_str()) || self.is_root(name))
    }

    fn is_root(&self, name: &Name) -> bool {
        [
            OperationType::Query,
            OperationType::Mutation,
            OperationType::Subscription,
        ]
        .into_iter()
        .any(|operation| self.schema.root_operation(operation) == Some(name))
    }

    /// The braced selection set for a type, with its fields at `depth` tabs.
    /// Leaf types have an empty selection set. `None` means the type has
    /// fields but every one of them was truncated.
    fn selection_set(
        &self,
        ty: &Type,
        depth: usize,
        visited: &mut HashSet<Name>,
    ) -> Result<Option<String>, ToolError> {
        let name = ty.inner_named_type();
        visited.insert(name.clone());

        let body = match lookup(self.schema, name)? {
            ExtendedType::Union(union) => {
                let mut body = line(depth, "__typename");
                for member in union.members.iter() {
                    let member_type = lookup(self.schema, &member.name)?;
                    let fields = self.fields(&fields_of(member_type), depth + 1, visited)?;
                    if fields.is_empty() {
                        continue;
                    }
                    body.push_str(&line(depth, &format!("... on {} {{", member.name)));
                    body.push_str(&fields);
                    body.push_str(&line(depth, "}"));
                }
                body
            }
            other => {
                let fields = fields_of(other);
                if fields.is_empty() {
                    return Ok(Some(String::new()));
                }
                let body = self.fields(&fields, depth, visited)?;
                if body.is_empty() {
                    return Ok(None);
                }
                body
            }
        };

        Ok(Some(format!("{{\n{body}{}}}", tabs(depth.saturating_sub(1)))))
    }

    /// One line per selectable field. Fields whose type is truncated, or
    /// whose own selection set ends up empty, are left out.
    fn fields(
        &self,
        fields: &[SchemaField<'_>],
        depth: usize,
        visited: &mut HashSet<Name>,
    ) -> Result<String, ToolError> {
        let mut selections = String::new();
        for field in fields {
            if self.is_truncated(field.ty.inner_named_type(), visited) {
                continue;
            }

            let Some(selection) = self.selection_set(field.ty, depth + 1, visited)? else {
                continue;
            };
            selections.push_str(&tabs(depth));
            selections.push_str(field.name.as_str());
            if !selection.is_empty() {
                selections.push(' ');
                selections.push_str(&selection);
            }
            selections.push('\n');
        }
        Ok(selections)
    }
}

fn tabs(depth: usize) -> String {
    "\t".repeat(depth)
}

fn line(depth: usize, text: &str) -> String {
    format!("{}{text}\n", tabs(depth))
}

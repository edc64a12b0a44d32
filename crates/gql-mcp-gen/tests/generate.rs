//! Integration test: generate the manifest of a federated schema directory.

use std::path::PathBuf;

use gql_mcp_gen::{GenError, Generator, generator::MANIFEST_FILE};
use serde_json::{Value, json};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn generate() -> (tempfile::TempDir, Vec<gql_mcp_tools::Tool>, Value) {
    let output = tempfile::tempdir().unwrap();
    let tools = Generator::new("bookstore", fixture("bookstore"), output.path())
        .run()
        .unwrap();
    let manifest = std::fs::read_to_string(output.path().join(MANIFEST_FILE)).unwrap();
    let manifest = serde_json::from_str(&manifest).unwrap();
    (output, tools, manifest)
}

#[test]
fn federated_schema_directory_compiles() {
    let (_output, tools, _) = generate();

    let names: Vec<_> = tools.iter().map(|tool| tool.name.as_str()).collect();
    assert_eq!(names, ["books", "reviews", "rateBook"]);
}

#[test]
fn manifest_carries_query_documents() {
    let (_output, _, manifest) = generate();

    let books = &manifest[0];
    assert_eq!(books["description"], "Lists books matching a filter.");
    assert_eq!(
        books["query"],
        "query books($filter: BookFilter, $first: Int) {\n\
         \tbooks(filter: $filter, first: $first) {\n\
         \t\tid\n\
         \t\ttitle\n\
         \t\tauthor {\n\
         \t\t\tid\n\
         \t\t\tname\n\
         \t\t}\n\
         \t\tgenre\n\
         \t}\n\
         }"
    );
}

#[test]
fn manifest_carries_input_schemas() {
    let (_output, _, manifest) = generate();

    assert_eq!(
        manifest[0]["input_schema"],
        json!({
            "type": "object",
            "properties": {
                "filter": {
                    "type": "object",
                    "properties": {
                        "genre": {
                            "type": "string",
                            "description": "Only books of this genre.",
                            "enum": ["FICTION", "HISTORY"]
                        },
                        "titleContains": { "type": "string" }
                    }
                },
                "first": { "type": "number" }
            }
        })
    );
    assert_eq!(
        manifest[2]["input_schema"]["required"],
        json!(["bookId", "rating"])
    );
    assert_eq!(manifest[2]["operation"], "mutation");
}

#[test]
fn missing_schema_directory_fails() {
    let output = tempfile::tempdir().unwrap();

    let err = Generator::new("missing", fixture("missing"), output.path())
        .run()
        .unwrap_err();

    assert!(matches!(err, GenError::ReadDir { .. }));
    assert!(!output.path().join(MANIFEST_FILE).exists());
}

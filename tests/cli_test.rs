//! CLI integration tests for raml-views binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("raml-views"))
}

// Helper to create a temp input file
fn write_temp_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const USERS_TREE: &str = r#"{
    "resources": {
        "/users": {
            "methods": { "get": {}, "post": {} },
            "resources": {
                "/{id}": { "methods": { "get": {}, "put": {}, "delete": {} } }
            }
        }
    }
}"#;

mod plan_command {
    use super::*;

    #[test]
    fn basic_plan() {
        let dir = TempDir::new().unwrap();
        let tree = write_temp_file(&dir, "api.json", USERS_TREE);

        cmd()
            .args(["plan", tree.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""model_name":"User""#))
            .stdout(predicate::str::contains(
                r#""view_methods":["create","delete","index","show","update"]"#,
            ));
    }

    #[test]
    fn plan_with_method_overrides() {
        let dir = TempDir::new().unwrap();
        let tree = write_temp_file(&dir, "api.json", USERS_TREE);
        let methods = write_temp_file(
            &dir,
            "methods.json",
            r#"{"collection_methods": {"get": "list"}, "item_methods": {"get": "retrieve"}}"#,
        );

        cmd()
            .args([
                "plan",
                tree.to_str().unwrap(),
                "--methods",
                methods.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                r#""view_methods":["list","retrieve"]"#,
            ));
    }

    #[test]
    fn plan_with_pretty() {
        let dir = TempDir::new().unwrap();
        let tree = write_temp_file(&dir, "api.json", USERS_TREE);

        cmd()
            .args(["plan", tree.to_str().unwrap(), "--pretty"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[\n"));
    }

    #[test]
    fn plan_with_output_file() {
        let dir = TempDir::new().unwrap();
        let tree = write_temp_file(&dir, "api.json", USERS_TREE);
        let output = dir.path().join("plan.json");

        cmd()
            .args([
                "plan",
                tree.to_str().unwrap(),
                "--output",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains(r#""route_name":"users""#));
    }

    #[test]
    fn missing_tree_exits_3() {
        cmd()
            .args(["plan", "/nonexistent/api.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("file not found"));
    }

    #[test]
    fn malformed_tree_exits_2() {
        let dir = TempDir::new().unwrap();
        let tree = write_temp_file(&dir, "api.json", r#"{"resources": ["/users"]}"#);

        cmd()
            .args(["plan", tree.to_str().unwrap()])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("invalid document"));
    }

    #[test]
    fn broken_body_schema_exits_2() {
        let dir = TempDir::new().unwrap();
        let tree = write_temp_file(
            &dir,
            "api.json",
            r#"{
                "resources": {
                    "/users": {
                        "methods": {
                            "post": { "body": { "application/json": { "schema": "{\"type\": \"object\"}" } } }
                        }
                    }
                }
            }"#,
        );

        cmd()
            .args(["plan", tree.to_str().unwrap()])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("post users"));
    }

    #[test]
    fn plan_from_url() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(USERS_TREE)
            .create();

        cmd()
            .args(["plan", &format!("{}/api.json", server.url())])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""uid":"users""#));

        mock.assert();
    }
}

mod model_name_command {
    use super::*;

    #[test]
    fn root_route() {
        cmd()
            .args(["model-name", "users"])
            .assert()
            .success()
            .stdout("User\n");
    }

    #[test]
    fn nested_route() {
        cmd()
            .args(["model-name", "categories", "--parent", "stories"])
            .assert()
            .success()
            .stdout("StoriesCategory\n");
    }
}

mod fields_command {
    use super::*;

    const SCHEMA: &str = r#"{
        "type": "object",
        "properties": { "username": { "required": true, "type": "string" } }
    }"#;

    #[test]
    fn json_fields() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "user.json", SCHEMA);

        cmd()
            .args(["fields", schema.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                r#"{"username":{"required":true,"type":"string"}}"#,
            ));
    }

    #[test]
    fn xml_fields_are_null() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "user.json", SCHEMA);

        cmd()
            .args([
                "fields",
                schema.to_str().unwrap(),
                "--content-type",
                "text/xml",
            ])
            .assert()
            .success()
            .stdout("null\n")
            .stderr(predicate::str::contains("not available"));
    }

    #[test]
    fn unknown_content_type_exits_2() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "user.json", SCHEMA);

        cmd()
            .args([
                "fields",
                schema.to_str().unwrap(),
                "--content-type",
                "application/yaml",
            ])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("unsupported content type"));
    }

    #[test]
    fn schema_without_properties_exits_2() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "empty.json", r#"{"type": "object"}"#);

        cmd()
            .args(["fields", schema.to_str().unwrap()])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("properties"));
    }
}

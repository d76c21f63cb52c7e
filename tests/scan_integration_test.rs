use opscan::core::{ConfigProvider, Pipeline};
use opscan::{ScanEngine, ScanError, ScanPipeline};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tokio_test::assert_ok;

struct TestConfig {
    types_dir: String,
}

impl ConfigProvider for TestConfig {
    fn types_dir(&self) -> &str {
        &self.types_dir
    }
    fn client_file(&self) -> &str {
        "ServiceClient.d.ts"
    }
    fn client_interface(&self) -> &str {
        "ServiceClient"
    }
    fn models_subdir(&self) -> &str {
        "models"
    }
    fn model_prefix(&self) -> &str {
        "models_"
    }
}

fn write_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Lays out a minimal generated-SDK declaration tree and returns the engine
/// scanning it.
fn engine_over(
    temp: &TempDir,
    client: &str,
    models: &[(&str, &str)],
) -> ScanEngine<ScanPipeline<opscan::LocalStore, TestConfig>> {
    write_file(temp.path(), "ServiceClient.d.ts", client);
    for (name, content) in models {
        write_file(&temp.path().join("models"), name, content);
    }
    let config = TestConfig {
        types_dir: temp.path().to_string_lossy().into_owned(),
    };
    ScanEngine::new(ScanPipeline::new(opscan::LocalStore::new(), config))
}

#[tokio::test]
async fn test_full_scan_over_real_files() {
    let temp = TempDir::new().unwrap();
    let engine = engine_over(
        &temp,
        r#"
        import { CreateUserRequest, CreateUserResponse } from "./models/models_0";
        export interface ServiceClient {
            createUser(args: CreateUserRequest): Promise<CreateUserResponse>;
            deleteUser(args: DeleteUserRequest): Promise<void>;
            listUsers(args: ListUsersRequest): Promise<ListUsersResponse>;
            deleteUser(args: DeleteUserRequest, cb: () => void): void;
        }
        "#,
        &[
            (
                "models_0.d.ts",
                r#"
                export interface CreateUserRequest { Username: string; }
                export interface CreateUserResponse { User?: UserType; }
                export interface ListUsersRequest { Limit?: number; }
                "#,
            ),
            (
                "models_1.d.ts",
                r#"
                export interface DeleteUserRequest { Username: string; }
                export interface ListUsersResponse { Users?: UserType[]; }
                "#,
            ),
            // Not a model file; must be ignored by the prefix filter.
            ("index.d.ts", "export interface Unrelated { X: string; }"),
        ],
    );

    let records = assert_ok!(engine.run().await);

    let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["createUser", "deleteUser", "listUsers"]);

    assert_eq!(records[0].pascal_name, "CreateUser");
    assert_eq!(records[0].request.name, "CreateUserRequest");
    assert!(records[0].response.is_some());

    // deleteUser has no DeleteUserResponse declaration; that is not an error.
    assert!(records[1].response.is_none());

    assert!(records[2]
        .request
        .module_path
        .ends_with("models/models_0.d.ts"));
    assert!(records[2]
        .response
        .as_ref()
        .unwrap()
        .module_path
        .ends_with("models/models_1.d.ts"));
}

#[tokio::test]
async fn test_duplicate_declaration_resolves_to_last_sorted_file() {
    let temp = TempDir::new().unwrap();
    let engine = engine_over(
        &temp,
        "export interface ServiceClient { ping(args: PingRequest): void; }",
        &[
            ("models_0.d.ts", "export interface PingRequest { A: string; }"),
            ("models_2.d.ts", "export interface PingRequest { C: string; }"),
            ("models_1.d.ts", "export interface PingRequest { B: string; }"),
        ],
    );

    let records = assert_ok!(engine.run().await);

    assert_eq!(records.len(), 1);
    assert!(records[0]
        .request
        .module_path
        .ends_with("models/models_2.d.ts"));
}

#[tokio::test]
async fn test_missing_request_declaration_fails_the_run() {
    let temp = TempDir::new().unwrap();
    let engine = engine_over(
        &temp,
        r#"
        export interface ServiceClient {
            create(args: CreateRequest): void;
            delete(args: DeleteRequest): void;
        }
        "#,
        &[("models_0.d.ts", "export interface CreateRequest {}")],
    );

    let err = engine.run().await.unwrap_err();
    match err {
        ScanError::MissingDefinitionError { operation } => assert_eq!(operation, "delete"),
        other => panic!("expected MissingDefinitionError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_client_interface_fails_the_run() {
    let temp = TempDir::new().unwrap();
    let engine = engine_over(
        &temp,
        "export interface SomeOtherInterface { x: string; }",
        &[("models_0.d.ts", "export interface XRequest {}")],
    );

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, ScanError::ClientNotFoundError { .. }));
}

#[tokio::test]
async fn test_malformed_model_file_fails_the_run() {
    let temp = TempDir::new().unwrap();
    let engine = engine_over(
        &temp,
        "export interface ServiceClient { ping(args: PingRequest): void; }",
        &[
            ("models_0.d.ts", "export interface PingRequest {}"),
            ("models_1.d.ts", "export interface Truncated {"),
        ],
    );

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, ScanError::ParseError { .. }));
}

#[tokio::test]
async fn test_missing_models_directory_fails_the_run() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "ServiceClient.d.ts",
        "export interface ServiceClient { ping(args: PingRequest): void; }",
    );
    let config = TestConfig {
        types_dir: temp.path().to_string_lossy().into_owned(),
    };
    let engine = ScanEngine::new(ScanPipeline::new(opscan::LocalStore::new(), config));

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, ScanError::IoError(_)));
}

#[tokio::test]
async fn test_pipeline_phases_compose_like_the_engine() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "ServiceClient.d.ts",
        "export interface ServiceClient { signUp(args: SignUpRequest): Promise<SignUpResponse>; }",
    );
    write_file(
        &temp.path().join("models"),
        "models_0.d.ts",
        r#"
        export interface SignUpRequest { Username: string; Password: string; }
        export interface SignUpResponse { UserConfirmed: boolean; }
        "#,
    );
    let config = TestConfig {
        types_dir: temp.path().to_string_lossy().into_owned(),
    };
    let pipeline = ScanPipeline::new(opscan::LocalStore::new(), config);

    let operations = assert_ok!(pipeline.discover().await);
    assert_eq!(operations, vec!["signUp"]);

    let table = assert_ok!(pipeline.collect().await);
    assert_eq!(table.len(), 2);

    let records = assert_ok!(pipeline.link(operations, table).await);
    assert_eq!(records[0].pascal_name, "SignUp");
    let request_members: Vec<_> = records[0]
        .request
        .node
        .members
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(request_members, vec!["Username", "Password"]);
}

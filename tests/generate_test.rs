use postwright::commands::{GenerateCommandArgs, execute_generate};
use postwright::config::EnvConfig;
use postwright::PostwrightError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const COLLECTION: &str = "tests/fixtures/workshop.postman_collection.json";
const VARIABLES: &str = "tests/fixtures/env.json";

fn args<'a>(output_dir: &'a Path, variables: Option<&'a Path>) -> GenerateCommandArgs<'a> {
    GenerateCommandArgs {
        collection_path: Path::new(COLLECTION),
        variables_path: variables,
        output_dir,
        dry_run: false,
    }
}

#[test]
fn generates_one_file_per_request_mirroring_folders() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("tests");

    let summary = execute_generate(args(&out, Some(Path::new(VARIABLES))), &EnvConfig::default()).unwrap();

    assert_eq!(summary.collection_name.as_deref(), Some("Workshop Regresion"));
    assert_eq!(
        summary.schema.as_deref(),
        Some("https://schema.getpostman.com/json/collection/v2.1.0/collection.json")
    );

    let paths: Vec<_> = summary
        .tests
        .iter()
        .map(|t| t.path.strip_prefix(&out).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        paths,
        vec![
            Path::new("insurance_policy_regresion/insured_policy_cod_int_ok.spec.js"),
            Path::new("insurance_policy_regresion/insured_policy_cod_int_not_found.spec.js"),
            Path::new("group_policy/group_policy_by_policy_number.spec.js"),
            Path::new("health_check.spec.js"),
        ]
    );

    for test in &summary.tests {
        assert_eq!(fs::read_to_string(&test.path).unwrap(), test.contents);
    }
}

#[test]
fn rendered_test_contains_resolved_request_and_assertions() {
    let dir = TempDir::new().unwrap();
    let summary = execute_generate(args(dir.path(), Some(Path::new(VARIABLES))), &EnvConfig::default()).unwrap();

    let ok = &summary.tests[0].contents;
    assert!(ok.contains("test('Insured policy cod_int OK', async ({ request }) => {"));
    assert!(ok.contains(
        "const requestUrl = 'https://api.example.test/workshop/v1/insurance_policies-photos/search?thirdPartyInternalId=330749452011&pageNumber=1&pageSize=10';"
    ));
    assert!(ok.contains("\"Authorization\": \"Bearer tok123\""));
    assert!(ok.contains("await test.step(\"Status code is 200 (OK)\", async () => {"));
    assert!(ok.contains("expect(response.status()).toBe(200);"));
    assert!(ok.contains("const jsonData = await response.json();"));
    assert!(ok.contains("expect(elapsedMs).to.be.below(2000);"));
    assert!(!ok.contains("pm."));

    let not_found = &summary.tests[1].contents;
    assert!(not_found.contains("\"Authorization\": \"Basic dXNlcjpwYXNz\""));
    assert!(!not_found.contains("Bearer"));
    assert!(not_found.contains("environment.set(\"lastStatus\", response.status());"));
    assert!(!not_found.contains("pm."));

    let group = &summary.tests[2].contents;
    assert!(group.contains(
        "await request.post(`https://api.example.test/workshop/v1/group-policies/GP-0042`, { headers })"
    ));
    assert!(!group.contains("test.step"));
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let variables = Some(Path::new(VARIABLES));

    let first = execute_generate(args(dir.path(), variables), &EnvConfig::default()).unwrap();
    let before: Vec<Vec<u8>> = first.tests.iter().map(|t| fs::read(&t.path).unwrap()).collect();

    let second = execute_generate(args(dir.path(), variables), &EnvConfig::default()).unwrap();
    let after: Vec<Vec<u8>> = second.tests.iter().map(|t| fs::read(&t.path).unwrap()).collect();

    assert_eq!(before, after);
}

#[test]
fn environment_defaults_are_used_without_variables_file() {
    let dir = TempDir::new().unwrap();
    let env = EnvConfig {
        endpoint: "http://localhost:9000".to_string(),
        access_token: String::new(),
    };

    let summary = execute_generate(args(dir.path(), None), &env).unwrap();

    let health = &summary.tests[3].contents;
    assert!(health.contains("const requestUrl = 'http://localhost:9000/health';"));
    assert!(health.contains("const headers = {};"));
    assert!(health.contains("const vars = {\n  \"endpoint\": \"http://localhost:9000\",\n  \"ACCESS_TOKEN\": \"\"\n};"));
}

#[test]
fn malformed_variables_file_aborts() {
    let dir = TempDir::new().unwrap();
    let vars_path = dir.path().join("env.json");
    fs::write(&vars_path, "{ not json").unwrap();
    let out = dir.path().join("out");

    let result = execute_generate(args(&out, Some(&vars_path)), &EnvConfig::default());

    assert!(matches!(result, Err(PostwrightError::VariablesLoadError(_))));
    assert!(!out.exists());
}

#[test]
fn invalid_node_aborts_before_writing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    let args = GenerateCommandArgs {
        collection_path: Path::new("tests/fixtures/invalid_node.postman_collection.json"),
        variables_path: None,
        output_dir: &out,
        dry_run: false,
    };

    let result = execute_generate(args, &EnvConfig::default());

    let message = result.unwrap_err().to_string();
    assert!(message.contains("/Folder/Orphan without request"), "unexpected message: {message}");
    assert!(!out.exists());
}

#[test]
fn dry_run_leaves_output_untouched() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    let args = GenerateCommandArgs {
        dry_run: true,
        ..args(&out, Some(Path::new(VARIABLES)))
    };

    let summary = execute_generate(args, &EnvConfig::default()).unwrap();

    assert_eq!(summary.tests.len(), 4);
    assert!(!out.exists());
}

//! End-to-end tests for patching a Podfile on disk

mod common;

use common::{MARKER, SIMPLE_PODFILE, TestProject};
use predicates::prelude::*;

const PODFILE_WITH_HOOK: &str = "\
target 'MyApp' do
end

pre_install do |installer|
  puts \"Existing pre_install\"
end
";

#[test]
fn test_apply_appends_hook() {
    let project = TestProject::with_podfile(SIMPLE_PODFILE);

    project
        .cmd()
        .args(["apply", "LibA", "LibB"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Patched"));

    let podfile = project.read_file("ios/Podfile");
    assert!(podfile.starts_with(SIMPLE_PODFILE));
    assert!(podfile.contains(MARKER));
    assert!(podfile.contains("pre_install do |installer|"));
    assert!(podfile.contains("if pod.name.eql?('LibA') || pod.name.eql?('LibB')"));
    assert!(podfile.contains("Pod::BuildType.static_library"));
    assert!(podfile.ends_with("end\n\n"));
}

#[test]
fn test_apply_extends_existing_hook() {
    let project = TestProject::with_podfile(PODFILE_WITH_HOOK);

    project.cmd().args(["apply", "LibA"]).assert().success();

    let podfile = project.read_file("ios/Podfile");
    assert_eq!(podfile.matches("pre_install do |installer|").count(), 1);

    let existing = podfile.find("Existing pre_install").unwrap();
    let marker = podfile.find(MARKER).unwrap();
    assert!(existing < marker);
    assert!(podfile.ends_with("    end\n  end\nend\n"));
}

#[test]
fn test_apply_twice_is_noop() {
    let project = TestProject::with_podfile(SIMPLE_PODFILE);

    project.cmd().args(["apply", "LibA"]).assert().success();
    let first = project.read_file("ios/Podfile");

    project
        .cmd()
        .args(["apply", "LibA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already patched"));
    assert_eq!(project.read_file("ios/Podfile"), first);
    assert_eq!(first.matches(MARKER).count(), 1);
}

#[test]
fn test_apply_verbose_reports_unmodified_podfile() {
    let project = TestProject::with_podfile(SIMPLE_PODFILE);

    project.cmd().args(["apply", "LibA"]).assert().success();
    project
        .cmd()
        .args(["apply", "LibA", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not modified"));
}

#[test]
fn test_apply_extends_hook_with_nested_loops() {
    let podfile = "\
pre_install do |installer|
  for pod in installer.pod_targets
    puts pod.name
  end
  while false do
    puts 1
  end
  return if installer.nil?
end
";
    let project = TestProject::with_podfile(podfile);

    project.cmd().args(["apply", "LibA"]).assert().success();

    let patched = project.read_file("ios/Podfile");
    let hook_end = podfile.len() - "end\n".len();
    assert!(patched.starts_with(&podfile[..hook_end]));
    assert!(patched[hook_end..].starts_with(&format!("\n  {MARKER}\n")));
}

#[test]
fn test_apply_warns_when_patch_lacks_new_library() {
    let project = TestProject::with_podfile(SIMPLE_PODFILE);

    project.cmd().args(["apply", "LibA"]).assert().success();
    project
        .cmd()
        .args(["apply", "LibA", "LibB"])
        .assert()
        .success()
        .stderr(predicate::str::contains("LibB"));
}

#[test]
fn test_apply_without_libraries_leaves_podfile() {
    let project = TestProject::with_podfile(SIMPLE_PODFILE);

    project
        .cmd()
        .arg("apply")
        .assert()
        .success()
        .stdout(predicate::str::contains("No libraries configured"));
    assert_eq!(project.read_file("ios/Podfile"), SIMPLE_PODFILE);
}

#[test]
fn test_apply_missing_podfile_warns_and_succeeds() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["apply", "LibA"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Podfile not found"));
    assert!(!project.file_exists("ios/Podfile"));
}

#[test]
fn test_apply_dry_run_prints_without_writing() {
    let project = TestProject::with_podfile(SIMPLE_PODFILE);

    project
        .cmd()
        .args(["apply", "LibA", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(MARKER))
        .stdout(predicate::str::contains("pod.name.eql?('LibA')"));
    assert_eq!(project.read_file("ios/Podfile"), SIMPLE_PODFILE);
}

#[test]
fn test_apply_modular_headers() {
    let project = TestProject::with_podfile(SIMPLE_PODFILE);

    project
        .cmd()
        .args(["apply", "LibA", "-m", "Firebase"])
        .assert()
        .success();

    let podfile = project.read_file("ios/Podfile");
    assert!(podfile.contains("modular_header_pods = ['Firebase']"));
    assert!(podfile.contains("set_use_modular_headers_for_pod(pod_name, true)"));
    assert!(podfile.contains("pod.name.eql?('LibA') || pod.name.eql?('Firebase')"));
}

#[test]
fn test_apply_reads_default_config() {
    let project = TestProject::with_podfile(SIMPLE_PODFILE);
    project.write_file(
        "podstatic.yaml",
        "libraries:\n  - LibA\n  - name: LibB\n    modularHeaders: true\n",
    );

    project.cmd().arg("apply").assert().success();

    let podfile = project.read_file("ios/Podfile");
    assert!(podfile.contains("pod.name.eql?('LibA') || pod.name.eql?('LibB')"));
    assert!(podfile.contains("modular_header_pods = ['LibB']"));
}

#[test]
fn test_apply_reads_json_config() {
    let project = TestProject::with_podfile(SIMPLE_PODFILE);
    project.write_file("static.json", r#"{"libraries": ["LibJson"]}"#);

    project
        .cmd()
        .args(["apply", "--config", "static.json"])
        .assert()
        .success();

    assert!(
        project
            .read_file("ios/Podfile")
            .contains("pod.name.eql?('LibJson')")
    );
}

#[test]
fn test_apply_missing_config_fails() {
    let project = TestProject::with_podfile(SIMPLE_PODFILE);

    project
        .cmd()
        .args(["apply", "--config", "missing.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
    assert_eq!(project.read_file("ios/Podfile"), SIMPLE_PODFILE);
}

#[test]
fn test_apply_invalid_config_fails() {
    let project = TestProject::with_podfile(SIMPLE_PODFILE);
    project.write_file("podstatic.yaml", "libraries: [unclosed");

    project
        .cmd()
        .args(["apply", "LibA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("podstatic.yaml"));
    assert_eq!(project.read_file("ios/Podfile"), SIMPLE_PODFILE);
}

#[test]
fn test_apply_custom_project_root() {
    let project = TestProject::new();
    project.write_file("native/Podfile", SIMPLE_PODFILE);

    project
        .cmd()
        .args(["-p", "native", "apply", "LibA"])
        .assert()
        .success();

    assert!(project.read_file("native/Podfile").contains(MARKER));
}

#[test]
fn test_apply_project_root_from_env() {
    let project = TestProject::new();
    project.write_file("native/Podfile", SIMPLE_PODFILE);

    project
        .cmd()
        .env("PODSTATIC_PROJECT_ROOT", project.path.join("native"))
        .args(["apply", "LibA"])
        .assert()
        .success();

    assert!(project.read_file("native/Podfile").contains(MARKER));
}

#[test]
fn test_apply_escapes_quotes() {
    let project = TestProject::with_podfile(SIMPLE_PODFILE);

    project
        .cmd()
        .args(["apply", "Lib'A"])
        .assert()
        .success();

    assert!(
        project
            .read_file("ios/Podfile")
            .contains(r"pod.name.eql?('Lib\'A')")
    );
}

#[test]
fn test_status_reports_patch_state() {
    let project = TestProject::with_podfile(SIMPLE_PODFILE);

    project
        .cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("not patched"));

    project.cmd().args(["apply", "LibA"]).assert().success();

    project
        .cmd()
        .args(["status", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("patched"))
        .stdout(predicate::str::contains("not patched").not())
        .stdout(predicate::str::contains("pre_install hook: lines 6-14"));
}

#[test]
fn test_status_missing_podfile() {
    let project = TestProject::new();

    project
        .cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Podfile not found"));
}

#[test]
fn test_preview_prints_hook() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["preview", "LibA", "-m", "LibB"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(MARKER))
        .stdout(predicate::str::contains("pre_install do |installer|"))
        .stdout(predicate::str::contains("modular_header_pods = ['LibB']"))
        .stdout(predicate::str::ends_with("  end\nend\n"));
}

#[test]
fn test_preview_without_libraries_warns() {
    let project = TestProject::new();

    project
        .cmd()
        .arg("preview")
        .assert()
        .success()
        .stderr(predicate::str::contains("No libraries given"));
}

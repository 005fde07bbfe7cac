//! End-to-end walk tests: discovery, skipping, counting, and the variables
//! observable by generator processes.

use helmgen::walk;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use tempfile::TempDir;

#[test]
fn executes_matching_files_and_ignores_others() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("match.yaml"), "# helm:generate true\n").unwrap();
    fs::write(dir.path().join("other.txt"), "no directive here\n").unwrap();

    assert_eq!(walk(dir.path()).unwrap(), 1);
}

#[test]
fn counts_matches_across_subdirectories() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.yaml"), "# helm:generate true\n").unwrap();
    fs::create_dir(dir.path().join("templates")).unwrap();
    fs::write(
        dir.path().join("templates").join("b.tpl"),
        "// helm:generate true\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("templates").join("c.tpl"),
        "/* helm:generate true */\n",
    )
    .unwrap();

    assert_eq!(walk(dir.path()).unwrap(), 3);
}

#[test]
fn skips_dot_and_underscore_directories() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("visible.yaml"), "# helm:generate true\n").unwrap();

    for hidden in [".hidden", "_partials"] {
        let sub = dir.path().join(hidden);
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("gen.yaml"), "# helm:generate true\n").unwrap();
    }

    // Nested under a visible directory, the rule still applies.
    let nested = dir.path().join("charts").join(".cache");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("gen.yaml"), "# helm:generate true\n").unwrap();

    assert_eq!(walk(dir.path()).unwrap(), 1);
}

#[test]
fn hidden_files_are_still_scanned() {
    // Only directories are subject to the skip rule.
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".dotfile"), "# helm:generate true\n").unwrap();

    assert_eq!(walk(dir.path()).unwrap(), 1);
}

#[test]
fn expands_directive_variables_before_execution() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("gen.yaml"),
        "// helm:generate touch $HELM_GENERATE_DIR/created.txt\n",
    )
    .unwrap();

    assert_eq!(walk(dir.path()).unwrap(), 1);
    assert!(dir.path().join("created.txt").exists());
}

#[test]
fn child_process_observes_directive_variables() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("dump-env.sh");
    fs::write(
        &script,
        concat!(
            "#!/bin/sh\n",
            "printenv HELM_GENERATE_COMMAND > \"$HELM_GENERATE_DIR/command.txt\"\n",
            "printenv HELM_GENERATE_FILE > \"$HELM_GENERATE_DIR/file.txt\"\n",
            "printenv HELM_GENERATE_COMMAND_EXPANDED > \"$HELM_GENERATE_DIR/expanded.txt\"\n",
        ),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    fs::write(
        dir.path().join("gen.yaml"),
        "# helm:generate $HELM_GENERATE_DIR/dump-env.sh\n",
    )
    .unwrap();

    assert_eq!(walk(dir.path()).unwrap(), 1);

    let read = |name: &str| fs::read_to_string(dir.path().join(name)).unwrap();
    assert_eq!(
        read("command.txt").trim_end(),
        "$HELM_GENERATE_DIR/dump-env.sh"
    );
    assert!(read("file.txt").trim_end().ends_with("gen.yaml"));
    assert_eq!(
        read("expanded.txt").trim_end(),
        script.to_string_lossy().as_ref()
    );
}

#[test]
fn walking_twice_is_idempotent() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.yaml"), "# helm:generate true\n").unwrap();
    fs::write(dir.path().join("b.yaml"), "// helm:generate true\n").unwrap();

    assert_eq!(walk(dir.path()).unwrap(), 2);
    assert_eq!(walk(dir.path()).unwrap(), 2);
}

#[test]
fn root_may_be_a_single_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("solo.yaml");
    fs::write(&path, "# helm:generate true\n").unwrap();

    assert_eq!(walk(&path).unwrap(), 1);
}

use assert_cmd::Command;
use predicates::prelude::predicate;
use rstest::{fixture, rstest};
use std::fs;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Empty home directory so a developer's own `~/.gitsim.json` is not picked up.
#[fixture]
fn home_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

fn gitsim(home: &TempDir) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("gitsim")?;
    cmd.env("HOME", home.path())
        .env_remove("GITSIM_LOG")
        .args(["--no-color", "--hash", "sequential"]);
    Ok(cmd)
}

#[rstest]
fn runs_command_lines_in_order(home_dir: TempDir) -> TestResult {
    let mut sut = gitsim(&home_dir)?;
    sut.args([
        "-c",
        "git init",
        "-c",
        "git add file.txt",
        "-c",
        "git commit -m \"first\"",
    ]);

    sut.assert()
        .success()
        .stdout("Initialized empty Git repository\nAdded file.txt to staging area\n[main 000000000001] first\n");

    Ok(())
}

#[rstest]
fn failures_are_printed_not_fatal(home_dir: TempDir) -> TestResult {
    let mut sut = gitsim(&home_dir)?;
    sut.args(["-c", "git status", "-c", "ls -la", "-c", "git init"]);

    sut.assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Not a git repository (use \"git init\" first)",
        ))
        .stdout(predicate::str::contains(
            "Error: This is a Git practice environment. Please use git commands.",
        ))
        .stdout(predicate::str::ends_with("Initialized empty Git repository\n"));

    Ok(())
}

#[rstest]
fn script_file_skips_comments_and_blank_lines(home_dir: TempDir) -> TestResult {
    let script = home_dir.path().join("session.txt");
    fs::write(
        &script,
        "# set up\ngit init\n\ngit remote add origin http://x\ngit push origin main\ngit push nosuch main\n",
    )?;

    let mut sut = gitsim(&home_dir)?;
    sut.arg("--script").arg(&script);

    sut.assert().success().stdout(
        "Initialized empty Git repository\n\
         Added remote origin with URL http://x\n\
         Pushed to origin/main\n\
         Error: Remote nosuch not found\n",
    );

    Ok(())
}

#[rstest]
fn reads_piped_stdin(home_dir: TempDir) -> TestResult {
    let mut sut = gitsim(&home_dir)?;
    sut.arg("--echo")
        .write_stdin("git init\ngit checkout -b feature\ngit branch\n");

    sut.assert().success().stdout(
        "$ git init\nInitialized empty Git repository\n\
         $ git checkout -b feature\nSwitched to a new branch 'feature'\n\
         $ git branch\n  main\n* feature\n",
    );

    Ok(())
}

#[rstest]
fn dump_state_prints_repository_json(home_dir: TempDir) -> TestResult {
    let mut sut = gitsim(&home_dir)?;
    sut.args(["-c", "git init", "-c", "git add a.txt", "--dump-state"]);

    sut.assert()
        .success()
        .stdout(predicate::str::contains("\"initialized\": true"))
        .stdout(predicate::str::contains("\"current_branch\": \"main\""))
        .stdout(predicate::str::contains("\"a.txt\""));

    Ok(())
}

#[rstest]
fn custom_program_name(home_dir: TempDir) -> TestResult {
    let mut sut = gitsim(&home_dir)?;
    sut.args(["--program", "sim", "-c", "sim init", "-c", "git status"]);

    sut.assert().success().stdout(
        "Initialized empty Git repository\n\
         Error: This is a Git practice environment. Please use sim commands.\n",
    );

    Ok(())
}

#[rstest]
fn settings_file_is_applied(home_dir: TempDir) -> TestResult {
    let settings = home_dir.path().join("settings.json");
    fs::write(&settings, r#"{ "program": "gs" }"#)?;

    let mut sut = Command::cargo_bin("gitsim")?;
    sut.env("HOME", home_dir.path())
        .arg("--no-color")
        .arg("--settings")
        .arg(&settings)
        .args(["-c", "gs init"]);

    sut.assert()
        .success()
        .stdout("Initialized empty Git repository\n");

    Ok(())
}

#[rstest]
fn missing_settings_file_fails(home_dir: TempDir) -> TestResult {
    let mut sut = gitsim(&home_dir)?;
    sut.arg("--settings")
        .arg(home_dir.path().join("nope.json"))
        .args(["-c", "git init"]);

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read settings"));

    Ok(())
}

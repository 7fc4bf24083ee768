use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn abnf2peg() -> Command {
    Command::cargo_bin("abnf2peg").expect("binary to build")
}

#[test]
fn compiles_grammar_to_stdout() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("grammar.abnf");
    fs::write(&path, "greeting = \"hi\" SP name\nname = 1*ALPHA\n").expect("write grammar");

    abnf2peg()
        .arg(&path)
        .assert()
        .success()
        .stdout(
            "struct name;\n\
             struct greeting : tao::pegtl::seq< tao::pegtl::istring< 'h', 'i' >, SP, name > {};\n\
             struct name : tao::pegtl::plus< ALPHA > {};\n",
        );
}

#[test]
fn reports_errors_with_path_and_position() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("broken.abnf");
    fs::write(&path, "a = b\nc = (d\n").expect("write grammar");

    let expected = format!("{}:2:7: unterminated group (missing ')')\n", path.display());
    abnf2peg()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(expected);
}

#[test]
fn reports_semantic_errors() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("reserved.abnf");
    fs::write(&path, "a = b\nb = %x30 Class\n").expect("write grammar");

    abnf2peg()
        .arg(&path)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::ends_with(
            "reserved.abnf:2:10: 'Class' is a reserved rulename\n",
        ));
}

#[test]
fn missing_source_file_fails() {
    abnf2peg()
        .arg("does-not-exist.abnf")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("does-not-exist.abnf: "));
}

#[test]
fn usage_without_arguments() {
    abnf2peg()
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr("Usage: abnf2peg SOURCE\n");
}

#[test]
fn usage_with_two_sources() {
    abnf2peg()
        .args(["a.abnf", "b.abnf"])
        .assert()
        .failure()
        .code(1)
        .stderr("Usage: abnf2peg SOURCE\n");
}

#[test]
fn config_file_changes_generation() {
    let dir = tempdir().expect("temp dir");
    let grammar = dir.path().join("grammar.abnf");
    fs::write(&grammar, "a = b\nb = *\"x\"\n").expect("write grammar");
    let config = dir.path().join("abnf2peg.toml");
    fs::write(
        &config,
        "[generator]\nprefix = \"pegtl::\"\nforward_declarations = false\n",
    )
    .expect("write config");

    abnf2peg()
        .arg(&grammar)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout("struct a : b {};\nstruct b : pegtl::star< pegtl::istring< 'x' > > {};\n");
}

#[test]
fn config_reserved_words_are_rejected() {
    let dir = tempdir().expect("temp dir");
    let grammar = dir.path().join("grammar.abnf");
    fs::write(&grammar, "Grammar = \"g\"\n").expect("write grammar");
    let config = dir.path().join("abnf2peg.toml");
    fs::write(&config, "[names]\nreserved = [\"grammar\"]\n").expect("write config");

    abnf2peg()
        .arg(&grammar)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains(":1:1: 'Grammar' is a reserved rulename"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempdir().expect("temp dir");
    let grammar = dir.path().join("grammar.abnf");
    fs::write(&grammar, "a = b\n").expect("write grammar");

    abnf2peg()
        .arg(&grammar)
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .assert()
        .failure()
        .code(1)
        .stdout("");
}

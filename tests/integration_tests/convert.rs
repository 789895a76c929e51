//! End-to-end conversions from trace log to mscgen document.

use crate::common::TestDir;
use insta::Settings;

const CONFIG: &str = "\
# trace2dox test settings
traceid: TRACE123
";

const TRACE_LOG: &str = "\
2021-01-01 12:00:00 INFO starting up
2021-01-01 12:00:00 TRACE123 MAISA_Alice->MAISA_Bob hello
2021-01-01 12:00:01 DEBUG unrelated MAISA_Carol->MAISA_Dave
2021-01-01 12:00:02 TRACE123 MAISA_Bob>>MAISA_Alice
2021-01-01 12:00:03 TRACE123 MAISA_Alice=>MAISA_Carol query users
";

fn setup() -> TestDir {
    let dir = TestDir::new();
    dir.write(".trace2dox", CONFIG);
    dir.write("trace.log", TRACE_LOG);
    dir
}

fn snapshot_document(name: &str, document: &str) {
    let mut settings = Settings::clone_current();
    settings.set_snapshot_path("../snapshots");
    settings.bind(|| {
        insta::assert_snapshot!(name, document);
    });
}

#[test]
fn converts_with_defaults() {
    let dir = setup();
    let result = dir.run(&[]);
    assert_eq!(result.code, 0, "stderr:\n{}", result.stderr);
    assert!(result.stdout.is_empty());

    let document = dir.read("trace.msc");
    assert!(document.starts_with("\n/**\n@msc\n"));
    assert!(document.ends_with("\n\n@endmsc\n*/\n"));
    snapshot_document("converts_with_defaults", &document);
}

#[test]
fn output_is_reproducible() {
    let dir = setup();
    assert_eq!(dir.run(&[]).code, 0);
    let first = dir.read("trace.msc");
    assert_eq!(dir.run(&[]).code, 0);
    assert_eq!(dir.read("trace.msc"), first);
}

#[test]
fn explicit_input_and_output_paths() {
    let dir = setup();
    dir.write("other.log", "x TRACE123 MAISA_Client<:MAISA_Server\n");
    let result = dir.run(&["-i", "other.log", "--output", "other.msc"]);
    assert_eq!(result.code, 0, "stderr:\n{}", result.stderr);

    assert!(!dir.exists("trace.msc"));
    let document = dir.read("other.msc");
    assert!(document.contains("\tClient,Server;\n"));
    assert!(document.contains("\tClient<:Server;\n"));
}

#[test]
fn and_filter_keeps_messages_between_listed_entities() {
    let dir = setup();
    let result = dir.run(&["-f", "Alice,Bob"]);
    assert_eq!(result.code, 0, "stderr:\n{}", result.stderr);

    let document = dir.read("trace.msc");
    assert!(document.contains("\tAlice,Bob;\n"));
    assert!(document.contains("\tAlice->Bob [ label=\"hello\" ];\n\tBob>>Alice;\n\n"));
    assert!(!document.contains("Carol"));
}

#[test]
fn single_entity_and_filter_excludes_conversation() {
    let dir = setup();
    assert_eq!(dir.run(&["-f", "Alice", "-l", "and"]).code, 0);

    let document = dir.read("trace.msc");
    assert!(document.contains("\n\t;\n"));
    assert!(document.ends_with("    \n\n@endmsc\n*/\n"));
}

#[test]
fn xor_filter_excludes_fully_listed_messages() {
    let dir = setup();
    assert_eq!(dir.run(&["-f", "Alice,Bob", "-l", "XOR"]).code, 0);

    let document = dir.read("trace.msc");
    assert!(document.contains("\tAlice,Carol;\n"));
    assert!(document.contains("\tAlice=>Carol [ label=\"query users\" ];\n"));
    assert!(!document.contains("Alice->Bob"));
}

#[test]
fn or_filter_with_display_values() {
    let dir = setup();
    dir.write(
        "trace.log",
        "TRACE123 MAISA_Alice->MAISA_Bob\nTRACE123 MAISA_Bob->MAISA_Carol\n",
    );
    assert_eq!(dir.run(&["-f", "Carol:Charlie", "-l", "or"]).code, 0);

    let document = dir.read("trace.msc");
    assert!(document.contains("\tBob,Carol;\n"));
    assert!(document.contains("\tBob->Carol;\n"));
    assert!(!document.contains("Charlie"));
}

#[test]
fn display_values_do_not_rename_entities() {
    let dir = setup();
    dir.write("trace.log", "TRACE123 MAISA_Alice->MAISA_Bob ping\n");
    assert_eq!(dir.run(&["-f", "Alice,Bob:Alice"]).code, 0);
    let remapped = dir.read("trace.msc");

    assert_eq!(dir.run(&["-f", "Alice,Bob"]).code, 0);
    assert_eq!(dir.read("trace.msc"), remapped);
    assert!(remapped.contains("\tAlice,Bob;\n"));
    assert!(remapped.contains("\tAlice->Bob [ label=\"ping\" ];\n"));

    assert_eq!(dir.run(&["-f", "Bob:Bob Smith", "-l", "OR"]).code, 0);
    assert_eq!(dir.read("trace.msc"), remapped);
}

#[test]
fn configured_attributes_are_applied() {
    let dir = setup();
    dir.write(
        ".trace2dox",
        "\
traceid: TRACE123
Alice: textcolor=\"red\"
Alice->Bob: label=OLD, linecolor=\"blue\"
Bob>>Alice: label=reply
Alice=>Carol: arcskip=1
",
    );
    let result = dir.run(&[]);
    assert_eq!(result.code, 0, "stderr:\n{}", result.stderr);

    snapshot_document("configured_attributes", &dir.read("trace.msc"));
}

#[test]
fn malformed_traces_are_skipped_and_logged() {
    let dir = setup();
    dir.write(
        "trace.log",
        "TRACE123 MAISA_Alice->MAISA_Bob\nTRACE123 sequence started\n",
    );
    let result = dir.run(&[]);
    assert_eq!(result.code, 0, "stderr:\n{}", result.stderr);

    assert!(dir.read("trace.msc").contains("\tAlice->Bob;\n"));
    let log = dir.read("trace2dox.log");
    assert!(log.contains("WARN Skipping trace: Trace 'sequence started'"));
}

#[test]
fn namespace_override() {
    let dir = setup();
    dir.write("trace.log", "TRACE123 app::Alice->app::Bob\n");
    assert_eq!(dir.run(&["-n", "app::"]).code, 0);
    assert!(dir.read("trace.msc").contains("\tAlice->Bob;\n"));
}

//! Precedence between defaults, the config file and command-line flags.

use crate::common::TestDir;

#[test]
fn config_file_overrides_defaults() {
    let dir = TestDir::new();
    dir.write(
        ".trace2dox",
        "traceid: SEQ\ninfile: app.log\noutfile: app.msc\nnamespace: ns_\n",
    );
    dir.write("app.log", "SEQ ns_A->ns_B\n");

    let result = dir.run(&[]);
    assert_eq!(result.code, 0, "stderr:\n{}", result.stderr);
    assert!(!dir.exists("trace.msc"));
    assert!(dir.read("app.msc").contains("\tA->B;\n"));
}

#[test]
fn command_line_overrides_config_file() {
    let dir = TestDir::new();
    dir.write(
        ".trace2dox",
        "traceid: SEQ\noutfile: from-file.msc\nfilters: A,B\nlogic: AND\n",
    );
    dir.write("trace.log", "SEQ A->B\nSEQ B->C\n");

    let result = dir.run(&["-o", "from-cli.msc", "-l", "xor"]);
    assert_eq!(result.code, 0, "stderr:\n{}", result.stderr);

    assert!(!dir.exists("from-file.msc"));
    let document = dir.read("from-cli.msc");
    // File filters still apply, command-line logic replaces the file's
    assert!(document.contains("\tB,C;\n"));
    assert!(document.contains("\tB->C;\n"));
}

#[test]
fn config_flag_selects_the_config_file() {
    let dir = TestDir::new();
    dir.write(".trace2dox", "traceid: WRONG\n");
    dir.write("custom.cfg", "traceid: RIGHT\n");
    dir.write("trace.log", "WRONG A->B\nRIGHT C->D\n");

    let result = dir.run(&["--config", "custom.cfg"]);
    assert_eq!(result.code, 0, "stderr:\n{}", result.stderr);
    let document = dir.read("trace.msc");
    assert!(document.contains("\tC->D;\n"));
    assert!(!document.contains("A->B"));
}

#[test]
fn command_line_filter_replaces_file_filter() {
    let dir = TestDir::new();
    dir.write(".trace2dox", "traceid: SEQ\nfilters: A\nlogic: OR\n");
    dir.write("trace.log", "SEQ A->B\nSEQ C->D\n");

    assert_eq!(dir.run(&["-f", "C"]).code, 0);
    let document = dir.read("trace.msc");
    assert!(document.contains("\tC,D;\n"));
    assert!(!document.contains("A->B"));
}

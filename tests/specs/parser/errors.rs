//! Parse-time error behavior and boundary cases.

use crate::prelude::*;

#[test]
fn empty_file_with_any_target_is_a_parse_error() {
    let project = Project::with_makefile("");
    project.mklite().args(&["all"]).fails_with_code(2);
}

#[test]
fn empty_file_with_no_target_requested_is_also_a_parse_error() {
    // No rules at all means there is no default target either.
    let project = Project::with_makefile("");
    project
        .mklite()
        .fails_with_code(2)
        .stderr_has("no target found");
}

#[test]
fn rule_header_with_a_second_colon_is_rejected() {
    let project = Project::with_makefile("all: a.out: b.out\n\techo hi\n");
    project
        .mklite()
        .fails_with_code(2)
        .stderr_has("second unescaped `:`");
}

#[test]
fn indented_line_with_no_preceding_rule_is_rejected() {
    let project = Project::with_makefile("    echo stray\n");
    project
        .mklite()
        .fails_with_code(2)
        .stderr_has("unexpected indented line");
}

#[test]
fn ambiguous_comment_continuation_is_rejected() {
    let project = Project::with_makefile("FOO = 1 # trailing comment\\\n");
    project
        .mklite()
        .fails_with_code(2)
        .stderr_has("ambiguous line continuation");
}

#[test]
fn circular_include_is_rejected() {
    let project = Project::empty();
    project.file("a.mk-lite", "include b.mk-lite\n");
    project.file("b.mk-lite", "include a.mk-lite\n");
    project.file("Makefile.mk-lite", "include a.mk-lite\n");
    project.mklite().fails_with_code(2).stderr_has("circular include");
}

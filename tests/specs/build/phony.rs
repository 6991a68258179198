//! A target with no corresponding file is implicitly phony and always
//! runs.

use crate::prelude::*;

#[test]
fn target_with_no_rule_generated_file_always_runs() {
    let project = Project::empty();
    project.file("out.txt", "leftover");
    project.file("Makefile.mk-lite", "clean:\n\t@rm -f out.txt\n");

    project.mklite().args(&["clean"]).passes();
    assert!(!project.exists("out.txt"));
    assert!(!project.exists("clean"));

    // Running again with nothing left to remove still runs the recipe
    // (rm -f succeeds either way); the point is no "up to date" short
    // circuit happens for a target that was never a file.
    project.mklite().args(&["clean"]).passes();
}

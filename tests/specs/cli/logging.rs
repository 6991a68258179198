//! `MAKE_LITE_LOG_LEVEL=DEBUG` enables the verbose diagnostic stream.

use crate::prelude::*;

#[test]
fn debug_log_level_surfaces_up_to_date_diagnostics_on_rebuild() {
    let project = Project::empty();
    project.file("src.in", "x");
    project.file(
        "Makefile.mk-lite",
        "out.txt: src.in\n\t@touch out.txt\n",
    );

    project.mklite().args(&["out.txt"]).passes();

    // Fresh run: nothing left to do, so the second invocation only logs
    // the diagnostic "up to date" trace, never re-running the recipe.
    project
        .mklite()
        .env("MAKE_LITE_LOG_LEVEL", "DEBUG")
        .args(&["out.txt"])
        .passes()
        .stderr_has("up to date");
}

#[test]
fn default_log_level_is_quiet_on_stderr() {
    let project = Project::empty();
    project.file("src.in", "x");
    project.file(
        "Makefile.mk-lite",
        "out.txt: src.in\n\t@touch out.txt\n",
    );

    project.mklite().args(&["out.txt"]).passes();

    let second = project.mklite().args(&["out.txt"]).passes();
    assert_eq!(second.stderr(), "");
}

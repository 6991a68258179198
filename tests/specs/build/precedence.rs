//! Conditional vs unconditional vs shell-env variable precedence.

use crate::prelude::*;

#[test]
fn unconditional_assignment_wins_over_shell_env_and_conditional() {
    let project =
        Project::with_makefile("FOO ?= fromfile\nFOO = frommake\nshow:\n\techo $(FOO)\n");
    project
        .mklite()
        .env("FOO", "env")
        .args(&["show"])
        .passes()
        .stdout_has("frommake");
}

#[test]
fn conditional_assignment_does_not_override_shell_env() {
    let project = Project::with_makefile("FOO ?= fromfile\nshow:\n\techo $(FOO)\n");
    project
        .mklite()
        .env("FOO", "env")
        .args(&["show"])
        .passes()
        .stdout_has("env");
}

#[test]
fn conditional_assignment_applies_when_nothing_else_set_the_name() {
    let project = Project::with_makefile("FOO ?= fromfile\nshow:\n\techo $(FOO)\n");
    project.mklite().args(&["show"]).passes().stdout_has("fromfile");
}

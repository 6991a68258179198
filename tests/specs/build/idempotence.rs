//! A second invocation with no filesystem changes runs no recipe bodies
//! for file-based (non-phony) targets.

use crate::prelude::*;

#[test]
fn rebuilding_with_no_changes_does_not_rerun_the_recipe() {
    let project = Project::empty();
    project.file("src.in", "x");
    project.file(
        "Makefile.mk-lite",
        "out.txt: src.in\n\t@echo building >> log.txt; touch out.txt\n",
    );

    project.mklite().args(&["out.txt"]).passes();
    assert_eq!(project.read("log.txt").lines().count(), 1);

    project.mklite().args(&["out.txt"]).passes();
    assert_eq!(project.read("log.txt").lines().count(), 1);
}

#[test]
fn rule_with_zero_sources_is_fresh_once_its_target_exists() {
    let project = Project::empty();
    project.file(
        "Makefile.mk-lite",
        "out.txt:\n\t@echo building >> log.txt; touch out.txt\n",
    );

    project.mklite().args(&["out.txt"]).passes();
    assert_eq!(project.read("log.txt").lines().count(), 1);

    // No sources and the target now exists as a file: that's fresh, so
    // the recipe must not run again.
    project.mklite().args(&["out.txt"]).passes();
    assert_eq!(project.read("log.txt").lines().count(), 1);
}

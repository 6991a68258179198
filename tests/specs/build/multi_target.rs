//! A multi-target generator is one unit.

use crate::prelude::*;

#[test]
fn multi_target_rule_produces_both_outputs_from_one_recipe_run() {
    let project = Project::empty();
    project.file("src.in", "x");
    project.file(
        "Makefile.mk-lite",
        "a.out b.out: src.in\n\t@cp src.in a.out; cp src.in b.out\n",
    );

    project.mklite().args(&["a.out"]).passes();
    assert_eq!(project.read("a.out"), "x");
    assert_eq!(project.read("b.out"), "x");
}

#[test]
fn deleting_one_of_two_targets_reruns_the_shared_recipe() {
    let project = Project::empty();
    project.file("src.in", "x");
    project.file(
        "Makefile.mk-lite",
        "a.out b.out: src.in\n\t@cp src.in a.out; cp src.in b.out\n",
    );

    project.mklite().args(&["a.out"]).passes();
    project.remove("b.out");
    assert!(!project.exists("b.out"));

    project.mklite().args(&["a.out"]).passes();
    assert!(project.exists("b.out"));
    assert_eq!(project.read("b.out"), "x");
}

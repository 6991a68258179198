//! Parent directories are created automatically.

use crate::prelude::*;

#[test]
fn missing_parent_directory_is_created_before_the_recipe_runs() {
    let project = Project::empty();
    project.file("src.in", "x");
    project.file("Makefile.mk-lite", "bin/app: src.in\n\tcp src.in bin/app\n");

    assert!(!project.exists("bin"));
    project.mklite().args(&["bin/app"]).passes();
    assert!(project.exists("bin/app"));
    assert_eq!(project.read("bin/app"), "x");
}

//! Unit tests for the catalog layout

use std::path::{Path, PathBuf};

use uicb_domain::CatalogLayout;

fn layout() -> CatalogLayout {
    CatalogLayout::new("/srv/ui")
}

#[test]
fn test_default_layout_paths() {
    let layout = layout();

    assert_eq!(
        layout.components_root,
        PathBuf::from("/srv/ui/demo/src/components/ui")
    );
    assert_eq!(
        layout.docs_root,
        PathBuf::from("/srv/ui/demo/src/assets/markdown/ui-components")
    );
    assert_eq!(layout.rules_file, PathBuf::from("/srv/ui/UIGOD-RULES.MD"));
    assert_eq!(layout.source_extensions, vec!["tsx", "jsx"]);
    assert_eq!(layout.default_example_type, "Basic");
}

#[test]
fn test_main_file_candidates_prefer_exact_name() {
    let layout = layout().with_components_root("/c");
    let candidates = layout.main_file_candidates("Button");

    assert_eq!(
        candidates,
        vec![
            PathBuf::from("/c/Button/Button.tsx"),
            PathBuf::from("/c/Button/Button.jsx"),
            PathBuf::from("/c/Button/index.tsx"),
            PathBuf::from("/c/Button/index.jsx"),
        ]
    );
}

#[test]
fn test_example_path_shape() {
    let layout = layout().with_docs_root("/docs");
    assert_eq!(
        layout.example_path("Table", "Customize"),
        PathBuf::from("/docs/Table/Customize.md")
    );
}

#[test]
fn test_is_source_file() {
    let layout = layout();

    assert!(layout.is_source_file("Button.tsx"));
    assert!(layout.is_source_file("index.jsx"));
    assert!(!layout.is_source_file("helpers.ts"));
    assert!(!layout.is_source_file("README.md"));
    assert!(!layout.is_source_file("tsx"));
    assert!(!layout.is_source_file("Button.TSX"));
}

#[test]
fn test_dot_prefixed_extension_only_name_is_source() {
    let layout = layout();

    assert!(layout.is_source_file(".tsx"));
    assert!(layout.is_source_file("Button.test.jsx"));
    assert!(!layout.is_source_file("Buttontsx"));
}

#[test]
fn test_custom_source_extensions() {
    let layout = layout().with_source_extensions(["vue"]);

    assert!(layout.is_source_file("Card.vue"));
    assert!(!layout.is_source_file("Card.tsx"));
}

#[test]
fn test_display_path_relative_to_base() {
    let layout = layout();

    assert_eq!(
        layout.display_path(Path::new("/srv/ui/demo/src/components/ui/Button")),
        "/demo/src/components/ui/Button"
    );
    assert_eq!(layout.display_path(Path::new("/elsewhere/Button")), "/elsewhere/Button");
}

#[test]
fn test_entry_for_uses_display_path() {
    let entry = layout().entry_for("Input");

    assert_eq!(entry.name, "Input");
    assert_eq!(entry.path, "/demo/src/components/ui/Input");
}

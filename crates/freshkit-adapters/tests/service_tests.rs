//! Service-level tests: core services driven through the in-memory
//! filesystem adapter.

use std::path::Path;

use freshkit_adapters::MemoryFilesystem;
use freshkit_core::{
    application::ports::Filesystem,
    application::services::{CompletionEngine, GenerateService, ProjectDetector, ProviderContext},
    domain::{
        ArtifactKind, Document, Position, Workspace, select_route, templates::ExportKind,
    },
    error::FreshkitError,
};

fn service_with_workspace() -> (GenerateService, MemoryFilesystem, Workspace) {
    let fs = MemoryFilesystem::new();
    fs.seed_dir("/proj");
    let service = GenerateService::new(Box::new(fs.clone()));
    (service, fs, Workspace::new("/proj"))
}

// ── scaffolder ────────────────────────────────────────────────────────────────

#[test]
fn every_kind_scaffolds_its_template_with_substitution() {
    for kind in ArtifactKind::ALL {
        let (service, fs, ws) = service_with_workspace();

        let generated = service.generate(&ws, kind, None, "my-comp").unwrap();

        let expected_path = Path::new("/proj")
            .join(kind.default_folder())
            .join(format!("my-comp{}", kind.extension()));
        assert_eq!(generated.path, expected_path, "path for {kind}");
        assert_eq!(generated.identifier, "MyComp");

        let content = fs.read_file(&generated.path).expect("file written");
        assert_eq!(content, kind.template().replace("__FILENAME__", "MyComp"));
        assert_eq!(fs.list_files().len(), 1, "exactly one file for {kind}");
    }
}

#[test]
fn snake_case_names_convert() {
    let (service, fs, ws) = service_with_workspace();
    let generated = service
        .generate(&ws, ArtifactKind::Section, None, "my_comp")
        .unwrap();
    assert_eq!(generated.identifier, "MyComp");
    let content = fs.read_file(&generated.path).unwrap();
    assert!(content.contains("export default function MyComp()"));
}

#[test]
fn camel_case_names_pass_through() {
    let (service, _fs, ws) = service_with_workspace();
    let generated = service
        .generate(&ws, ArtifactKind::Component, None, "MyComponent")
        .unwrap();
    assert_eq!(generated.identifier, "MyComponent");
}

#[test]
fn existing_target_aborts_without_write() {
    let (service, fs, ws) = service_with_workspace();
    fs.seed_file("/proj/components/hero.tsx", "original");

    let err = service
        .generate(&ws, ArtifactKind::Component, None, "hero")
        .unwrap_err();
    assert!(err.to_string().contains("already exists"));

    // Untouched.
    assert_eq!(
        fs.read_file(Path::new("/proj/components/hero.tsx")).unwrap(),
        "original"
    );
    assert_eq!(fs.list_files().len(), 1);
}

#[test]
fn missing_workspace_aborts_without_write() {
    let fs = MemoryFilesystem::new();
    let service = GenerateService::new(Box::new(fs.clone()));
    let ws = Workspace::new("/nowhere");

    let err = service
        .generate(&ws, ArtifactKind::Loader, None, "x")
        .unwrap_err();
    assert!(matches!(err, FreshkitError::Application(_)));
    assert!(fs.list_files().is_empty());
}

#[test]
fn explicit_folder_overrides_default() {
    let (service, fs, ws) = service_with_workspace();
    let generated = service
        .generate(
            &ws,
            ArtifactKind::Island,
            Some(Path::new("ui/widgets")),
            "counter",
        )
        .unwrap();
    assert_eq!(
        generated.path,
        Path::new("/proj/ui/widgets/counter.tsx")
    );
    assert!(fs.exists(&generated.path));
}

#[test]
fn extension_not_doubled() {
    let (service, _fs, ws) = service_with_workspace();
    let generated = service
        .generate(&ws, ArtifactKind::Action, None, "sync.ts")
        .unwrap();
    assert_eq!(generated.path, Path::new("/proj/actions/sync.ts"));
}

#[test]
fn export_wrappers_reference_the_module() {
    let (service, fs, ws) = service_with_workspace();
    let generated = service
        .export_as(&ws, ExportKind::Section, None, "product-shelf")
        .unwrap();
    assert_eq!(
        generated.path,
        Path::new("/proj/sections/product-shelf.tsx")
    );
    let content = fs.read_file(&generated.path).unwrap();
    assert!(content.contains(r#"export { default } from "./ProductShelf""#));
}

#[test]
fn routes_scaffold_into_routes_folder() {
    let (service, fs, ws) = service_with_workspace();
    let route = select_route("Dynamic").unwrap();
    let generated = service
        .scaffold_route(&ws, route, None, "greet")
        .unwrap();
    assert_eq!(generated.path, Path::new("/proj/routes/greet.tsx"));
    let content = fs.read_file(&generated.path).unwrap();
    assert!(content.contains("export default function Greet(props: PageProps)"));
}

// ── detector ──────────────────────────────────────────────────────────────────

#[test]
fn detector_reports_marker_presence() {
    let fs = MemoryFilesystem::new();
    fs.seed_file("/proj/fresh.gen.ts", "// generated");
    let detector = ProjectDetector::new(Box::new(fs));

    assert!(detector.is_fresh_project(Some(Path::new("/proj"))));
    assert!(!detector.is_fresh_project(Some(Path::new("/other"))));
    assert!(!detector.is_fresh_project(None));
}

// ── completion engine ─────────────────────────────────────────────────────────

fn complete_all(
    fs: &MemoryFilesystem,
    ws: &Workspace,
    text: &str,
    position: Position,
) -> Vec<String> {
    let engine = CompletionEngine::standard();
    let document = Document::new(text);
    let cx = ProviderContext {
        filesystem: fs,
        workspace: ws,
        previews_dir: None,
    };
    engine
        .complete(&document, position, &cx)
        .into_iter()
        .map(|item| item.label)
        .collect()
}

#[test]
fn options_completions_follow_manifest_order() {
    let fs = MemoryFilesystem::new();
    fs.seed_file(
        "/proj/manifest.gen.ts",
        r#"export default { "loaders": {"a/b.ts": a, "c/d.ts": b} };"#,
    );
    let ws = Workspace::new("/proj");
    let engine = CompletionEngine::standard();
    let document = Document::new("/** @options */");
    let cx = ProviderContext {
        filesystem: &fs,
        workspace: &ws,
        previews_dir: None,
    };

    let items = engine
        .complete_with("options", &document, Position::new(0, 13), &cx)
        .unwrap();
    let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, ["a/b.ts", "c/d.ts"]);
}

#[test]
fn missing_manifest_degrades_to_empty() {
    let fs = MemoryFilesystem::new();
    fs.seed_dir("/proj");
    let ws = Workspace::new("/proj");
    let engine = CompletionEngine::standard();
    let document = Document::new("/** @options */");
    let cx = ProviderContext {
        filesystem: &fs,
        workspace: &ws,
        previews_dir: None,
    };

    let items = engine
        .complete_with("options", &document, Position::new(0, 13), &cx)
        .unwrap();
    assert!(items.is_empty());
}

#[test]
fn annotation_catalog_only_inside_comments() {
    let fs = MemoryFilesystem::new();
    fs.seed_dir("/proj");
    let ws = Workspace::new("/proj");

    let inside = complete_all(&fs, &ws, "/**\n * @\n */\n", Position::new(1, 4));
    assert!(inside.contains(&"title".to_string()));
    // No @format on the line, so the widget list stays silent.
    assert!(!inside.contains(&"color".to_string()));

    let outside = complete_all(&fs, &ws, "const a = 1;\n", Position::new(0, 5));
    assert!(!outside.contains(&"title".to_string()));
}

#[test]
fn format_line_suppresses_catalog_but_offers_widgets() {
    let fs = MemoryFilesystem::new();
    fs.seed_dir("/proj");
    let ws = Workspace::new("/proj");

    let labels = complete_all(&fs, &ws, "/** @format */", Position::new(0, 11));
    assert!(!labels.contains(&"title".to_string()));
    assert!(labels.contains(&"color".to_string()));
    assert!(labels.contains(&"button-group".to_string()));
}

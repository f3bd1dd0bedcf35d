//! End-to-end scaffold tests against the real local filesystem.

use std::path::{Path, PathBuf};

use plumbkit_adapters::{
    BuiltinTemplate, DirTemplateSource, IdentityAliaser, LocalFilesystem, MemoryFilesystem,
    TracingPermissionsObserver,
};
use plumbkit_core::{
    application::{
        ScaffoldService, TEMPLATE_FILE,
        ports::{Filesystem, TemplateSource},
    },
    domain::ConflictKind,
    error::{ScaffoldError, ScaffoldResult},
};
use tempfile::TempDir;

fn local_service() -> ScaffoldService {
    ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(BuiltinTemplate::new()),
        Box::new(IdentityAliaser),
        Box::new(TracingPermissionsObserver),
    )
}

/// Snapshot of a directory tree, for the filesystem-unchanged assertions.
fn tree(root: &Path) -> Vec<String> {
    fn walk(dir: &Path, root: &Path, out: &mut Vec<String>) {
        let mut entries: Vec<_> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        entries.sort();
        for path in entries {
            out.push(path.strip_prefix(root).unwrap().display().to_string());
            if path.is_dir() {
                walk(&path, root, out);
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out
}

#[test]
fn scaffold_into_empty_parent_creates_directory_and_template() {
    let parent = TempDir::new().unwrap();
    let outcome = local_service()
        .create_project("myapi", parent.path())
        .unwrap();

    let expected = parent.path().join("myapi").join(TEMPLATE_FILE);
    assert_eq!(outcome.path, expected);
    let content = std::fs::read_to_string(&expected).unwrap();
    assert!(content.contains("library(plumber)"));
    assert!(content.contains("#* @get /echo"));
}

#[test]
fn scaffold_reuses_existing_empty_directory() {
    let parent = TempDir::new().unwrap();
    std::fs::create_dir(parent.path().join("myapi")).unwrap();

    let outcome = local_service()
        .create_project("myapi", parent.path())
        .unwrap();
    assert!(outcome.path.is_file());
}

#[test]
fn target_that_is_a_regular_file_conflicts_without_mutation() {
    let parent = TempDir::new().unwrap();
    std::fs::write(parent.path().join("myapi"), "a file, not a dir").unwrap();
    let before = tree(parent.path());

    let err = local_service()
        .create_project("myapi", parent.path())
        .unwrap_err();

    assert_eq!(err.conflict(), Some(ConflictKind::TargetNotADirectory));
    assert_eq!(tree(parent.path()), before);
}

#[test]
fn non_empty_target_conflicts_without_mutation() {
    let parent = TempDir::new().unwrap();
    std::fs::create_dir(parent.path().join("myapi")).unwrap();
    std::fs::write(parent.path().join("myapi/notes.txt"), "notes").unwrap();
    let before = tree(parent.path());

    let err = local_service()
        .create_project("myapi", parent.path())
        .unwrap_err();

    assert_eq!(err.conflict(), Some(ConflictKind::DirectoryNotEmpty));
    assert_eq!(tree(parent.path()), before);
}

#[test]
fn existing_template_file_blocks_scaffold_and_keeps_its_content() {
    let parent = TempDir::new().unwrap();
    let dir = parent.path().join("myapi");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(dir.join(TEMPLATE_FILE), "my precious endpoints").unwrap();

    // On a real filesystem the file is a child of the directory, so the
    // emptiness check fires first.
    let err = local_service()
        .create_project("myapi", parent.path())
        .unwrap_err();

    assert_eq!(err.conflict(), Some(ConflictKind::DirectoryNotEmpty));
    assert_eq!(
        std::fs::read_to_string(dir.join(TEMPLATE_FILE)).unwrap(),
        "my precious endpoints"
    );
}

#[test]
fn template_file_created_after_listing_conflicts_and_keeps_its_content() {
    // Delegates everything to the real filesystem except the listing, which
    // reports empty — standing in for a plumber.R that lands between the
    // emptiness check and the install.
    struct StaleListingFs(LocalFilesystem);

    impl Filesystem for StaleListingFs {
        fn exists(&self, path: &Path) -> bool {
            self.0.exists(path)
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.0.is_dir(path)
        }

        fn read_dir(&self, _path: &Path) -> ScaffoldResult<Vec<PathBuf>> {
            Ok(Vec::new())
        }

        fn create_dir(&self, path: &Path) -> ScaffoldResult<()> {
            self.0.create_dir(path)
        }
    }

    let parent = TempDir::new().unwrap();
    let dir = parent.path().join("myapi");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(dir.join(TEMPLATE_FILE), "my precious endpoints").unwrap();

    let svc = ScaffoldService::new(
        Box::new(StaleListingFs(LocalFilesystem::new())),
        Box::new(BuiltinTemplate::new()),
        Box::new(IdentityAliaser),
        Box::new(TracingPermissionsObserver),
    );

    let err = svc.create_project("myapi", parent.path()).unwrap_err();

    assert_eq!(err.conflict(), Some(ConflictKind::FileAlreadyExists));
    assert_eq!(
        std::fs::read_to_string(dir.join(TEMPLATE_FILE)).unwrap(),
        "my precious endpoints"
    );
}

#[test]
fn repeated_failure_is_identical() {
    let parent = TempDir::new().unwrap();
    std::fs::create_dir(parent.path().join("myapi")).unwrap();
    std::fs::write(parent.path().join("myapi/notes.txt"), "notes").unwrap();

    let svc = local_service();
    let first = svc.create_project("myapi", parent.path()).unwrap_err();
    let second = svc.create_project("myapi", parent.path()).unwrap_err();
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn missing_parent_is_rejected() {
    let parent = TempDir::new().unwrap();
    let gone = parent.path().join("not-here");

    let err = local_service().create_project("myapi", &gone).unwrap_err();
    assert!(matches!(err, ScaffoldError::InvalidParent { .. }));
}

#[test]
fn configured_template_root_wins_over_builtin() {
    let parent = TempDir::new().unwrap();
    let resources = TempDir::new().unwrap();
    let collection = resources.path().join("templates/plumber");
    std::fs::create_dir_all(&collection).unwrap();
    std::fs::write(collection.join(TEMPLATE_FILE), "#' @get /custom\n").unwrap();

    let svc = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(DirTemplateSource::new(resources.path())),
        Box::new(IdentityAliaser),
        Box::new(TracingPermissionsObserver),
    );

    let outcome = svc.create_project("myapi", parent.path()).unwrap();
    assert_eq!(
        std::fs::read_to_string(outcome.path).unwrap(),
        "#' @get /custom\n"
    );
}

#[test]
fn memory_filesystem_drives_the_same_workflow() {
    // The builtin source writes through std::fs, so pair the memory
    // filesystem with a no-op template install via a tiny local source.
    struct NullSource;
    impl TemplateSource for NullSource {
        fn install(&self, _name: &str, _dest: &Path) -> plumbkit_core::error::ScaffoldResult<()> {
            Ok(())
        }
    }

    let fs = MemoryFilesystem::new();
    fs.add_dir("/projects");
    let svc = ScaffoldService::new(
        Box::new(fs.clone()),
        Box::new(NullSource),
        Box::new(IdentityAliaser),
        Box::new(TracingPermissionsObserver),
    );

    let outcome = svc.create_project("myapi", Path::new("/projects")).unwrap();
    assert_eq!(outcome.display, "/projects/myapi/plumber.R");
    assert!(fs.is_dir(Path::new("/projects/myapi")));
}

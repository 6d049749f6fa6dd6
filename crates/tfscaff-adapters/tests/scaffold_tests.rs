//! End-to-end scaffolding against the real filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tfscaff_adapters::{BuiltinCatalog, ListFileSource, LocalFilesystem, MemoryFilesystem};
use tfscaff_core::{
    application::{ReportService, ScaffoldBuilder, ServiceNameProvider},
    domain::ServiceCatalog,
    error::ScaffError,
};

fn catalog(names: &[&str]) -> ServiceCatalog {
    ServiceCatalog::from_names(names.iter().copied()).unwrap()
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

#[test]
fn scaffolds_full_tree_with_exact_contents() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("infra");

    let report = ScaffoldBuilder::new(Box::new(LocalFilesystem::new()))
        .build(&base, &catalog(&["s3", "ec2"]))
        .unwrap();

    assert_eq!(report.files_written, 25);
    assert_eq!(
        read(&base.join("main.tf")),
        "# main.tf for Terraform AWS Infrastructure\n"
    );
    assert_eq!(
        read(&base.join("README.md")),
        "# README.md for Terraform AWS Infrastructure\n"
    );
    assert_eq!(
        read(&base.join("modules/ec2/outputs.tf")),
        "# outputs.tf for ec2 module\n"
    );
    assert_eq!(
        read(&base.join("modules/s3/README.md")),
        "# README.md for s3 module\n"
    );
    assert_eq!(
        read(&base.join("environments/staging/terraform.tfvars")),
        "# terraform.tfvars for staging environment\n"
    );
    assert_eq!(
        read(&base.join("environments/production/versions.tf")),
        "# versions.tf for production environment\n"
    );
}

#[test]
fn every_declared_file_is_non_empty() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("infra");
    ScaffoldBuilder::new(Box::new(LocalFilesystem::new()))
        .build(&base, &catalog(&["lambda"]))
        .unwrap();

    let mut count = 0;
    for entry in walk(&base) {
        assert!(fs::metadata(&entry).unwrap().len() > 0, "{}", entry.display());
        count += 1;
    }
    assert_eq!(count, 5 + 4 + 12);
}

#[test]
fn existing_directory_is_refused_untouched() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("infra");
    fs::create_dir(&base).unwrap();
    fs::write(base.join("keep.txt"), "mine").unwrap();

    let err = ScaffoldBuilder::new(Box::new(LocalFilesystem::new()))
        .build(&base, &catalog(&["s3"]))
        .unwrap_err();

    assert!(err.is_destination_exists());
    let entries: Vec<_> = fs::read_dir(&base).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(read(&base.join("keep.txt")), "mine");
}

#[test]
fn existing_file_is_refused() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("infra");
    fs::write(&base, "").unwrap();

    let err = ScaffoldBuilder::new(Box::new(LocalFilesystem::new()))
        .build(&base, &catalog(&["s3"]))
        .unwrap_err();
    assert!(err.is_destination_exists());
}

#[test]
fn second_run_is_refused() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("infra");
    let builder = ScaffoldBuilder::new(Box::new(LocalFilesystem::new()));

    builder.build(&base, &catalog(&["s3"])).unwrap();
    let before = read(&base.join("modules/s3/main.tf"));
    assert!(builder.build(&base, &catalog(&["iam"])).is_err());

    assert!(!base.join("modules/iam").exists());
    assert_eq!(read(&base.join("modules/s3/main.tf")), before);
}

#[test]
fn empty_catalog_still_creates_modules_dir() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("infra");

    let report = ScaffoldBuilder::new(Box::new(LocalFilesystem::new()))
        .build(&base, &ServiceCatalog::new())
        .unwrap();

    assert_eq!(report.modules, 0);
    assert!(base.join("modules").is_dir());
    assert_eq!(fs::read_dir(base.join("modules")).unwrap().count(), 0);
    assert!(base.join("environments/development/main.tf").is_file());
}

#[test]
fn missing_intermediate_parents_are_created() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("a/b/infra");

    ScaffoldBuilder::new(Box::new(LocalFilesystem::new()))
        .build(&base, &catalog(&["sns"]))
        .unwrap();
    assert!(base.join("modules/sns/variables.tf").is_file());
}

#[test]
fn failure_mid_run_leaves_partial_tree() {
    let memory = MemoryFilesystem::new();
    memory.fail_writes_under("infra/environments");

    let err = ScaffoldBuilder::new(Box::new(memory.clone()))
        .build("infra", &catalog(&["s3"]))
        .unwrap_err();

    assert!(matches!(err, ScaffError::Application(_)));
    assert!(!err.is_destination_exists());
    assert!(memory.read_file(Path::new("infra/modules/s3/main.tf")).is_some());
    assert!(
        !memory
            .list_directories()
            .contains(&PathBuf::from("infra/environments"))
    );
}

#[test]
fn list_file_drives_scaffold() {
    let temp = TempDir::new().unwrap();
    let list = temp.path().join("services.txt");
    fs::write(&list, "sqs\nec2\nsqs\n").unwrap();

    let names = ServiceNameProvider::new(Box::new(ListFileSource::new(&list)))
        .fetch()
        .unwrap();
    assert_eq!(names.to_strings(), ["ec2", "sqs"]);

    let base = temp.path().join("infra");
    ScaffoldBuilder::new(Box::new(LocalFilesystem::new()))
        .build(&base, &names)
        .unwrap();

    let mut modules: Vec<_> = fs::read_dir(base.join("modules"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    modules.sort();
    assert_eq!(modules, ["ec2", "sqs"]);
}

#[test]
fn export_writes_one_name_per_line() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("tmp/aws_services_list.txt");

    let names = ServiceNameProvider::new(Box::new(BuiltinCatalog::new()))
        .fetch()
        .unwrap();
    let report = ReportService::new(Box::new(LocalFilesystem::new()))
        .export(&names, &target)
        .unwrap();

    let body = read(&target);
    assert_eq!(report.services, names.len());
    assert_eq!(body.lines().count(), names.len());
    assert!(body.ends_with('\n'));
    assert!(body.lines().any(|l| l == "s3"));
}

#[test]
fn exported_list_round_trips_as_source() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("list.txt");
    let original = catalog(&["ec2", "iam", "s3"]);

    ReportService::new(Box::new(LocalFilesystem::new()))
        .export(&original, &target)
        .unwrap();
    let reread = ServiceNameProvider::new(Box::new(ListFileSource::new(&target)))
        .fetch()
        .unwrap();

    assert_eq!(reread, original);
}

fn walk(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            files.extend(walk(&path));
        } else {
            files.push(path);
        }
    }
    files
}

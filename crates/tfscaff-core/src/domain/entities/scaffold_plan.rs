use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::catalog::ServiceCatalog,
    error::DomainError,
    value_objects::{Environment, ServiceName},
};

/// Directory holding one module per service.
pub const MODULES_DIR: &str = "modules";

/// Directory holding one folder per environment.
pub const ENVIRONMENTS_DIR: &str = "environments";

/// Files written directly under the base directory.
pub const ROOT_FILES: [&str; 5] = [
    "main.tf",
    "variables.tf",
    "outputs.tf",
    "provider.tf",
    "README.md",
];

/// Files written into every `modules/<service>/` directory.
pub const MODULE_FILES: [&str; 4] = ["main.tf", "variables.tf", "outputs.tf", "README.md"];

/// Files written into every `environments/<env>/` directory.
pub const ENVIRONMENT_FILES: [&str; 4] =
    ["main.tf", "variables.tf", "terraform.tfvars", "versions.tf"];

pub fn root_banner(file: &str) -> String {
    format!("# {file} for Terraform AWS Infrastructure\n")
}

pub fn module_banner(file: &str, service: &ServiceName) -> String {
    format!("# {file} for {service} module\n")
}

pub fn environment_banner(file: &str, env: Environment) -> String {
    format!("# {file} for {env} environment\n")
}

/// The complete tree a scaffold run will materialize.
///
/// Derived from a [`ServiceCatalog`] on every run and never stored. Entries
/// are relative to `root` and ordered the way they must be created: top-level
/// files, then modules in catalog order, then environments in fixed order.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<PlanEntry>,
    modules: usize,
}

impl ScaffoldPlan {
    pub fn for_catalog(root: impl Into<PathBuf>, catalog: &ServiceCatalog) -> Self {
        let mut plan = Self {
            root: root.into(),
            entries: Vec::new(),
            modules: catalog.len(),
        };

        for file in ROOT_FILES {
            plan.add_file(file, root_banner(file));
        }

        let modules = Path::new(MODULES_DIR);
        plan.add_directory(modules);
        for service in catalog {
            let dir = modules.join(service.as_str());
            plan.add_directory(&dir);
            for file in MODULE_FILES {
                plan.add_file(dir.join(file), module_banner(file, service));
            }
        }

        let environments = Path::new(ENVIRONMENTS_DIR);
        plan.add_directory(environments);
        for env in Environment::ALL {
            let dir = environments.join(env.as_str());
            plan.add_directory(&dir);
            for file in ENVIRONMENT_FILES {
                plan.add_file(dir.join(file), environment_banner(file, env));
            }
        }

        plan
    }

    fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(PlanEntry::File(FileToWrite {
            path: path.into(),
            content,
        }));
    }

    fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(PlanEntry::Directory(DirectoryToCreate {
            path: path.into(),
        }));
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }

            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }

            if let PlanEntry::File(f) = entry {
                if f.is_empty() {
                    return Err(DomainError::EmptyContent {
                        path: path.display().to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            PlanEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn file_count(&self) -> usize {
        self.files().count()
    }

    /// Directories below the root (the root itself is not an entry).
    pub fn directory_count(&self) -> usize {
        self.directories().count()
    }

    pub fn module_count(&self) -> usize {
        self.modules
    }

    pub fn environment_count(&self) -> usize {
        Environment::ALL.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl PlanEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

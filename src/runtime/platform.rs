//! Platform conventions that change how a runtime is found and started.

use std::path::{Path, PathBuf};

/// The two process-control models the launcher supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Unix-like systems: bare executable names, image replacement.
    Posix,
    /// Windows: `.exe` names, spawn and wait.
    Windows,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// File names to look for, in preference order.
    ///
    /// Windows lookup is forced to the `.exe` name so a same-named
    /// suffix-less file (a shell script shim, say) is never selected.
    pub fn executable_names(self, base: &str) -> Vec<String> {
        match self {
            Platform::Posix => vec![base.to_string()],
            Platform::Windows => vec![format!("{}.exe", base)],
        }
    }

    /// Directory inside a provisioned environment holding its executables.
    pub fn provisioned_bin_dir(self, root: &Path) -> PathBuf {
        match self {
            Platform::Posix => root.join("bin"),
            Platform::Windows => root.join("Scripts"),
        }
    }

    /// Path of the runtime executable inside a provisioned environment.
    pub fn provisioned_executable(self, root: &Path, base: &str) -> PathBuf {
        let name = self
            .executable_names(base)
            .into_iter()
            .next()
            .unwrap_or_else(|| base.to_string());
        self.provisioned_bin_dir(root).join(name)
    }

    /// Whether the launcher can replace its own process image.
    pub fn replaces_image(self) -> bool {
        matches!(self, Platform::Posix)
    }

    pub fn name(self) -> &'static str {
        match self {
            Platform::Posix => "posix",
            Platform::Windows => "windows",
        }
    }
}

//! Library integration tests.

use myst_launcher::config::{LauncherConfig, ProcessEnv};
use myst_launcher::runtime::{Platform, SearchPath};
use myst_launcher::ui::MockUI;
use myst_launcher::LauncherError;
use std::path::{Path, PathBuf};

#[test]
fn error_types_are_public() {
    let err = LauncherError::VersionUnparseable {
        runtime: "node".into(),
        output: "garbage".into(),
    };
    assert!(err.to_string().contains("garbage"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> myst_launcher::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use myst_launcher::cli::Cli;

    let cli = Cli::from_args_os(["myst", "build", "--pdf"]);
    assert_eq!(cli.args, ["build", "--pdf"]);
}

#[test]
fn default_config_matches_myst() {
    let config = LauncherConfig::default();
    assert_eq!(config.app_name, "myst");
    assert_eq!(config.runtime.name, "node");
    assert_eq!(config.runtime.target_version, "18.0.0");
    assert_eq!(config.consent_variable, "MYSTMD_ALLOW_NODEENV");
    assert_eq!(config.marker.name, "MYST_LANG");
    assert_eq!(config.marker.value, "PYTHON");
    assert!(config.validate().is_ok());
}

#[test]
fn windows_layout_uses_scripts_and_exe() {
    use myst_launcher::runtime::ProvisionStore;

    let store = ProvisionStore::new(
        Path::new("C:/Users/me/AppData/Local"),
        "myst",
        Platform::Windows,
    );
    let record = store.location_for("18.0.0");
    assert!(record.runtime_path("node").ends_with("Scripts/node.exe"));
}

#[test]
fn denied_consent_surfaces_permission_denied() {
    use myst_launcher::cli::Launcher;

    let temp = tempfile::TempDir::new().unwrap();
    let config = LauncherConfig {
        data_dir: Some(temp.path().join("data")),
        bundle: Some(PathBuf::from("myst.cjs")),
        ..LauncherConfig::default()
    };
    let env = ProcessEnv::from_pairs([("PATH", temp.path().join("none"))]);
    let mut ui = MockUI::new();
    ui.queue_answers(["n"]);

    let err = Launcher::new(config, env, Platform::Posix)
        .run(Vec::new(), &mut ui)
        .unwrap_err();

    assert!(matches!(err, LauncherError::PermissionDenied { .. }));
    assert!(err.to_string().contains("https://nodejs.org/en/download"));
    assert_eq!(ui.questions().len(), 1);
    assert!(!temp.path().join("data").exists());
}

#[cfg(unix)]
mod end_to_end {
    use super::*;
    use myst_launcher::cli::Launcher;
    use myst_launcher::shell::SpawnAndWait;
    use std::ffi::OsString;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    /// Installer that lays out `bin/node` writing what it received to `seen`.
    fn write_installer(dir: &Path, seen: &Path) -> PathBuf {
        let node_body = format!(
            "#!/bin/sh\\n\
             if [ \"$1\" = \"-v\" ]; then echo v18.0.0; exit 0; fi\\n\
             echo \"$@ $MYST_LANG\" > {}\\n\
             exit 0\\n",
            seen.display()
        );
        let script = format!(
            "#!/bin/sh\n\
             for last in \"$@\"; do :; done\n\
             mkdir -p \"$last/bin\"\n\
             printf '{}' > \"$last/bin/node\"\n\
             chmod +x \"$last/bin/node\"\n",
            node_body
        );
        let path = dir.join("installer");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn provision_check_and_spawn() {
        let temp = tempfile::TempDir::new().unwrap();
        let seen = temp.path().join("seen");
        let installer = write_installer(temp.path(), &seen);

        let mut config = LauncherConfig {
            data_dir: Some(temp.path().join("data")),
            bundle: Some(PathBuf::from("/opt/myst/myst.cjs")),
            ..LauncherConfig::default()
        };
        config.installer.program = installer.display().to_string();
        config.installer.args = Vec::new();

        let env = ProcessEnv::from_pairs([("PATH", temp.path().join("none"))]);
        let launcher = Launcher::new(config, env, Platform::Posix)
            .with_handoff(Box::new(SpawnAndWait));
        let mut ui = MockUI::new();
        ui.queue_answers(["y"]);

        let code = launcher
            .run(vec![OsString::from("build"), OsString::from("--site")], &mut ui)
            .unwrap();

        assert_eq!(code, 0);
        assert_eq!(
            fs::read_to_string(&seen).unwrap().trim(),
            "/opt/myst/myst.cjs build --site PYTHON"
        );
        assert!(ui.has_message("Couldn't find installed `node`"));

        let plan = launcher.prepare(Vec::new(), &mut ui).unwrap();
        let search_path = SearchPath::parse(plan.environment().get("PATH").unwrap());
        assert_eq!(
            search_path.dirs().last(),
            Some(&temp.path().join("data/myst/18.0.0/bin"))
        );
        assert_eq!(ui.questions().len(), 1);
    }
}

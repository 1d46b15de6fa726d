//! Integration tests for lic

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// `lic` with an isolated config file and data root
    fn lic(temp: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("lic");
        cmd.env_remove("LIC_CONFIG")
            .env_remove("LIC_DATA_DIR")
            .arg("--config")
            .arg(temp.path().join("config.toml"))
            .arg("--data-dir")
            .arg(temp.path().join("data"));
        cmd
    }

    fn make_ldraw(dir: &Path) {
        fs::create_dir_all(dir.join("PARTS")).unwrap();
        fs::create_dir_all(dir.join("P")).unwrap();
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("lic")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("cache layout and tool paths"));
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("lic")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("lic"));
    }

    #[test]
    fn cache_path_creates_model_scoped_dir() {
        let temp = TempDir::new().unwrap();
        let expected = temp
            .path()
            .join("data")
            .join("cache")
            .join("car.mpd")
            .join("parts");

        lic(&temp)
            .args(["cache", "path", "parts", "--model", "/models/car.mpd"])
            .assert()
            .success()
            .stdout(predicate::str::contains(expected.display().to_string()));

        assert!(expected.is_dir());
    }

    #[test]
    fn cache_path_root_scoped_needs_no_model() {
        let temp = TempDir::new().unwrap();
        lic(&temp)
            .args(["cache", "path", "PNGs"])
            .assert()
            .success()
            .stdout(predicate::str::contains("PNGs"));

        assert!(temp.path().join("data").join("cache").join("PNGs").is_dir());
    }

    #[test]
    fn cache_path_relative_data_dir_is_printed_absolute() {
        let temp = TempDir::new().unwrap();
        let output = cargo_bin_cmd!("lic")
            .current_dir(temp.path())
            .env_remove("LIC_CONFIG")
            .env_remove("LIC_DATA_DIR")
            .args(["--config", "config.toml", "--data-dir", "rel-data"])
            .args(["cache", "path", "PNGs"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let printed = String::from_utf8(output.stdout).unwrap();
        assert!(Path::new(printed.trim()).is_absolute(), "{printed}");
        assert!(temp.path().join("rel-data").join("cache").join("PNGs").is_dir());
    }

    #[test]
    fn cache_path_model_without_model_fails() {
        let temp = TempDir::new().unwrap();
        lic(&temp)
            .args(["cache", "path", "model"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No model is loaded"))
            .stderr(predicate::str::contains("--model"));
    }

    #[test]
    fn cache_path_unknown_purpose_fails() {
        let temp = TempDir::new().unwrap();
        lic(&temp)
            .args(["cache", "path", "bitmaps"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown cache purpose"));
    }

    #[test]
    fn cache_init_then_list() {
        let temp = TempDir::new().unwrap();
        lic(&temp)
            .args(["cache", "init", "--model", "boat.ldr"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Final_Images"))
            .stdout(predicate::str::contains("templates"));

        lic(&temp)
            .args(["cache", "list", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::eq("boat.ldr\n"));
    }

    #[test]
    fn cache_list_empty() {
        let temp = TempDir::new().unwrap();
        lic(&temp)
            .args(["cache", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No model caches found"));
        assert!(!temp.path().join("data").exists());
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        lic(&temp)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        lic(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[tools]"));
    }

    #[test]
    fn config_set_unknown_key_fails() {
        let temp = TempDir::new().unwrap();
        lic(&temp)
            .args(["config", "set", "vm.name", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown config key"));
    }

    #[test]
    fn tools_set_invalid_library_changes_nothing() {
        let temp = TempDir::new().unwrap();
        let not_ldraw = temp.path().join("empty");
        fs::create_dir(&not_ldraw).unwrap();

        lic(&temp)
            .args(["tools", "set", "--ldraw"])
            .arg(&not_ldraw)
            .assert()
            .failure()
            .stdout(predicate::str::contains("'PARTS' and 'P'").not())
            .stderr(predicate::str::contains("'PARTS' and 'P'"));

        assert!(!temp.path().join("config.toml").exists());
    }

    #[test]
    fn tools_set_valid_library_persists() {
        let temp = TempDir::new().unwrap();
        let ldraw = temp.path().join("ldraw");
        make_ldraw(&ldraw);

        lic(&temp)
            .args(["tools", "set", "--ldraw"])
            .arg(&ldraw)
            .assert()
            .success();

        lic(&temp)
            .args(["tools", "show", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("LDraw={}", ldraw.display())));
    }

    #[test]
    fn tools_set_wrong_l3p_executable_changes_nothing() {
        let temp = TempDir::new().unwrap();
        let ldraw = temp.path().join("ldraw");
        make_ldraw(&ldraw);
        let wrong = temp.path().join("render.exe");
        fs::write(&wrong, b"").unwrap();

        lic(&temp)
            .args(["tools", "set", "--ldraw"])
            .arg(&ldraw)
            .arg("--l3p")
            .arg(&wrong)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid L3P path"));

        assert!(!temp.path().join("config.toml").exists());
    }

    #[test]
    fn tools_check_reports_every_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("no-ldraw");
        fs::write(
            temp.path().join("config.toml"),
            format!(
                "[tools]\nldraw = {:?}\nl3p = \"\"\npovray = \"\"\n",
                missing.display().to_string()
            ),
        )
        .unwrap();

        lic(&temp)
            .args(["tools", "check"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("[FAIL] LDraw: LDraw path must contain"))
            .stdout(predicate::str::contains("[WARN] L3P - not set"))
            .stdout(predicate::str::contains("[WARN] POV-Ray - not set"))
            .stderr(predicate::str::contains("1 of 3 tool paths failed the check"))
            .stderr(predicate::str::contains("'PARTS' and 'P'").not());
    }

    #[test]
    fn tools_check_passes_with_unset_tools() {
        let temp = TempDir::new().unwrap();
        let ldraw = temp.path().join("ldraw");
        make_ldraw(&ldraw);
        fs::write(
            temp.path().join("config.toml"),
            format!(
                "[tools]\nldraw = {:?}\nl3p = \"\"\npovray = \"\"\n",
                ldraw.display().to_string()
            ),
        )
        .unwrap();

        lic(&temp)
            .args(["tools", "check"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[OK] LDraw"));
    }
}

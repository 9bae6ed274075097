//! End-to-end bootstrap runs against a sandboxed toolchain.
//!
//! Every external tool (git, curl, wget, pyenv, pip) is a stub shell
//! script that records its invocation in a shared log file, so each test
//! can assert both the commands that ran and the ones that must not have.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

struct Sandbox {
    dir: tempfile::TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempfile::TempDir::new().unwrap();
        for sub in ["bin", "tpl", "home"] {
            fs::create_dir(dir.path().join(sub)).unwrap();
        }
        fs::write(dir.path().join("log"), "").unwrap();
        let sandbox = Self { dir };
        sandbox.install_templates();
        sandbox
    }

    fn bin(&self) -> PathBuf {
        self.dir.path().join("bin")
    }

    fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    fn tpl(&self) -> PathBuf {
        self.dir.path().join("tpl")
    }

    fn root(&self) -> PathBuf {
        self.home().join(".pyenv")
    }

    fn log(&self) -> String {
        fs::read_to_string(self.dir.path().join("log")).unwrap()
    }

    fn write_script(&self, path: &Path, body: &str) {
        use std::os::unix::fs::PermissionsExt;
        fs::write(path, body).unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// The scripts the fake git clone and fake pyenv install copy into
    /// place, mirroring what the real tools produce.
    fn install_templates(&self) {
        self.write_script(
            &self.tpl().join("install.sh"),
            concat!(
                "#!/bin/sh\n",
                "PATH=\"/usr/bin:/bin:$PATH\"; export PATH\n",
                "echo \"install.sh PREFIX=$PREFIX\" >> \"$PYCAMP_TEST_LOG\"\n",
                "mkdir -p \"$PREFIX/bin\"\n",
                "cp \"$PYCAMP_TEST_TPL/pyenv-impl\" \"$PREFIX/bin/pyenv\"\n",
                "chmod 755 \"$PREFIX/bin/pyenv\"\n",
                "exit 0\n",
            ),
        );
        self.write_script(
            &self.tpl().join("pyenv-impl"),
            concat!(
                "#!/bin/sh\n",
                "PATH=\"/usr/bin:/bin:$PATH\"; export PATH\n",
                "echo \"pyenv $*\" >> \"$PYCAMP_TEST_LOG\"\n",
                "if [ \"$1\" = \"install\" ]; then\n",
                "  mkdir -p \"$PYENV_ROOT/versions/$3/bin\"\n",
                "  cp \"$PYCAMP_TEST_TPL/pip-impl\" \"$PYENV_ROOT/versions/$3/bin/pip\"\n",
                "  chmod 755 \"$PYENV_ROOT/versions/$3/bin/pip\"\n",
                "fi\n",
                "exit 0\n",
            ),
        );
        self.write_script(
            &self.tpl().join("pip-impl"),
            concat!(
                "#!/bin/sh\n",
                "PATH=\"/usr/bin:/bin:$PATH\"; export PATH\n",
                "echo \"pip $*\" >> \"$PYCAMP_TEST_LOG\"\n",
                "exit 0\n",
            ),
        );
    }

    fn install_git(&self, clone_exit: i32) {
        let body = format!(
            concat!(
                "#!/bin/sh\n",
                "PATH=\"/usr/bin:/bin:$PATH\"; export PATH\n",
                "echo \"git $*\" >> \"$PYCAMP_TEST_LOG\"\n",
                "if [ \"$1\" = \"clone\" ]; then\n",
                "  if [ {exit} -ne 0 ]; then exit {exit}; fi\n",
                "  dest=\"$3\"\n",
                "  mkdir -p \"$dest/plugins/python-build\"\n",
                "  cp \"$PYCAMP_TEST_TPL/install.sh\" \"$dest/plugins/python-build/install.sh\"\n",
                "  chmod 755 \"$dest/plugins/python-build/install.sh\"\n",
                "fi\n",
                "exit 0\n",
            ),
            exit = clone_exit
        );
        self.write_script(&self.bin().join("git"), &body);
    }

    fn install_curl(&self) {
        self.write_script(&self.bin().join("curl"), "#!/bin/sh\nexit 0\n");
    }

    /// Replace the plugin installer template with one that fails.
    fn break_plugin_build(&self, exit: i32) {
        let body = format!(
            concat!(
                "#!/bin/sh\n",
                "PATH=\"/usr/bin:/bin:$PATH\"; export PATH\n",
                "echo \"install.sh PREFIX=$PREFIX\" >> \"$PYCAMP_TEST_LOG\"\n",
                "exit {exit}\n",
            ),
            exit = exit
        );
        self.write_script(&self.tpl().join("install.sh"), &body);
    }

    /// Place a pyenv stub on the sandbox PATH whose `install` fails.
    fn install_failing_pyenv_on_path(&self, exit: i32) {
        let body = format!(
            concat!(
                "#!/bin/sh\n",
                "PATH=\"/usr/bin:/bin:$PATH\"; export PATH\n",
                "echo \"pyenv $*\" >> \"$PYCAMP_TEST_LOG\"\n",
                "exit {exit}\n",
            ),
            exit = exit
        );
        self.write_script(&self.bin().join("pyenv"), &body);
    }

    fn install_wget(&self, banner: &str) {
        let body = format!("#!/bin/sh\necho '{}'\nexit 0\n", banner);
        self.write_script(&self.bin().join("wget"), &body);
    }

    /// Place a working pyenv stub directly on the sandbox PATH.
    fn install_pyenv_on_path(&self) {
        fs::copy(self.tpl().join("pyenv-impl"), self.bin().join("pyenv")).unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(
            self.bin().join("pyenv"),
            fs::Permissions::from_mode(0o755),
        )
        .unwrap();
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("pycamp").unwrap();
        cmd.env("HOME", self.home())
            .env("PATH", self.bin())
            .env("PYCAMP_TEST_LOG", self.dir.path().join("log"))
            .env("PYCAMP_TEST_TPL", self.tpl())
            .env_remove("PYENV_ROOT")
            .env_remove("PYCAMP_PYTHON_VERSION")
            .env_remove("PYCAMP_VERSION_BIN")
            .env_remove("PYCAMP_NO_PATH_HINTS")
            .env_remove("PYCAMP_PYENV_REPO")
            .env_remove("PYCAMP_PYENV_COMMIT")
            .env_remove("RUST_LOG");
        cmd
    }
}

fn index_of(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("expected {needle:?} in:\n{haystack}"))
}

#[test]
fn full_bootstrap_installs_everything() {
    let sandbox = Sandbox::new();
    sandbox.install_git(0);
    sandbox.install_curl();

    sandbox
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("export PATH=\""))
        .stdout(predicate::str::contains("Python toolchain ready"));

    assert!(sandbox.root().join("bin/pyenv").is_file());
    assert!(sandbox.root().join("versions/3.7.2/bin/pip").is_file());

    // The steps ran, and ran in order.
    let log = sandbox.log();
    let clone = index_of(&log, "git clone");
    let pin = index_of(&log, "checkout -b pycamp-pinned");
    let plugin = index_of(&log, "install.sh PREFIX=");
    let install = index_of(&log, "pyenv install --skip-existing 3.7.2");
    let pip_upgrade = index_of(&log, "pip install --upgrade pip");
    let venv = index_of(&log, "pip install virtualenv");
    assert!(clone < pin && pin < plugin && plugin < install);
    assert!(install < pip_upgrade && pip_upgrade < venv);
}

#[test]
fn pyenv_on_path_skips_fetch() {
    let sandbox = Sandbox::new();
    sandbox.install_git(0);
    sandbox.install_curl();
    sandbox.install_pyenv_on_path();

    sandbox.cmd().assert().success();

    let log = sandbox.log();
    assert!(!log.contains("git clone"));
    assert!(log.contains("pyenv install --skip-existing 3.7.2"));
    assert!(log.contains("pip install virtualenv"));
}

#[test]
fn existing_root_skips_clone() {
    let sandbox = Sandbox::new();
    sandbox.install_git(0);
    sandbox.install_curl();

    // A previous run left a populated root behind.
    use std::os::unix::fs::PermissionsExt;
    fs::create_dir_all(sandbox.root().join("bin")).unwrap();
    fs::copy(
        sandbox.tpl().join("pyenv-impl"),
        sandbox.root().join("bin/pyenv"),
    )
    .unwrap();
    fs::set_permissions(
        sandbox.root().join("bin/pyenv"),
        fs::Permissions::from_mode(0o755),
    )
    .unwrap();

    sandbox
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("already present"));

    let log = sandbox.log();
    assert!(!log.contains("git clone"));
    assert!(log.contains("pyenv install --skip-existing 3.7.2"));
}

#[test]
fn failing_clone_propagates_exit_code() {
    let sandbox = Sandbox::new();
    sandbox.install_git(7);
    sandbox.install_curl();

    sandbox
        .cmd()
        .assert()
        .code(7)
        .stderr(predicate::str::contains("git clone"));

    let log = sandbox.log();
    assert!(log.contains("git clone"));
    assert!(!log.contains("pyenv install"));
    assert!(!sandbox.root().join("bin/pyenv").exists());
}

#[test]
fn failing_plugin_build_propagates_exit_code() {
    let sandbox = Sandbox::new();
    sandbox.install_git(0);
    sandbox.install_curl();
    sandbox.break_plugin_build(5);

    sandbox
        .cmd()
        .assert()
        .code(5)
        .stderr(predicate::str::contains("install.sh"));

    let log = sandbox.log();
    assert!(log.contains("install.sh PREFIX="));
    assert!(!log.contains("pyenv install"));
    assert!(!log.contains("pip install"));
}

#[test]
fn failing_runtime_install_propagates_exit_code() {
    let sandbox = Sandbox::new();
    sandbox.install_git(0);
    sandbox.install_curl();
    sandbox.install_failing_pyenv_on_path(9);

    sandbox.cmd().assert().code(9);

    let log = sandbox.log();
    assert!(log.contains("pyenv install --skip-existing 3.7.2"));
    assert!(!log.contains("pip install --upgrade pip"));
    assert!(!log.contains("pip install virtualenv"));
}

#[test]
fn missing_downloader_stops_before_install() {
    let sandbox = Sandbox::new();
    sandbox.install_git(0);

    sandbox
        .cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("download tool"));

    let log = sandbox.log();
    assert!(!log.contains("pyenv install"));
    assert!(!log.contains("pip install"));
}

#[test]
fn old_wget_is_rejected() {
    let sandbox = Sandbox::new();
    sandbox.install_git(0);
    sandbox.install_wget("GNU Wget 1.13 built on linux-gnu.");

    sandbox
        .cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("wget 1.14 or newer"));

    assert!(!sandbox.log().contains("pyenv install"));
}

#[test]
fn new_wget_is_accepted() {
    let sandbox = Sandbox::new();
    sandbox.install_git(0);
    sandbox.install_wget("GNU Wget 1.21.2 built on linux-gnu.");

    sandbox.cmd().assert().success();
    assert!(sandbox.log().contains("pip install virtualenv"));
}

#[test]
fn no_path_hints_suppresses_export_recommendation() {
    let sandbox = Sandbox::new();
    sandbox.install_git(0);
    sandbox.install_curl();

    sandbox
        .cmd()
        .env("PYCAMP_NO_PATH_HINTS", "true")
        .assert()
        .success()
        .stdout(predicate::str::contains("export PATH=").not());

    assert!(sandbox.root().join("versions/3.7.2/bin/pip").is_file());
}

#[test]
fn bare_invocation_honors_version_env() {
    let sandbox = Sandbox::new();
    sandbox.install_git(0);
    sandbox.install_curl();

    sandbox
        .cmd()
        .env("PYCAMP_PYTHON_VERSION", "3.9.18")
        .assert()
        .success();

    assert!(sandbox.root().join("versions/3.9.18/bin/pip").is_file());
    assert!(sandbox
        .log()
        .contains("pyenv install --skip-existing 3.9.18"));
}

#[test]
fn explicit_version_flows_through_every_step() {
    let sandbox = Sandbox::new();
    sandbox.install_git(0);
    sandbox.install_curl();

    sandbox
        .cmd()
        .args(["run", "--python-version", "3.11.4"])
        .assert()
        .success();

    assert!(sandbox.root().join("versions/3.11.4/bin/pip").is_file());
    assert!(sandbox
        .log()
        .contains("pyenv install --skip-existing 3.11.4"));
}

//! netspeed-install: copies the `netspeed` binary sitting next to this one
//! into /usr/local/bin. Needs root.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const TARGET: &str = "/usr/local/bin/netspeed";

fn main() {
    print!("Do you want to install NetSpeed to /usr/local/bin? (y/n) ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() || !answer.trim().eq_ignore_ascii_case("y") {
        println!("Installation cancelled.");
        std::process::exit(0);
    }

    let source = match sibling_binary() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("An error occurred: {}", e);
            std::process::exit(1);
        }
    };

    match install(&source, Path::new(TARGET)) {
        Ok(()) => println!(
            "NetSpeed has been installed successfully. You can now run 'netspeed' from any terminal."
        ),
        Err(e) => {
            eprintln!("An error occurred: {}", e);
            if e.kind() == io::ErrorKind::PermissionDenied {
                eprintln!("This installer must be run as root!");
            }
            std::process::exit(1);
        }
    }
}

/// The `netspeed` executable in the same directory as this installer
fn sibling_binary() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "installer has no parent directory"))?;
    let binary = dir.join(format!("netspeed{}", std::env::consts::EXE_SUFFIX));
    if !binary.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} not found; build it first", binary.display()),
        ));
    }
    Ok(binary)
}

#[cfg(unix)]
fn install(source: &Path, target: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::copy(source, target)?;
    std::fs::set_permissions(target, std::fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn install(_source: &Path, _target: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "installing to /usr/local/bin is only supported on Unix",
    ))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    #[test]
    fn test_install_copies_and_marks_executable() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("netspeed");
        let target = dir.path().join("bin-netspeed");
        std::fs::write(&source, b"#!/bin/sh\n").unwrap();

        install(&source, &target).unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"#!/bin/sh\n");
        let mode = std::fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn test_missing_source_fails() {
        let dir = TempDir::new().unwrap();
        let err = install(&dir.path().join("absent"), &dir.path().join("out")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}

//! Code-signing of the installed dynamic libraries.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::core::Platform;
use crate::util::context::GlobalContext;
use crate::util::fs::walk_files;
use crate::util::process::{CommandRunner, ProcessBuilder};
use crate::util::shell::Status;

/// Errors raised while preparing the signing tool.
#[derive(Debug, Error)]
pub enum SignError {
    #[error("environment variable `{0}` is not set")]
    MissingEnv(&'static str),

    #[error("could not determine the home directory for the login keychain")]
    MissingHome,
}

/// How files are signed on one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignPlan {
    /// Extensions (without the dot) of files that get signed.
    pub extensions: &'static [&'static str],
    /// The signing tool.
    pub tool: PathBuf,
    /// Arguments placed before the file path.
    pub base_args: Vec<String>,
}

impl SignPlan {
    /// Build the plan for the context's platform.
    ///
    /// Returns `Ok(None)` on platforms where nothing is signed.
    pub fn for_context(ctx: &GlobalContext) -> Result<Option<Self>, SignError> {
        let sign = &ctx.config().sign;
        match ctx.platform() {
            Platform::Win => {
                let sdk_dir = ctx
                    .env()
                    .windows_sdk_dir
                    .as_ref()
                    .ok_or(SignError::MissingEnv("WindowsSdkDir"))?;
                Ok(Some(SignPlan {
                    extensions: &["dll"],
                    tool: sdk_dir.join("bin").join("x86").join("signtool.exe"),
                    base_args: vec![
                        "sign".to_string(),
                        "/n".to_string(),
                        sign.windows_identity.clone(),
                        "/a".to_string(),
                        "/tr".to_string(),
                        sign.timestamp_url.clone(),
                        "/as".to_string(),
                        "/td".to_string(),
                        "sha256".to_string(),
                        "/fd".to_string(),
                        "sha256".to_string(),
                    ],
                }))
            }
            Platform::Osx => {
                let home = ctx.env().home.as_ref().ok_or(SignError::MissingHome)?;
                let keychain = home
                    .join("Library")
                    .join("Keychains")
                    .join("login.keychain");
                Ok(Some(SignPlan {
                    extensions: &["dylib"],
                    tool: PathBuf::from("/usr/bin/codesign"),
                    base_args: vec![
                        "--keychain".to_string(),
                        keychain.display().to_string(),
                        "-vvvv".to_string(),
                        "--deep".to_string(),
                        "--force".to_string(),
                        "--sign".to_string(),
                        sign.macos_identity.clone(),
                    ],
                }))
            }
            Platform::Linux => Ok(None),
        }
    }

    /// Check whether `path` has one of the signable extensions.
    pub fn is_signable(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.contains(&ext))
    }

    /// The command that signs `path`.
    pub fn command(&self, path: &Path) -> ProcessBuilder {
        ProcessBuilder::new(&self.tool)
            .args(&self.base_args)
            .arg(path)
    }
}

/// Result of a signing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignReport {
    /// Files that were signed, in signing order.
    pub signed: Vec<PathBuf>,
}

/// Sign every signable file under the install root.
pub fn sign(ctx: &GlobalContext, runner: &mut dyn CommandRunner) -> Result<SignReport> {
    let Some(plan) = SignPlan::for_context(ctx)? else {
        tracing::debug!(platform = %ctx.platform(), "no signing tool");
        ctx.shell().warn("Not signing things on this platform yet");
        return Ok(SignReport::default());
    };

    let install_root = ctx.layout().install_root();
    if !install_root.is_dir() {
        ctx.shell().warn(format!(
            "nothing to sign, {} does not exist",
            install_root.display()
        ));
        return Ok(SignReport::default());
    }

    let span = ctx.shell().span(Status::Signing, install_root.display());
    let mut report = SignReport::default();

    for path in walk_files(&install_root)? {
        if !plan.is_signable(&path) {
            continue;
        }
        ctx.shell().status(Status::Signing, path.display());
        runner
            .run(&plan.command(&path))
            .with_context(|| format!("failed to sign {}", path.display()))?;
        report.signed.push(path);
    }

    tracing::info!("signed {} file(s)", report.signed.len());
    span.finish();
    Ok(report)
}

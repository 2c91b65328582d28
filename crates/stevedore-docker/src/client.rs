use std::collections::HashMap;
use std::path::Path;

use stevedore_core::ImageRef;

use crate::docker::DockerError;
use crate::executor::{DockerExecutor, RealExecutor};

/// Docker operations client, parameterized over the executor for testability.
pub struct DockerClient<E: DockerExecutor = RealExecutor> {
    executor: E,
}

impl DockerClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for DockerClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DockerExecutor> DockerClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Client version, e.g. `27.3.1`. Used by doctor.
    pub async fn version(&self) -> Result<String, DockerError> {
        let output = self
            .executor
            .exec(&args(["version", "--format", "{{.Client.Version}}"]))
            .await?;
        Ok(output.trim().to_owned())
    }

    /// Build the context into `image`, streaming build output.
    pub async fn build(
        &self,
        context: &Path,
        dockerfile: Option<&str>,
        build_args: &HashMap<String, String>,
        image: &ImageRef,
    ) -> Result<(), BuildError> {
        let context = context
            .to_str()
            .ok_or_else(|| BuildError::InvalidContext(context.to_path_buf()))?;

        let mut cmd = vec![
            "build".to_owned(),
            "--tag".to_owned(),
            image.to_string(),
        ];

        if let Some(file) = dockerfile {
            cmd.push("--file".to_owned());
            cmd.push(file.to_owned());
        }

        for (key, value) in build_args {
            cmd.push("--build-arg".to_owned());
            cmd.push(format!("{key}={value}"));
        }

        cmd.push(context.to_owned());

        self.executor
            .exec_streaming(&cmd)
            .await
            .map_err(|e| BuildError::Build { source: e })
    }

    /// Apply `dst` as an additional name for `src`.
    pub async fn tag(&self, src: &ImageRef, dst: &ImageRef) -> Result<(), PushError> {
        self.executor
            .exec(&[
                "tag".to_owned(),
                src.to_string(),
                dst.to_string(),
            ])
            .await
            .map(|_| ())
            .map_err(|e| PushError::Tag { source: e })
    }

    /// Push a registry-qualified image, streaming layer progress.
    pub async fn push(&self, image: &ImageRef) -> Result<(), PushError> {
        self.executor
            .exec_streaming(&["push".to_owned(), image.to_string()])
            .await
            .map_err(|e| PushError::Push { source: e })
    }

    /// Log in to a registry. The password goes through stdin, never argv.
    pub async fn login(
        &self,
        host: &str,
        username: &str,
        password: &str,
    ) -> Result<(), LoginError> {
        self.executor
            .exec_with_stdin(
                &args([
                    "login",
                    "--username",
                    username,
                    "--password-stdin",
                    host,
                ]),
                password.as_bytes(),
            )
            .await
            .map(|_| ())
            .map_err(|e| LoginError::Login { source: e })
    }
}

// ── Helper ──

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}

// ── Error types ──

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("build context path is not valid UTF-8: {0}")]
    InvalidContext(std::path::PathBuf),

    #[error("docker build failed")]
    Build { source: DockerError },
}

#[derive(Debug, thiserror::Error)]
pub enum PushError {
    #[error("docker tag failed")]
    Tag { source: DockerError },

    #[error("docker push failed")]
    Push { source: DockerError },
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("registry login failed")]
    Login { source: DockerError },
}

use crate::aws::AwsError;
use crate::executor::{AwsExecutor, RealExecutor};

/// AWS operations client, parameterized over the executor for testability.
pub struct AwsClient<E: AwsExecutor = RealExecutor> {
    executor: E,
}

impl AwsClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for AwsClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: AwsExecutor> AwsClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// CLI version line, e.g. `aws-cli/2.22.0 Python/3.12 ...`. Used by doctor.
    pub async fn version(&self) -> Result<String, AwsError> {
        let output = self.executor.exec(&args(["--version"])).await?;
        Ok(output.trim().to_owned())
    }

    // ── Registry authentication ──

    /// Short-lived registry password for `docker login --password-stdin`.
    pub async fn login_password(&self, region: &str) -> Result<String, AuthError> {
        let output = self
            .executor
            .exec(&args(["ecr", "get-login-password", "--region", region]))
            .await
            .map_err(|e| AuthError::Password { source: e })?;

        Ok(output.trim().to_owned())
    }

    /// AWS account id of the ambient credentials. Used by doctor.
    pub async fn account_id(&self) -> Result<String, AuthError> {
        let output = self
            .executor
            .exec(&args([
                "sts",
                "get-caller-identity",
                "--query",
                "Account",
                "--output",
                "text",
            ]))
            .await
            .map_err(|e| AuthError::Identity { source: e })?;

        Ok(output.trim().to_owned())
    }

    // ── ECR repositories ──

    /// Ensure the ECR repository exists, creating it if needed.
    /// Returns `true` when the repository was created by this call.
    pub async fn ensure_repository(
        &self,
        repo_name: &str,
        region: &str,
    ) -> Result<bool, RegistryError> {
        let exists = self
            .executor
            .exec(&args([
                "ecr",
                "describe-repositories",
                "--repository-names",
                repo_name,
                "--region",
                region,
            ]))
            .await
            .is_ok();

        if exists {
            return Ok(false);
        }

        self.executor
            .exec(&args([
                "ecr",
                "create-repository",
                "--repository-name",
                repo_name,
                "--region",
                region,
            ]))
            .await
            .map_err(|e| RegistryError::CreateRepository { source: e })?;

        Ok(true)
    }
}

// ── Helper ──

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}

// ── Error types ──

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("failed to obtain a registry password — check AWS credentials")]
    Password { source: AwsError },

    #[error("failed to resolve AWS caller identity")]
    Identity { source: AwsError },
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to create ECR repository")]
    CreateRepository { source: AwsError },
}

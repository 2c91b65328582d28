use mockall::mock;
use stevedore_cloud::aws::AwsError;
use stevedore_cloud::client::{AuthError, AwsClient, RegistryError};
use stevedore_cloud::executor::AwsExecutor;

mock! {
    Executor {}

    impl AwsExecutor for Executor {
        async fn exec(&self, args: &[String]) -> Result<String, AwsError>;
    }
}

// ── Login Password Tests ──

#[tokio::test]
async fn login_password_is_trimmed_stdout() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|args| {
            args.contains(&"ecr".to_owned())
                && args.contains(&"get-login-password".to_owned())
                && args.contains(&"--region".to_owned())
                && args.contains(&"us-east-1".to_owned())
        })
        .returning(|_| Ok("eyJwYXlsb2FkIjoi...token\n".to_owned()));

    let client = AwsClient::with_executor(mock);
    let password = client.login_password("us-east-1").await.unwrap();

    assert_eq!(password, "eyJwYXlsb2FkIjoi...token");
}

#[tokio::test]
async fn login_password_failure_surfaces_as_auth_error() {
    let mut mock = MockExecutor::new();

    mock.expect_exec().returning(|_| {
        Err(AwsError::CommandFailed {
            args: vec![],
            stderr: "Unable to locate credentials".to_owned(),
        })
    });

    let client = AwsClient::with_executor(mock);
    let result = client.login_password("us-east-1").await;

    assert!(matches!(result, Err(AuthError::Password { .. })));
}

// ── Caller Identity Tests ──

#[tokio::test]
async fn account_id_returns_trimmed_account() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|args| {
            args.contains(&"sts".to_owned())
                && args.contains(&"get-caller-identity".to_owned())
                && args.contains(&"Account".to_owned())
        })
        .returning(|_| Ok("123456789012\n".to_owned()));

    let client = AwsClient::with_executor(mock);
    let account = client.account_id().await.unwrap();

    assert_eq!(account, "123456789012");
}

#[tokio::test]
async fn account_id_failure_surfaces_as_identity_error() {
    let mut mock = MockExecutor::new();

    mock.expect_exec().returning(|_| {
        Err(AwsError::CommandFailed {
            args: vec![],
            stderr: "ExpiredToken".to_owned(),
        })
    });

    let client = AwsClient::with_executor(mock);
    let result = client.account_id().await;

    assert!(matches!(result, Err(AuthError::Identity { .. })));
}

// ── Repository Tests ──

#[tokio::test]
async fn ensure_repository_skips_create_when_exists() {
    let mut mock = MockExecutor::new();

    // describe → exists; create must not be called
    mock.expect_exec()
        .withf(|args| args.contains(&"describe-repositories".to_owned()))
        .returning(|_| Ok("{\"repositories\": []}".to_owned()));

    let client = AwsClient::with_executor(mock);
    let created = client.ensure_repository("webapp", "us-east-1").await.unwrap();

    assert!(!created);
}

#[tokio::test]
async fn ensure_repository_creates_when_missing() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|args| args.contains(&"describe-repositories".to_owned()))
        .returning(|_| {
            Err(AwsError::CommandFailed {
                args: vec![],
                stderr: "RepositoryNotFoundException".to_owned(),
            })
        });

    mock.expect_exec()
        .withf(|args| {
            args.contains(&"create-repository".to_owned())
                && args.contains(&"--repository-name".to_owned())
                && args.contains(&"webapp".to_owned())
        })
        .returning(|_| Ok(String::new()));

    let client = AwsClient::with_executor(mock);
    let created = client.ensure_repository("webapp", "us-east-1").await.unwrap();

    assert!(created);
}

#[tokio::test]
async fn ensure_repository_create_failure_surfaces() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|args| args.contains(&"describe-repositories".to_owned()))
        .returning(|_| {
            Err(AwsError::CommandFailed {
                args: vec![],
                stderr: "RepositoryNotFoundException".to_owned(),
            })
        });

    mock.expect_exec()
        .withf(|args| args.contains(&"create-repository".to_owned()))
        .returning(|_| {
            Err(AwsError::CommandFailed {
                args: vec![],
                stderr: "AccessDeniedException".to_owned(),
            })
        });

    let client = AwsClient::with_executor(mock);
    let result = client.ensure_repository("webapp", "us-east-1").await;

    assert!(matches!(
        result,
        Err(RegistryError::CreateRepository { .. })
    ));
}

// ── Version Tests ──

#[tokio::test]
async fn version_returns_cli_line() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|args| args.contains(&"--version".to_owned()))
        .returning(|_| Ok("aws-cli/2.22.0 Python/3.12.6 Linux/6.8\n".to_owned()));

    let client = AwsClient::with_executor(mock);
    let version = client.version().await.unwrap();

    assert_eq!(version, "aws-cli/2.22.0 Python/3.12.6 Linux/6.8");
}

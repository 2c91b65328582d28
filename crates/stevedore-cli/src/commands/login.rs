use std::path::PathBuf;

use stevedore_cloud::AwsClient;
use stevedore_core::StevedoreConfig;
use stevedore_docker::DockerClient;

/// Authenticate docker against the configured registry.
pub async fn login() -> anyhow::Result<()> {
    let config = StevedoreConfig::load(&PathBuf::from("."))?;
    let host = super::require_registry_host(&config)?;
    let region = &config.registry.region;

    let aws = AwsClient::new();
    let docker = DockerClient::new();

    let password = aws.login_password(region).await?;
    docker.login(host, super::REGISTRY_USERNAME, &password).await?;

    println!("Login succeeded: {host}");
    Ok(())
}

mod build;
mod doctor;
mod init;
mod login;
mod push;
mod tag;

use stevedore_core::StevedoreConfig;

pub use build::build;
pub use doctor::doctor;
pub use init::init;
pub use login::login;
pub use push::push;
pub use tag::tag;

/// Username the registry expects alongside an ECR login password.
pub(crate) const REGISTRY_USERNAME: &str = "AWS";

pub(crate) fn require_registry_host(config: &StevedoreConfig) -> anyhow::Result<&str> {
    config.registry.host.as_deref().ok_or_else(|| {
        anyhow::anyhow!("registry host not set in stevedore.toml — set [registry].host")
    })
}

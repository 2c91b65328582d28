pub mod client;
pub mod docker;
pub mod executor;

pub use client::{BuildError, DockerClient, LoginError, PushError};
pub use docker::DockerError;
pub use executor::{DockerExecutor, RealExecutor};

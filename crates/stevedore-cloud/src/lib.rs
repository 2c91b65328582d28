pub mod aws;
pub mod client;
pub mod executor;

pub use aws::AwsError;
pub use client::{AuthError, AwsClient, RegistryError};
pub use executor::{AwsExecutor, RealExecutor};

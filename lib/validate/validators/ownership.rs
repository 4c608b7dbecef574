//! Package registry ownership collaborator.

use crate::model::Package;
use async_trait::async_trait;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Verifies that a publisher may publish a package under a server name.
///
/// Implementations typically query the package's upstream registry (npm,
/// PyPI, OCI, ...) for a marker linking the package to the server name.
#[async_trait]
pub trait PackageOwnershipValidator: Send + Sync {
    /// Return `Ok` when `package` may be published as part of `server_name`.
    async fn validate_package(&self, package: &Package, server_name: &str) -> anyhow::Result<()>;
}

/// Ownership validator that accepts every package.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOwnershipValidator;

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

#[async_trait]
impl PackageOwnershipValidator for NoopOwnershipValidator {
    async fn validate_package(&self, _package: &Package, _server_name: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

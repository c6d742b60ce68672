use archivist_protocol::endpoints;
use archivist_types::{Asset, Attributes, Identity, NewAsset};
use tracing::info;

use crate::client::Archivist;
use crate::confirm::wait_for_confirmation;
use crate::error::SdkResult;
use crate::filter::Filter;

/// Asset operations, under `v2/assets`.
pub struct Assets<'a> {
    arch: &'a Archivist,
}

impl<'a> Assets<'a> {
    pub(crate) fn new(arch: &'a Archivist) -> Self {
        Self { arch }
    }

    fn collection() -> String {
        format!("{}/{}", endpoints::V2, endpoints::ASSETS)
    }

    fn resource(identity: &Identity) -> String {
        format!("{}/{}", endpoints::V2, identity)
    }

    /// Create an asset. Its storage integrity comes from the client's
    /// fixtures. With `confirm`, waits until the service confirms it.
    pub async fn create(
        &self,
        behaviours: Vec<String>,
        attributes: Attributes,
        confirm: bool,
    ) -> SdkResult<Asset> {
        self.create_from(NewAsset::new(behaviours, attributes), confirm).await
    }

    /// Create from a prepared body. An explicit storage integrity on `asset`
    /// wins over the fixture.
    pub async fn create_from(&self, mut asset: NewAsset, confirm: bool) -> SdkResult<Asset> {
        if asset.storage_integrity.is_none() {
            asset.storage_integrity = self.arch.fixtures().assets.storage_integrity;
        }
        let created: Asset = self.arch.post(&Self::collection(), &asset).await?;
        info!(
            identity = %created.identity,
            storage_integrity = %created.storage_integrity,
            "created asset",
        );
        if !confirm {
            return Ok(created);
        }
        self.wait_for_confirmation(&created.identity).await
    }

    pub async fn read(&self, identity: &Identity) -> SdkResult<Asset> {
        self.arch.get(&Self::resource(identity)).await
    }

    pub async fn wait_for_confirmation(&self, identity: &Identity) -> SdkResult<Asset> {
        wait_for_confirmation(
            identity.as_str(),
            &self.arch.config().confirm,
            move || self.read(identity),
            |asset: &Asset| asset.confirmation_status,
        )
        .await
    }

    pub async fn list(&self, filter: &Filter) -> SdkResult<Vec<Asset>> {
        self.arch.list(&Self::collection(), endpoints::ASSETS, filter).await
    }

    pub async fn count(&self, filter: &Filter) -> SdkResult<u64> {
        self.arch.count(&Self::collection(), filter).await
    }

    pub async fn read_by_signature(&self, filter: &Filter) -> SdkResult<Asset> {
        self.arch
            .get_by_signature(&Self::collection(), endpoints::ASSETS, filter)
            .await
    }
}

use archivist_protocol::endpoints;
use archivist_types::{Identity, Location, NewLocation};
use serde_json::Value;
use tracing::info;

use crate::client::Archivist;
use crate::error::SdkResult;
use crate::filter::Filter;

/// Location operations, under `v2/locations`.
pub struct Locations<'a> {
    arch: &'a Archivist,
}

impl<'a> Locations<'a> {
    pub(crate) fn new(arch: &'a Archivist) -> Self {
        Self { arch }
    }

    fn collection() -> String {
        format!("{}/{}", endpoints::V2, endpoints::LOCATIONS)
    }

    fn resource(identity: &Identity) -> String {
        format!("{}/{}", endpoints::V2, identity)
    }

    pub async fn create(&self, location: &NewLocation) -> SdkResult<Location> {
        let created: Location = self.arch.post(&Self::collection(), location).await?;
        info!(identity = %created.identity, display_name = %created.display_name, "created location");
        Ok(created)
    }

    pub async fn read(&self, identity: &Identity) -> SdkResult<Location> {
        self.arch.get(&Self::resource(identity)).await
    }

    pub async fn update(&self, identity: &Identity, patch: &NewLocation) -> SdkResult<Location> {
        self.arch.patch(&Self::resource(identity), patch).await
    }

    pub async fn delete(&self, identity: &Identity) -> SdkResult<Value> {
        let body = self.arch.delete(&Self::resource(identity)).await?;
        info!(%identity, "deleted location");
        Ok(body)
    }

    pub async fn list(&self, filter: &Filter) -> SdkResult<Vec<Location>> {
        self.arch.list(&Self::collection(), endpoints::LOCATIONS, filter).await
    }

    pub async fn count(&self, filter: &Filter) -> SdkResult<u64> {
        self.arch.count(&Self::collection(), filter).await
    }

    pub async fn read_by_signature(&self, filter: &Filter) -> SdkResult<Location> {
        self.arch
            .get_by_signature(&Self::collection(), endpoints::LOCATIONS, filter)
            .await
    }
}

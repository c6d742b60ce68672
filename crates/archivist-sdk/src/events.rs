use archivist_protocol::endpoints;
use archivist_types::{Event, Identity, NewEvent};
use tracing::info;

use crate::client::Archivist;
use crate::confirm::wait_for_confirmation;
use crate::error::{SdkError, SdkResult};
use crate::filter::Filter;

/// Event operations, under `v2/assets/<asset>/events`.
pub struct Events<'a> {
    arch: &'a Archivist,
}

impl<'a> Events<'a> {
    pub(crate) fn new(arch: &'a Archivist) -> Self {
        Self { arch }
    }

    /// `v2/<asset>/events`, or `v2/assets/-/events` across all assets.
    fn collection(asset: Option<&Identity>) -> String {
        match asset {
            Some(asset) => format!("{}/{}/{}", endpoints::V2, asset, endpoints::EVENTS),
            None => format!(
                "{}/{}/{}/{}",
                endpoints::V2,
                endpoints::ASSETS,
                endpoints::ANY_ASSET,
                endpoints::EVENTS
            ),
        }
    }

    fn resource(identity: &Identity) -> String {
        format!("{}/{}", endpoints::V2, identity)
    }

    /// Record an event against `asset`.
    pub async fn create(&self, asset: &Identity, event: &NewEvent, confirm: bool) -> SdkResult<Event> {
        if asset.collection() != endpoints::ASSETS {
            return Err(SdkError::IllegalArgument(format!("{asset} is not an asset")));
        }
        let created: Event = self.arch.post(&Self::collection(Some(asset)), event).await?;
        info!(
            identity = %created.identity,
            operation = %created.operation,
            behaviour = %created.behaviour,
            "created event",
        );
        if !confirm {
            return Ok(created);
        }
        self.wait_for_confirmation(&created.identity).await
    }

    pub async fn read(&self, identity: &Identity) -> SdkResult<Event> {
        self.arch.get(&Self::resource(identity)).await
    }

    pub async fn wait_for_confirmation(&self, identity: &Identity) -> SdkResult<Event> {
        wait_for_confirmation(
            identity.as_str(),
            &self.arch.config().confirm,
            move || self.read(identity),
            |event: &Event| event.confirmation_status,
        )
        .await
    }

    pub async fn list(&self, asset: Option<&Identity>, filter: &Filter) -> SdkResult<Vec<Event>> {
        self.arch
            .list(&Self::collection(asset), endpoints::EVENTS, filter)
            .await
    }

    pub async fn count(&self, asset: Option<&Identity>, filter: &Filter) -> SdkResult<u64> {
        self.arch.count(&Self::collection(asset), filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_paths() {
        let asset = Identity::parse("assets/a1").unwrap();
        assert_eq!(Events::collection(Some(&asset)), "v2/assets/a1/events");
        assert_eq!(Events::collection(None), "v2/assets/-/events");
        let event = Identity::parse("assets/a1/events/e1").unwrap();
        assert_eq!(Events::resource(&event), "v2/assets/a1/events/e1");
    }
}

use archivist_protocol::endpoints;
use archivist_types::{Identity, NewSubject, Subject, SubjectUpdate};
use serde_json::Value;
use tracing::info;

use crate::client::Archivist;
use crate::error::{SdkError, SdkResult};
use crate::filter::Filter;

/// Subject operations, under `iam/v1/subjects`.
pub struct Subjects<'a> {
    arch: &'a Archivist,
}

impl<'a> Subjects<'a> {
    pub(crate) fn new(arch: &'a Archivist) -> Self {
        Self { arch }
    }

    fn collection() -> String {
        format!("{}/{}", endpoints::IAM_V1, endpoints::SUBJECTS)
    }

    fn resource(identity: &Identity) -> String {
        format!("{}/{}", endpoints::IAM_V1, identity)
    }

    fn filter(display_name: Option<&str>) -> Filter {
        match display_name {
            Some(name) => Filter::new().prop("display_name", name),
            None => Filter::new(),
        }
    }

    /// Register a subject.
    pub async fn create(
        &self,
        display_name: &str,
        wallet_pub_keys: Vec<String>,
        tessera_pub_keys: Vec<String>,
    ) -> SdkResult<Subject> {
        self.create_from(&NewSubject::new(display_name, wallet_pub_keys, tessera_pub_keys))
            .await
    }

    pub async fn create_from(&self, subject: &NewSubject) -> SdkResult<Subject> {
        let created: Subject = self.arch.post(&Self::collection(), subject).await?;
        info!(identity = %created.identity, display_name = %created.display_name, "created subject");
        Ok(created)
    }

    pub async fn read(&self, identity: &Identity) -> SdkResult<Subject> {
        self.arch.get(&Self::resource(identity)).await
    }

    /// Patch the fields set in `update`; an empty update is rejected.
    pub async fn update(&self, identity: &Identity, update: &SubjectUpdate) -> SdkResult<Subject> {
        if update.is_empty() {
            return Err(SdkError::IllegalArgument(format!("nothing to update on {identity}")));
        }
        self.arch.patch(&Self::resource(identity), update).await
    }

    /// Delete a subject. The service answers `{}`.
    pub async fn delete(&self, identity: &Identity) -> SdkResult<Value> {
        let body = self.arch.delete(&Self::resource(identity)).await?;
        info!(%identity, "deleted subject");
        Ok(body)
    }

    pub async fn list(&self, display_name: Option<&str>) -> SdkResult<Vec<Subject>> {
        self.arch
            .list(&Self::collection(), endpoints::SUBJECTS, &Self::filter(display_name))
            .await
    }

    pub async fn count(&self, display_name: Option<&str>) -> SdkResult<u64> {
        self.arch.count(&Self::collection(), &Self::filter(display_name)).await
    }

    /// The one subject with this display name.
    pub async fn read_by_signature(&self, display_name: Option<&str>) -> SdkResult<Subject> {
        self.arch
            .get_by_signature(&Self::collection(), endpoints::SUBJECTS, &Self::filter(display_name))
            .await
    }
}

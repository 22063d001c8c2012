use crate::api::models::{MediaFile, Scenario};
use crate::api::Comagic;
use crate::core::errors::ComagicError;
use crate::core::kernel::RpcTransport;
use crate::core::record::Records;
use crate::core::types::ListOptions;

impl<T: RpcTransport> Comagic<T> {
    pub async fn get_scenarios(
        &mut self,
        options: ListOptions<Scenario>,
    ) -> Result<Records<Scenario>, ComagicError> {
        self.list("scenarios", options).await
    }

    pub async fn get_media_files(
        &mut self,
        options: ListOptions<MediaFile>,
    ) -> Result<Records<MediaFile>, ComagicError> {
        self.list("media_files", options).await
    }
}

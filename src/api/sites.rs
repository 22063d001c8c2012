use crate::api::models::{Site, SiteBlock};
use crate::api::payloads::SitePayload;
use crate::api::Comagic;
use crate::core::errors::ComagicError;
use crate::core::kernel::{RequestBuilder, RpcTransport};
use crate::core::record::Records;
use crate::core::types::ListOptions;
use serde_json::Value;

impl<T: RpcTransport> Comagic<T> {
    pub async fn get_sites(&mut self, options: ListOptions<Site>) -> Result<Records<Site>, ComagicError> {
        self.list("sites", options).await
    }

    pub async fn create_site(
        &mut self,
        site: &SitePayload,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("create", "sites")
            .user_id(user_id)
            .payload(site);
        self.execute(builder).await
    }

    pub async fn update_site(
        &mut self,
        id: i64,
        site: &SitePayload,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("update", "sites")
            .user_id(user_id)
            .require("id", id)
            .payload(site);
        self.execute(builder).await
    }

    pub async fn delete_site(&mut self, id: i64, user_id: Option<i64>) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("delete", "sites")
            .user_id(user_id)
            .require("id", id);
        self.execute(builder).await
    }

    pub async fn get_site_blocks(
        &mut self,
        options: ListOptions<SiteBlock>,
    ) -> Result<Records<SiteBlock>, ComagicError> {
        self.list("site_blocks", options).await
    }

    pub async fn create_site_block(
        &mut self,
        site_id: i64,
        name: &str,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("create", "site_blocks")
            .user_id(user_id)
            .require("site_id", site_id)
            .require("name", name);
        self.execute(builder).await
    }

    pub async fn update_site_block(
        &mut self,
        id: i64,
        name: &str,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("update", "site_blocks")
            .user_id(user_id)
            .require("id", id)
            .require("name", name);
        self.execute(builder).await
    }

    pub async fn delete_site_block(&mut self, id: i64, user_id: Option<i64>) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("delete", "site_blocks")
            .user_id(user_id)
            .require("id", id);
        self.execute(builder).await
    }
}

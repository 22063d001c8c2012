use crate::api::models::Tag;
use crate::api::Comagic;
use crate::core::errors::ComagicError;
use crate::core::kernel::{RequestBuilder, RpcTransport};
use crate::core::record::Records;
use crate::core::types::ListOptions;
use serde_json::Value;

impl<T: RpcTransport> Comagic<T> {
    pub async fn get_tags(&mut self, options: ListOptions<Tag>) -> Result<Records<Tag>, ComagicError> {
        self.list("tags", options).await
    }

    pub async fn create_tag(&mut self, name: &str, user_id: Option<i64>) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("create", "tags")
            .user_id(user_id)
            .require("name", name);
        self.execute(builder).await
    }

    pub async fn update_tag(
        &mut self,
        id: i64,
        name: &str,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("update", "tags")
            .user_id(user_id)
            .require("id", id)
            .require("name", name);
        self.execute(builder).await
    }

    pub async fn delete_tag(&mut self, id: i64, user_id: Option<i64>) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("delete", "tags")
            .user_id(user_id)
            .require("id", id);
        self.execute(builder).await
    }
}

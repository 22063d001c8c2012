use crate::api::models::Schedule;
use crate::api::Comagic;
use crate::core::errors::ComagicError;
use crate::core::kernel::{RequestBuilder, RpcTransport};
use crate::core::record::Records;
use crate::core::types::ListOptions;
use serde_json::Value;

impl<T: RpcTransport> Comagic<T> {
    pub async fn get_schedules(
        &mut self,
        options: ListOptions<Schedule>,
    ) -> Result<Records<Schedule>, ComagicError> {
        self.list("schedules", options).await
    }

    /// `schedules` holds the weekly intervals as the API describes them
    pub async fn create_schedule(
        &mut self,
        name: &str,
        schedules: Option<Value>,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("create", "schedules")
            .user_id(user_id)
            .require("name", name)
            .param("schedules", schedules);
        self.execute(builder).await
    }

    pub async fn update_schedule(
        &mut self,
        id: i64,
        name: &str,
        schedules: Option<Value>,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("update", "schedules")
            .user_id(user_id)
            .require("id", id)
            .require("name", name)
            .param("schedules", schedules);
        self.execute(builder).await
    }

    pub async fn delete_schedule(&mut self, id: i64, user_id: Option<i64>) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("delete", "schedules")
            .user_id(user_id)
            .require("id", id);
        self.execute(builder).await
    }
}

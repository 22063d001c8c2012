use crate::api::models::SipLine;
use crate::api::Comagic;
use crate::core::errors::ComagicError;
use crate::core::kernel::{RequestBuilder, RpcTransport};
use crate::core::record::{Record, Records};
use crate::core::types::{BillingState, ListOptions};
use serde_json::Value;
use tracing::instrument;

impl<T: RpcTransport> Comagic<T> {
    pub async fn get_sip_lines(
        &mut self,
        options: ListOptions<SipLine>,
    ) -> Result<Records<SipLine>, ComagicError> {
        self.list("sip_lines", options).await
    }

    /// Create a line for an employee; the server answers with the new line
    #[instrument(skip(self))]
    pub async fn create_sip_line(
        &mut self,
        employee_id: i64,
        virtual_phone_number: &str,
        user_id: Option<i64>,
    ) -> Result<SipLine, ComagicError> {
        let builder = RequestBuilder::new("create", "sip_lines")
            .user_id(user_id)
            .require("employee_id", employee_id)
            .require("virtual_phone_number", virtual_phone_number);
        let result = self.execute(builder).await?;
        SipLine::from_raw(&result)
    }

    pub async fn update_sip_line(
        &mut self,
        id: i64,
        employee_id: i64,
        virtual_phone_number: &str,
        billing_state: Option<BillingState>,
        channels_count: Option<u32>,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("update", "sip_lines")
            .user_id(user_id)
            .require("id", id)
            .require("employee_id", employee_id)
            .require("virtual_phone_number", virtual_phone_number)
            .param("billing_state", billing_state)
            .param("channels_count", channels_count);
        self.execute(builder).await
    }

    pub async fn delete_sip_line(&mut self, id: i64, user_id: Option<i64>) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("delete", "sip_lines")
            .user_id(user_id)
            .require("id", id);
        self.execute(builder).await
    }

    /// Generate a new password for the line
    pub async fn update_sip_line_password(
        &mut self,
        id: i64,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("update", "sip_line_password")
            .user_id(user_id)
            .require("id", id);
        self.execute(builder).await
    }
}

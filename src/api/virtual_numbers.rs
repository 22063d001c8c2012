use crate::api::models::{AvailableVirtualNumber, VirtualNumber};
use crate::api::Comagic;
use crate::core::errors::ComagicError;
use crate::core::kernel::{RequestBuilder, RpcTransport};
use crate::core::record::Records;
use crate::core::types::ListOptions;
use serde_json::Value;

impl<T: RpcTransport> Comagic<T> {
    pub async fn get_virtual_numbers(
        &mut self,
        options: ListOptions<VirtualNumber>,
    ) -> Result<Records<VirtualNumber>, ComagicError> {
        self.list("virtual_numbers", options).await
    }

    /// Numbers that are free to connect
    pub async fn get_available_virtual_numbers(
        &mut self,
        options: ListOptions<AvailableVirtualNumber>,
    ) -> Result<Records<AvailableVirtualNumber>, ComagicError> {
        self.list("available_virtual_numbers", options).await
    }

    pub async fn enable_virtual_number(
        &mut self,
        virtual_phone_number: &str,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        self.toggle_virtual_number("enable", virtual_phone_number, user_id)
            .await
    }

    pub async fn disable_virtual_number(
        &mut self,
        virtual_phone_number: &str,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        self.toggle_virtual_number("disable", virtual_phone_number, user_id)
            .await
    }

    /// Numbers usable as caller ids of SIP lines.
    ///
    /// The result is returned unmapped; `fields` is only sent when chosen.
    pub async fn get_sip_line_virtual_numbers(
        &mut self,
        options: ListOptions<VirtualNumber>,
    ) -> Result<Value, ComagicError> {
        let builder = options.apply_without_fields(RequestBuilder::new("get", "sip_line_virtual_numbers"));
        self.execute(builder).await
    }

    async fn toggle_virtual_number(
        &mut self,
        verb: &str,
        virtual_phone_number: &str,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new(verb, "virtual_numbers")
            .user_id(user_id)
            .require("virtual_phone_number", virtual_phone_number);
        self.execute(builder).await
    }
}

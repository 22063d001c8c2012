use crate::api::models::{
    Campaign, CampaignAvailablePhoneNumber, CampaignAvailableRedirectPhoneNumber, CampaignWeight,
};
use crate::api::payloads::{CampaignPayload, CampaignWeightsPayload};
use crate::api::{single, Comagic};
use crate::core::errors::ComagicError;
use crate::core::kernel::{RequestBuilder, RpcTransport};
use crate::core::record::Records;
use crate::core::types::ListOptions;
use serde_json::Value;

impl<T: RpcTransport> Comagic<T> {
    pub async fn get_campaigns(
        &mut self,
        options: ListOptions<Campaign>,
    ) -> Result<Records<Campaign>, ComagicError> {
        self.list("campaigns", options).await
    }

    pub async fn create_campaign(
        &mut self,
        campaign: &CampaignPayload,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("create", "campaigns")
            .user_id(user_id)
            .payload(campaign);
        self.execute(builder).await
    }

    pub async fn update_campaign(
        &mut self,
        id: i64,
        campaign: &CampaignPayload,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("update", "campaigns")
            .user_id(user_id)
            .require("id", id)
            .payload(campaign);
        self.execute(builder).await
    }

    pub async fn delete_campaign(&mut self, id: i64, user_id: Option<i64>) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("delete", "campaigns")
            .user_id(user_id)
            .require("id", id);
        self.execute(builder).await
    }

    /// Virtual numbers that can still be attached to a campaign
    pub async fn get_campaign_available_phone_numbers(
        &mut self,
        options: ListOptions<CampaignAvailablePhoneNumber>,
    ) -> Result<Records<CampaignAvailablePhoneNumber>, ComagicError> {
        self.list("campaign_available_phone_numbers", options).await
    }

    pub async fn get_campaign_available_redirection_phone_numbers(
        &mut self,
        options: ListOptions<CampaignAvailableRedirectPhoneNumber>,
    ) -> Result<Records<CampaignAvailableRedirectPhoneNumber>, ComagicError> {
        self.list("campaign_available_redirection_phone_numbers", options)
            .await
    }

    /// Parameter weights; the server describes them as a single object
    pub async fn get_campaign_parameter_weights(
        &mut self,
        options: ListOptions<CampaignWeight>,
    ) -> Result<CampaignWeight, ComagicError> {
        let builder = options.apply(RequestBuilder::new("get", "campaign_parameter_weights"));
        let result = self.execute(builder).await?;
        single(&result, "get.campaign_parameter_weights")
    }

    pub async fn update_campaign_parameter_weights(
        &mut self,
        weights: &CampaignWeightsPayload,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("update", "campaign_parameter_weights")
            .user_id(user_id)
            .payload(weights);
        self.execute(builder).await
    }
}

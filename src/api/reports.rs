//! Report reads: a date range plus the usual list options.

use crate::api::models::{
    Call, CallLeg, CampaignDailyStat, Chat, ChatMessage, Communication, FinancialCallLeg, Goal,
    OfflineMessage, VisitorSession,
};
use crate::api::Comagic;
use crate::core::errors::ComagicError;
use crate::core::kernel::{RequestBuilder, RpcTransport};
use crate::core::record::Records;
use crate::core::types::{ListOptions, ReportOptions};
use tracing::instrument;

impl<T: RpcTransport> Comagic<T> {
    /// Every communication (call, chat, goal, offline message) in the range
    pub async fn get_communications_report(
        &mut self,
        options: ReportOptions<Communication>,
    ) -> Result<Records<Communication>, ComagicError> {
        self.report("communications_report", options).await
    }

    pub async fn get_calls_report(
        &mut self,
        options: ReportOptions<Call>,
    ) -> Result<Records<Call>, ComagicError> {
        self.report("calls_report", options).await
    }

    pub async fn get_call_legs_report(
        &mut self,
        options: ReportOptions<CallLeg>,
    ) -> Result<Records<CallLeg>, ComagicError> {
        self.report("call_legs_report", options).await
    }

    pub async fn get_goals_report(
        &mut self,
        options: ReportOptions<Goal>,
    ) -> Result<Records<Goal>, ComagicError> {
        self.report("goals_report", options).await
    }

    pub async fn get_chats_report(
        &mut self,
        options: ReportOptions<Chat>,
    ) -> Result<Records<Chat>, ComagicError> {
        self.report("chats_report", options).await
    }

    /// Messages of one chat; the chat id replaces the date range
    #[instrument(skip(self, options))]
    pub async fn get_chat_messages_report(
        &mut self,
        chat_id: i64,
        options: ListOptions<ChatMessage>,
    ) -> Result<Records<ChatMessage>, ComagicError> {
        let builder = options
            .apply(RequestBuilder::new("get", "chat_messages_report"))
            .require("chat", chat_id);
        Records::from_result(self.execute(builder).await?)
    }

    pub async fn get_offline_messages_report(
        &mut self,
        options: ReportOptions<OfflineMessage>,
    ) -> Result<Records<OfflineMessage>, ComagicError> {
        self.report("offline_messages_report", options).await
    }

    pub async fn get_visitor_sessions_report(
        &mut self,
        options: ReportOptions<VisitorSession>,
    ) -> Result<Records<VisitorSession>, ComagicError> {
        self.report("visitor_sessions_report", options).await
    }

    pub async fn get_financial_call_legs_report(
        &mut self,
        options: ReportOptions<FinancialCallLeg>,
    ) -> Result<Records<FinancialCallLeg>, ComagicError> {
        self.report("financial_call_legs_report", options).await
    }

    pub async fn get_campaign_daily_stat(
        &mut self,
        options: ReportOptions<CampaignDailyStat>,
    ) -> Result<Records<CampaignDailyStat>, ComagicError> {
        self.report("campaign_daily_stat", options).await
    }
}

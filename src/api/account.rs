use crate::api::models::Account;
use crate::api::{single, Comagic};
use crate::core::errors::ComagicError;
use crate::core::kernel::{RequestBuilder, RpcTransport};
use tracing::instrument;

impl<T: RpcTransport> Comagic<T> {
    /// Account the session is logged into, or the impersonated user's one
    #[instrument(skip(self))]
    pub async fn get_account(&mut self, user_id: Option<i64>) -> Result<Account, ComagicError> {
        let builder = RequestBuilder::new("get", "account").user_id(user_id);
        let result = self.session.call(builder).await?;
        single(&result, "get.account")
    }
}

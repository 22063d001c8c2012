use crate::api::models::{Customer, CustomerUser};
use crate::api::Comagic;
use crate::core::errors::ComagicError;
use crate::core::kernel::RpcTransport;
use crate::core::record::Records;
use crate::core::types::ListOptions;

impl<T: RpcTransport> Comagic<T> {
    /// Client accounts of an agency
    pub async fn get_customers(
        &mut self,
        options: ListOptions<Customer>,
    ) -> Result<Records<Customer>, ComagicError> {
        self.list("customers", options).await
    }

    pub async fn get_customer_users(
        &mut self,
        options: ListOptions<CustomerUser>,
    ) -> Result<Records<CustomerUser>, ComagicError> {
        self.list("customer_users", options).await
    }
}

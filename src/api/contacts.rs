use crate::api::models::{Contact, ContactGroup, ContactOrganization};
use crate::api::payloads::ContactPayload;
use crate::api::Comagic;
use crate::core::errors::ComagicError;
use crate::core::kernel::{RequestBuilder, RpcTransport};
use crate::core::record::Records;
use crate::core::types::ListOptions;
use serde_json::Value;

impl<T: RpcTransport> Comagic<T> {
    pub async fn get_contacts(
        &mut self,
        options: ListOptions<Contact>,
    ) -> Result<Records<Contact>, ComagicError> {
        self.list("contacts", options).await
    }

    pub async fn create_contact(
        &mut self,
        contact: &ContactPayload,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("create", "contacts")
            .user_id(user_id)
            .payload(contact);
        self.execute(builder).await
    }

    pub async fn update_contact(
        &mut self,
        id: i64,
        contact: &ContactPayload,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("update", "contacts")
            .user_id(user_id)
            .require("id", id)
            .payload(contact);
        self.execute(builder).await
    }

    pub async fn delete_contact(&mut self, id: i64, user_id: Option<i64>) -> Result<Value, ComagicError> {
        self.delete("contacts", id, user_id).await
    }

    pub async fn get_contact_groups(
        &mut self,
        options: ListOptions<ContactGroup>,
    ) -> Result<Records<ContactGroup>, ComagicError> {
        self.list("group_contacts", options).await
    }

    pub async fn create_contact_group(
        &mut self,
        name: &str,
        members: Option<Vec<i64>>,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("create", "group_contacts")
            .user_id(user_id)
            .require("name", name)
            .param("members", members);
        self.execute(builder).await
    }

    pub async fn update_contact_group(
        &mut self,
        id: i64,
        name: &str,
        members: Option<Vec<i64>>,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("update", "group_contacts")
            .user_id(user_id)
            .require("id", id)
            .require("name", name)
            .param("members", members);
        self.execute(builder).await
    }

    pub async fn delete_contact_group(
        &mut self,
        id: i64,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        self.delete("group_contacts", id, user_id).await
    }

    pub async fn get_contact_organizations(
        &mut self,
        options: ListOptions<ContactOrganization>,
    ) -> Result<Records<ContactOrganization>, ComagicError> {
        self.list("contact_organizations", options).await
    }

    pub async fn create_contact_organization(
        &mut self,
        name: &str,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("create", "contact_organizations")
            .user_id(user_id)
            .require("name", name);
        self.execute(builder).await
    }

    pub async fn update_contact_organization(
        &mut self,
        id: i64,
        name: &str,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("update", "contact_organizations")
            .user_id(user_id)
            .require("id", id)
            .require("name", name);
        self.execute(builder).await
    }

    pub async fn delete_contact_organization(
        &mut self,
        id: i64,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        self.delete("contact_organizations", id, user_id).await
    }

    async fn delete(&mut self, resource: &str, id: i64, user_id: Option<i64>) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("delete", resource)
            .user_id(user_id)
            .require("id", id);
        self.execute(builder).await
    }
}

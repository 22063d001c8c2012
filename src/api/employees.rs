use crate::api::models::{Employee, EmployeeGroup};
use crate::api::payloads::{EmployeeGroupPayload, EmployeeUpdate, NewEmployee};
use crate::api::Comagic;
use crate::core::errors::ComagicError;
use crate::core::kernel::{RequestBuilder, RpcTransport};
use crate::core::record::Records;
use crate::core::types::ListOptions;
use serde_json::Value;

impl<T: RpcTransport> Comagic<T> {
    pub async fn get_employees(
        &mut self,
        options: ListOptions<Employee>,
    ) -> Result<Records<Employee>, ComagicError> {
        self.list("employees", options).await
    }

    pub async fn create_employee(
        &mut self,
        employee: &NewEmployee,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("create", "employees")
            .user_id(user_id)
            .payload(employee);
        self.execute(builder).await
    }

    pub async fn update_employee(
        &mut self,
        id: i64,
        changes: &EmployeeUpdate,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("update", "employees")
            .user_id(user_id)
            .require("id", id)
            .payload(changes);
        self.execute(builder).await
    }

    pub async fn delete_employee(&mut self, id: i64, user_id: Option<i64>) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("delete", "employees")
            .user_id(user_id)
            .require("id", id);
        self.execute(builder).await
    }

    pub async fn get_employee_groups(
        &mut self,
        options: ListOptions<EmployeeGroup>,
    ) -> Result<Records<EmployeeGroup>, ComagicError> {
        self.list("group_employees", options).await
    }

    /// Create a group; `group.name` is mandatory here
    pub async fn create_employee_group(
        &mut self,
        group: &EmployeeGroupPayload,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        if group.name.as_deref().map_or(true, str::is_empty) {
            return Err(ComagicError::params("employee group name is required"));
        }
        let builder = RequestBuilder::new("create", "group_employees")
            .user_id(user_id)
            .payload(group);
        self.execute(builder).await
    }

    pub async fn update_employee_group(
        &mut self,
        id: i64,
        group: &EmployeeGroupPayload,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("update", "group_employees")
            .user_id(user_id)
            .require("id", id)
            .payload(group);
        self.execute(builder).await
    }

    pub async fn delete_employee_group(
        &mut self,
        id: i64,
        user_id: Option<i64>,
    ) -> Result<Value, ComagicError> {
        let builder = RequestBuilder::new("delete", "group_employees")
            .user_id(user_id)
            .require("id", id);
        self.execute(builder).await
    }
}

//! Contact points of a user, under `/users/{user-id}/contacts/{kind}`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};

api_enum! {
    /// Delivery state of a contact
    pub enum ContactStatus {
        Ok => "OK",
        Locked => "LOCKED",
        Blacklisted => "BLACKLISTED",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserEmailContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub target: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPhoneNumberContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// ISO 3166 region, e.g. `DE`
    pub region_code: String,

    pub target: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,
}

/// A contact kind and its route segment
pub trait UserContact: Serialize + DeserializeOwned {
    const KIND: &'static str;
}

impl UserContact for UserEmailContact {
    const KIND: &'static str = "emails";
}

impl UserContact for UserPhoneNumberContact {
    const KIND: &'static str = "phone-numbers";
}

#[derive(Debug, Clone)]
pub struct CreateUserContactInput<C> {
    pub user_id: Option<i64>,
    pub contact: Option<C>,
}

impl<C> Default for CreateUserContactInput<C> {
    fn default() -> Self {
        Self {
            user_id: None,
            contact: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetUserContactsInput {
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct UserContactInput {
    pub user_id: Option<i64>,
    pub contact_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct UpdateUserContactInput<C> {
    pub user_id: Option<i64>,
    pub contact_id: Option<i64>,
    pub contact: Option<C>,
}

impl<C> Default for UpdateUserContactInput<C> {
    fn default() -> Self {
        Self {
            user_id: None,
            contact_id: None,
            contact: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserContactOutput<C> {
    pub contact: C,
}

#[derive(Debug, Clone)]
pub struct UserContactsOutput<C> {
    pub contacts: Vec<C>,
}

const CONTACTS: &str = "contacts";

impl IlertClient {
    async fn create_contact<C: UserContact>(
        &self,
        input: &CreateUserContactInput<C>,
    ) -> Result<UserContactOutput<C>> {
        let user_id = required(input.user_id, "user id")?;
        let contact = required(input.contact.as_ref(), "contact")?;
        let url = self.url(&[&routes::USERS, &user_id, &CONTACTS, &C::KIND])?;
        let contact = self.post_json(url, contact).await?;
        Ok(UserContactOutput { contact })
    }

    async fn list_contacts<C: UserContact>(
        &self,
        input: &GetUserContactsInput,
    ) -> Result<UserContactsOutput<C>> {
        let user_id = required(input.user_id, "user id")?;
        let url = self.url(&[&routes::USERS, &user_id, &CONTACTS, &C::KIND])?;
        let contacts = self.get_json(url, &Query::new()).await?;
        Ok(UserContactsOutput { contacts })
    }

    async fn get_contact<C: UserContact>(
        &self,
        input: &UserContactInput,
    ) -> Result<UserContactOutput<C>> {
        let user_id = required(input.user_id, "user id")?;
        let contact_id = required(input.contact_id, "contact id")?;
        let url = self.url(&[&routes::USERS, &user_id, &CONTACTS, &C::KIND, &contact_id])?;
        let contact = self.get_json(url, &Query::new()).await?;
        Ok(UserContactOutput { contact })
    }

    async fn update_contact<C: UserContact>(
        &self,
        input: &UpdateUserContactInput<C>,
    ) -> Result<UserContactOutput<C>> {
        let user_id = required(input.user_id, "user id")?;
        let contact_id = required(input.contact_id, "contact id")?;
        let contact = required(input.contact.as_ref(), "contact")?;
        let url = self.url(&[&routes::USERS, &user_id, &CONTACTS, &C::KIND, &contact_id])?;
        let contact = self.put_json(url, contact).await?;
        Ok(UserContactOutput { contact })
    }

    async fn delete_contact<C: UserContact>(&self, input: &UserContactInput) -> Result<()> {
        let user_id = required(input.user_id, "user id")?;
        let contact_id = required(input.contact_id, "contact id")?;
        let url = self.url(&[&routes::USERS, &user_id, &CONTACTS, &C::KIND, &contact_id])?;
        self.delete_resource(url).await
    }

    /// Add an email address to a user
    pub async fn create_user_email_contact(
        &self,
        input: &CreateUserContactInput<UserEmailContact>,
    ) -> Result<UserContactOutput<UserEmailContact>> {
        self.create_contact(input).await
    }

    /// List a user's email addresses
    pub async fn get_user_email_contacts(
        &self,
        input: &GetUserContactsInput,
    ) -> Result<UserContactsOutput<UserEmailContact>> {
        self.list_contacts(input).await
    }

    /// Get an email contact of a user by id
    pub async fn get_user_email_contact(
        &self,
        input: &UserContactInput,
    ) -> Result<UserContactOutput<UserEmailContact>> {
        self.get_contact(input).await
    }

    /// Update an email contact of a user
    pub async fn update_user_email_contact(
        &self,
        input: &UpdateUserContactInput<UserEmailContact>,
    ) -> Result<UserContactOutput<UserEmailContact>> {
        self.update_contact(input).await
    }

    /// Delete an email contact of a user
    pub async fn delete_user_email_contact(&self, input: &UserContactInput) -> Result<()> {
        self.delete_contact::<UserEmailContact>(input).await
    }

    /// Add a phone number to a user
    pub async fn create_user_phone_number_contact(
        &self,
        input: &CreateUserContactInput<UserPhoneNumberContact>,
    ) -> Result<UserContactOutput<UserPhoneNumberContact>> {
        self.create_contact(input).await
    }

    /// List a user's phone numbers
    pub async fn get_user_phone_number_contacts(
        &self,
        input: &GetUserContactsInput,
    ) -> Result<UserContactsOutput<UserPhoneNumberContact>> {
        self.list_contacts(input).await
    }

    /// Get a phone number contact of a user by id
    pub async fn get_user_phone_number_contact(
        &self,
        input: &UserContactInput,
    ) -> Result<UserContactOutput<UserPhoneNumberContact>> {
        self.get_contact(input).await
    }

    /// Update a phone number contact of a user
    pub async fn update_user_phone_number_contact(
        &self,
        input: &UpdateUserContactInput<UserPhoneNumberContact>,
    ) -> Result<UserContactOutput<UserPhoneNumberContact>> {
        self.update_contact(input).await
    }

    /// Delete a phone number contact of a user
    pub async fn delete_user_phone_number_contact(&self, input: &UserContactInput) -> Result<()> {
        self.delete_contact::<UserPhoneNumberContact>(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_user_email_contact() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users/3/contacts/emails"))
            .and(body_json(json!({"target": "ops@example.com"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 21,
                "target": "ops@example.com",
                "status": "OK"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .create_user_email_contact(&CreateUserContactInput {
                user_id: Some(3),
                contact: Some(UserEmailContact {
                    target: "ops@example.com".to_string(),
                    ..Default::default()
                }),
            })
            .await
            .unwrap();

        assert_eq!(output.contact.id, Some(21));
        assert_eq!(output.contact.status, Some(ContactStatus::Ok));
    }

    #[tokio::test]
    async fn test_get_user_phone_number_contact() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/3/contacts/phone-numbers/22"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 22,
                "regionCode": "DE",
                "target": "+4915100000000",
                "status": "LOCKED"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .get_user_phone_number_contact(&UserContactInput {
                user_id: Some(3),
                contact_id: Some(22),
            })
            .await
            .unwrap();

        assert_eq!(output.contact.region_code, "DE");
        assert_eq!(output.contact.status, Some(ContactStatus::Locked));
    }

    #[tokio::test]
    async fn test_get_user_email_contacts_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/3/contacts/emails"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .get_user_email_contacts(&GetUserContactsInput { user_id: Some(3) })
            .await
            .unwrap();
        assert!(output.contacts.is_empty());
    }

    #[tokio::test]
    async fn test_delete_user_phone_number_contact() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/users/3/contacts/phone-numbers/22"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let result = client
            .delete_user_phone_number_contact(&UserContactInput {
                user_id: Some(3),
                contact_id: Some(22),
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_user_email_contact_requires_contact_id() {
        let mock_server = MockServer::start().await;
        testing::expect_no_requests(&mock_server).await;

        let client = testing::client(&mock_server);
        let err = client
            .update_user_email_contact(&UpdateUserContactInput {
                user_id: Some(3),
                contact_id: None,
                contact: Some(UserEmailContact::default()),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "contact id is required");
    }
}

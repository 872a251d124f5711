use models::{enums::JobType, user};
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub job_type: JobType,
}

pub type UpdateUser = CreateUser;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub job_type: JobType,
}

impl CreateUser {
    pub fn validate(&self) -> Result<(), ServiceError> {
        user::validate(&self.name, &self.surname, &self.phone_number, &self.email)?;
        Ok(())
    }

    pub fn into_active_model(self) -> user::ActiveModel {
        user::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            surname: Set(self.surname),
            phone_number: Set(self.phone_number),
            email: Set(self.email),
            job_type: Set(self.job_type),
        }
    }

    pub fn apply(self, am: &mut user::ActiveModel) {
        am.name = Set(self.name);
        am.surname = Set(self.surname);
        am.phone_number = Set(self.phone_number);
        am.email = Set(self.email);
        am.job_type = Set(self.job_type);
    }
}

pub fn user_response(model: user::Model) -> UserResponse {
    UserResponse {
        full_name: model.full_name(),
        id: model.id,
        name: model.name,
        surname: model.surname,
        phone_number: model.phone_number,
        email: model.email,
        job_type: model.job_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_full_name_and_job_type() {
        let r = user_response(user::Model {
            id: 3,
            name: "Eva".into(),
            surname: "Dvorak".into(),
            phone_number: String::new(),
            email: String::new(),
            job_type: JobType::Manager,
        });
        assert_eq!(r.full_name, "Eva Dvorak");
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["jobType"], "Manager");
    }

    #[test]
    fn surname_is_required() {
        let u = CreateUser {
            name: "Eva".into(),
            surname: " ".into(),
            phone_number: String::new(),
            email: String::new(),
            job_type: JobType::Worker,
        };
        assert!(matches!(u.validate(), Err(ServiceError::Model(_))));
    }
}

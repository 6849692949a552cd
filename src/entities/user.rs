use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use argon2::{
    password_hash::PasswordVerifier,
    Argon2,
    PasswordHash,
};

//Only admins live in this table. Shoppers are anonymous JWT sessions and
//never get a users row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl Model {
    pub fn check_hash(&self, password: &str) -> Result<(), String> {
        let parsed_hash =
            PasswordHash::new(&self.password).map_err(|_| "Stored hash is malformed")?;

        let argon2 = Argon2::default();
        argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| "Password verification failed")?;

        Ok(())
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(
    enum_name = "role_enum",
    db_type = "String(StringLen::N(255))",
    rs_type = "String"
)]
pub enum Role {
    #[sea_orm(string_value = "shopper")]
    Shopper,
    #[sea_orm(string_value = "admin")]
    Admin,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shopper" => Ok(Self::Shopper),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

impl ToString for Role {
    fn to_string(&self) -> String {
        match self {
            Self::Shopper => "shopper".to_string(),
            Self::Admin => "admin".to_string(),
        }
    }
}

//! Member factory for creating gym members.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let member = MemberFactory::new(&db)
///     .first_name("Ada")
///     .status("continue")
///     .validity(Some(from), Some(to))
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: Option<String>,
    mobile: String,
    dob: NaiveDate,
    address: Option<String>,
    role_name: String,
    membership_id: Option<i32>,
    valid_from: Option<NaiveDate>,
    valid_to: Option<NaiveDate>,
    status: String,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - first_name / last_name: `"Member"` / `"{id}"`
    /// - mobile: `"98{id:08}"` (unique per call)
    /// - dob: 1990-01-01
    /// - role_name: `"member"`
    /// - status: `"expired"` with no plan or validity window
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Member".to_string(),
            last_name: id.to_string(),
            email: Some(format!("member{}@example.com", id)),
            mobile: format!("98{:08}", id),
            dob: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default(),
            address: None,
            role_name: "member".to_string(),
            membership_id: None,
            valid_from: None,
            valid_to: None,
            status: "expired".to_string(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = mobile.into();
        self
    }

    pub fn address(mut self, address: Option<String>) -> Self {
        self.address = address;
        self
    }

    pub fn role_name(mut self, role_name: impl Into<String>) -> Self {
        self.role_name = role_name.into();
        self
    }

    pub fn membership_id(mut self, membership_id: Option<i32>) -> Self {
        self.membership_id = membership_id;
        self
    }

    /// Sets the membership validity window.
    pub fn validity(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.valid_from = from;
        self.valid_to = to;
        self
    }

    /// Sets the stored membership status (`continue`, `expired` or `left`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the member.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            mobile: ActiveValue::Set(self.mobile),
            dob: ActiveValue::Set(self.dob),
            address: ActiveValue::Set(self.address),
            role_name: ActiveValue::Set(self.role_name),
            reg_code: ActiveValue::Set(None),
            membership_id: ActiveValue::Set(self.membership_id),
            membership_valid_from: ActiveValue::Set(self.valid_from),
            membership_valid_to: ActiveValue::Set(self.valid_to),
            membership_status: ActiveValue::Set(self.status),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}

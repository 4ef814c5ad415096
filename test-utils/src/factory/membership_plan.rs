//! Membership plan factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating membership plans.
///
/// # Example
///
/// ```rust,ignore
/// let plan = MembershipPlanFactory::new(&db)
///     .label("3 month Cardio")
///     .price(5500.0)
///     .duration_days(90)
///     .build()
///     .await?;
/// ```
pub struct MembershipPlanFactory<'a> {
    db: &'a DatabaseConnection,
    label: String,
    class: String,
    description: Option<String>,
    price: f64,
    signup_fee: Option<f64>,
    duration_days: i32,
}

impl<'a> MembershipPlanFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - label: `"Plan {id}"`
    /// - class: `"regular"`
    /// - price: `1500.0`
    /// - duration_days: `30`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            label: format!("Plan {}", id),
            class: "regular".to_string(),
            description: None,
            price: 1500.0,
            signup_fee: None,
            duration_days: 30,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn signup_fee(mut self, signup_fee: Option<f64>) -> Self {
        self.signup_fee = signup_fee;
        self
    }

    pub fn duration_days(mut self, duration_days: i32) -> Self {
        self.duration_days = duration_days;
        self
    }

    /// Builds and inserts the plan.
    ///
    /// # Returns
    /// - `Ok(entity::membership_plan::Model)` - Created plan
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::membership_plan::Model, DbErr> {
        entity::membership_plan::ActiveModel {
            label: ActiveValue::Set(self.label),
            class: ActiveValue::Set(self.class),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            signup_fee: ActiveValue::Set(self.signup_fee),
            duration_days: ActiveValue::Set(self.duration_days),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a 30-day plan with default values.
pub async fn create_plan(
    db: &DatabaseConnection,
) -> Result<entity::membership_plan::Model, DbErr> {
    MembershipPlanFactory::new(db).build().await
}

/// Creates a plan with the given label, price and duration.
pub async fn create_named_plan(
    db: &DatabaseConnection,
    label: &str,
    price: f64,
    duration_days: i32,
) -> Result<entity::membership_plan::Model, DbErr> {
    MembershipPlanFactory::new(db)
        .label(label)
        .price(price)
        .duration_days(duration_days)
        .build()
        .await
}

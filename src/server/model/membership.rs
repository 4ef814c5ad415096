//! Membership plan domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::membership::{MembershipPlanDto, MembershipPlanInputDto};

/// Purchasable membership plan.
///
/// `duration_days` drives the validity window granted on renewal; the payment amount
/// is `price` at the time of renewal.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipPlan {
    pub id: i32,
    /// Unique name used to select the plan on renewal, e.g. `Regular Monthly`.
    pub label: String,
    pub class: String,
    pub description: Option<String>,
    pub price: f64,
    pub signup_fee: Option<f64>,
    pub duration_days: i32,
    pub created_at: DateTime<Utc>,
}

impl MembershipPlan {
    pub fn from_entity(entity: entity::membership_plan::Model) -> Self {
        Self {
            id: entity.id,
            label: entity.label,
            class: entity.class,
            description: entity.description,
            price: entity.price,
            signup_fee: entity.signup_fee,
            duration_days: entity.duration_days,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MembershipPlanDto {
        MembershipPlanDto {
            id: self.id,
            label: self.label,
            class: self.class,
            description: self.description,
            price: self.price,
            signup_fee: self.signup_fee,
            duration_days: self.duration_days,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating or fully updating a plan.
#[derive(Debug, Clone)]
pub struct MembershipPlanParams {
    pub label: String,
    pub class: String,
    pub description: Option<String>,
    pub price: f64,
    pub signup_fee: Option<f64>,
    pub duration_days: i32,
}

impl MembershipPlanParams {
    pub fn from_dto(dto: MembershipPlanInputDto) -> Self {
        Self {
            label: dto.label,
            class: dto.class,
            description: dto.description,
            price: dto.price,
            signup_fee: dto.signup_fee,
            duration_days: dto.duration_days,
        }
    }
}

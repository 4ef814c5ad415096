//! Payment and renewal domain models.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::payment::{PaymentDto, RenewalDto},
    server::model::member::Member,
};

/// Status stored on payments created by the renewal workflow.
pub const PAYMENT_STATUS_PAID: &str = "paid";

/// Payment recorded by one renewal.
///
/// Only the `active` flag changes after creation, when a later renewal supersedes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub member_id: i32,
    pub membership_id: i32,
    pub amount: f64,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub status: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            member_id: entity.member_id,
            membership_id: entity.membership_id,
            amount: entity.amount,
            valid_from: entity.valid_from,
            valid_to: entity.valid_to,
            status: entity.status,
            active: entity.active,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            member_id: self.member_id,
            membership_id: self.membership_id,
            amount: self.amount,
            valid_from: self.valid_from,
            valid_to: self.valid_to,
            status: self.status,
            active: self.active,
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting a renewal payment.
#[derive(Debug, Clone)]
pub struct CreatePaymentParams {
    pub member_id: i32,
    pub membership_id: i32,
    pub amount: f64,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
}

/// Parameters for renewing a member onto a plan.
#[derive(Debug, Clone)]
pub struct RenewMembershipParams {
    pub member_id: i32,
    /// Plan label as sent by the client.
    pub plan: String,
    /// First day of the new validity window.
    pub renewed_on: NaiveDate,
}

/// Outcome of a renewal: the updated member and the payment that was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Renewal {
    pub member: Member,
    pub payment: Payment,
}

impl Renewal {
    pub fn into_dto(self) -> RenewalDto {
        RenewalDto {
            member: self.member.into_dto(),
            payment: self.payment.into_dto(),
        }
    }
}

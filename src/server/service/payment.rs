//! Membership renewal and payment history.

use chrono::Days;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        member::MemberRepository, membership::MembershipPlanRepository,
        payment::PaymentRepository,
    },
    error::AppError,
    model::{
        page::{Page, PageRequest},
        payment::{CreatePaymentParams, Payment, RenewMembershipParams, Renewal},
    },
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Renews a member onto a plan.
    ///
    /// Runs in one transaction: the member gets the plan and a window of
    /// `plan.duration_days` starting on `renewed_on` with status `continue`, every
    /// previously active payment of the member is deactivated, and a new active payment
    /// of `plan.price` covering the same window is recorded. Any failure rolls back all
    /// of it.
    ///
    /// # Returns
    /// - `Ok(Renewal)` - Updated member and the new payment
    /// - `Err(AppError::Validation)` - No plan with that label (field `plan`), nothing written
    /// - `Err(AppError::NotFound)` - No member with that ID, nothing written
    pub async fn renew(&self, params: RenewMembershipParams) -> Result<Renewal, AppError> {
        let txn = self.db.begin().await?;

        let Some(plan) = MembershipPlanRepository::new(&txn)
            .find_by_label(&params.plan)
            .await?
        else {
            return Err(AppError::field(
                "plan",
                format!("Unknown membership plan '{}'.", params.plan),
            ));
        };

        let valid_from = params.renewed_on;
        let valid_to = u64::try_from(plan.duration_days)
            .ok()
            .and_then(|days| valid_from.checked_add_days(Days::new(days)))
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Plan {} has an unusable duration of {} days",
                    plan.id, plan.duration_days
                ))
            })?;

        let Some(member) = MemberRepository::new(&txn)
            .start_membership(params.member_id, plan.id, valid_from, valid_to)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Member {} not found",
                params.member_id
            )));
        };

        let payment_repo = PaymentRepository::new(&txn);
        let superseded = payment_repo.deactivate_for_member(member.id).await?;
        let payment = payment_repo
            .create(CreatePaymentParams {
                member_id: member.id,
                membership_id: plan.id,
                amount: plan.price,
                valid_from,
                valid_to,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Renewed member {} on '{}' until {} ({} previous payments deactivated)",
            member.id,
            plan.label,
            valid_to,
            superseded
        );

        Ok(Renewal { member, payment })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Payment, AppError> {
        PaymentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Payment {} not found", id)))
    }

    /// Payments newest first, optionally for one member
    pub async fn get_paginated(
        &self,
        member_id: Option<i32>,
        page: PageRequest,
    ) -> Result<Page<Payment>, AppError> {
        let (payments, total) = PaymentRepository::new(self.db)
            .get_paginated(member_id, page)
            .await?;

        Page::new(payments, total, page)
    }
}

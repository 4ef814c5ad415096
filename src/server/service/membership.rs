use sea_orm::DatabaseConnection;

use crate::server::{
    data::{membership::MembershipPlanRepository, payment::PaymentRepository},
    error::AppError,
    model::{
        membership::{MembershipPlan, MembershipPlanParams},
        page::{Page, PageRequest},
    },
};

pub struct MembershipPlanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipPlanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: MembershipPlanParams) -> Result<MembershipPlan, AppError> {
        let repo = MembershipPlanRepository::new(self.db);
        self.ensure_label_free(&params.label, None).await?;

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<MembershipPlan, AppError> {
        MembershipPlanRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| plan_not_found(id))
    }

    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<MembershipPlan>, AppError> {
        let (plans, total) = MembershipPlanRepository::new(self.db)
            .get_paginated(search, page)
            .await?;

        Page::new(plans, total, page)
    }

    pub async fn update(
        &self,
        id: i32,
        params: MembershipPlanParams,
    ) -> Result<MembershipPlan, AppError> {
        self.ensure_label_free(&params.label, Some(id)).await?;

        MembershipPlanRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| plan_not_found(id))
    }

    /// Deletes a plan that no payment refers to
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let payments = PaymentRepository::new(self.db).count_for_plan(id).await?;
        if payments > 0 {
            return Err(AppError::BadRequest(format!(
                "Membership plan {} has {} payments and cannot be deleted.",
                id, payments
            )));
        }

        if !MembershipPlanRepository::new(self.db).delete(id).await? {
            return Err(plan_not_found(id));
        }

        Ok(())
    }

    /// Rejects a label already used by another plan.
    async fn ensure_label_free(&self, label: &str, own_id: Option<i32>) -> Result<(), AppError> {
        let existing = MembershipPlanRepository::new(self.db)
            .find_by_label(label)
            .await?;

        match existing {
            Some(plan) if Some(plan.id) != own_id => Err(AppError::field(
                "label",
                "A membership plan with this label already exists.",
            )),
            _ => Ok(()),
        }
    }
}

fn plan_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Membership plan {} not found", id))
}

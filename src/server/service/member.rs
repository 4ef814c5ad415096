use sea_orm::DatabaseConnection;

use crate::server::{
    data::{member::MemberRepository, membership::MembershipPlanRepository},
    error::AppError,
    model::{
        member::{Member, MemberParams, MembershipCount, MembershipStatus},
        page::{Page, PageRequest},
    },
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a member after checking the referenced plan exists
    pub async fn create(&self, params: MemberParams) -> Result<Member, AppError> {
        self.ensure_plan_exists(params.membership_id).await?;
        self.ensure_mobile_free(&params.mobile, None).await?;

        let member = MemberRepository::new(self.db).create(params).await?;
        tracing::info!("Registered member {}", member.id);

        Ok(member)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Member, AppError> {
        MemberRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| member_not_found(id))
    }

    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<Member>, AppError> {
        let (members, total) = MemberRepository::new(self.db)
            .get_paginated(search, page)
            .await?;

        Page::new(members, total, page)
    }

    pub async fn update(&self, id: i32, params: MemberParams) -> Result<Member, AppError> {
        self.ensure_plan_exists(params.membership_id).await?;
        self.ensure_mobile_free(&params.mobile, Some(id)).await?;

        MemberRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| member_not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MemberRepository::new(self.db).delete(id).await? {
            return Err(member_not_found(id));
        }

        Ok(())
    }

    /// Members with role `member`, whatever their status
    pub async fn total_members(&self) -> Result<u64, AppError> {
        Ok(MemberRepository::new(self.db).count_members(None).await?)
    }

    /// Members with role `member` on a running membership
    pub async fn active_members(&self) -> Result<u64, AppError> {
        Ok(MemberRepository::new(self.db)
            .count_members(Some(MembershipStatus::Continue))
            .await?)
    }

    pub async fn left_members(&self) -> Result<u64, AppError> {
        Ok(MemberRepository::new(self.db)
            .count_members(Some(MembershipStatus::Left))
            .await?)
    }

    /// Number of members enrolled on each plan, in plan order
    pub async fn membership_counts(&self) -> Result<Vec<MembershipCount>, AppError> {
        let plans = MembershipPlanRepository::new(self.db).get_all().await?;
        let member_repo = MemberRepository::new(self.db);

        let mut counts = Vec::with_capacity(plans.len());
        for plan in plans {
            counts.push(MembershipCount {
                membership_id: plan.id,
                members: member_repo.count_on_plan(plan.id).await?,
                label: plan.label,
            });
        }

        Ok(counts)
    }

    async fn ensure_plan_exists(&self, membership_id: Option<i32>) -> Result<(), AppError> {
        let Some(membership_id) = membership_id else {
            return Ok(());
        };

        if MembershipPlanRepository::new(self.db)
            .get_by_id(membership_id)
            .await?
            .is_none()
        {
            return Err(AppError::field(
                "membership_id",
                format!("Membership plan {} does not exist.", membership_id),
            ));
        }

        Ok(())
    }

    async fn ensure_mobile_free(&self, mobile: &str, own_id: Option<i32>) -> Result<(), AppError> {
        if MemberRepository::new(self.db)
            .mobile_taken(mobile, own_id)
            .await?
        {
            return Err(AppError::field(
                "mobile",
                "A member with this mobile number already exists.",
            ));
        }

        Ok(())
    }
}

fn member_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Member {} not found", id))
}

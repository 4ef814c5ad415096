//! Membership plan repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    membership::{MembershipPlan, MembershipPlanParams},
    page::PageRequest,
};

pub struct MembershipPlanRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MembershipPlanRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: MembershipPlanParams) -> Result<MembershipPlan, DbErr> {
        let entity = entity::membership_plan::ActiveModel {
            label: ActiveValue::Set(params.label),
            class: ActiveValue::Set(params.class),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            signup_fee: ActiveValue::Set(params.signup_fee),
            duration_days: ActiveValue::Set(params.duration_days),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MembershipPlan::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MembershipPlan>, DbErr> {
        let entity = entity::prelude::MembershipPlan::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(MembershipPlan::from_entity))
    }

    /// Looks up a plan by its exact label.
    pub async fn find_by_label(&self, label: &str) -> Result<Option<MembershipPlan>, DbErr> {
        let entity = entity::prelude::MembershipPlan::find()
            .filter(entity::membership_plan::Column::Label.eq(label))
            .one(self.db)
            .await?;

        Ok(entity.map(MembershipPlan::from_entity))
    }

    /// Gets one page of plans ordered by ID, optionally filtered by a search term.
    ///
    /// The term is matched as a substring of label, class and description.
    ///
    /// # Returns
    /// - `Ok((plans, total))` - Plans on the page and the total matching count
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<(Vec<MembershipPlan>, u64), DbErr> {
        use entity::membership_plan::Column;

        let mut query = entity::prelude::MembershipPlan::find().order_by_asc(Column::Id);
        if let Some(term) = search {
            query = query.filter(
                Condition::any()
                    .add(Column::Label.contains(term))
                    .add(Column::Class.contains(term))
                    .add(Column::Description.contains(term)),
            );
        }

        let paginator = query.paginate(self.db, page.page_size);
        let total = paginator.num_items().await?;
        if !page.contains(total) {
            return Ok((Vec::new(), total));
        }
        let plans = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(MembershipPlan::from_entity)
            .collect();

        Ok((plans, total))
    }

    /// Gets every plan ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<MembershipPlan>, DbErr> {
        let plans = entity::prelude::MembershipPlan::find()
            .order_by_asc(entity::membership_plan::Column::Id)
            .all(self.db)
            .await?;

        Ok(plans.into_iter().map(MembershipPlan::from_entity).collect())
    }

    /// Replaces every editable field of a plan.
    ///
    /// # Returns
    /// - `Ok(Some(plan))` - Updated plan
    /// - `Ok(None)` - No plan with that ID
    pub async fn update(
        &self,
        id: i32,
        params: MembershipPlanParams,
    ) -> Result<Option<MembershipPlan>, DbErr> {
        let Some(existing) = entity::prelude::MembershipPlan::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::membership_plan::ActiveModel = existing.into();
        active.label = ActiveValue::Set(params.label);
        active.class = ActiveValue::Set(params.class);
        active.description = ActiveValue::Set(params.description);
        active.price = ActiveValue::Set(params.price);
        active.signup_fee = ActiveValue::Set(params.signup_fee);
        active.duration_days = ActiveValue::Set(params.duration_days);

        let entity = active.update(self.db).await?;

        Ok(Some(MembershipPlan::from_entity(entity)))
    }

    /// Deletes a plan, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MembershipPlan::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

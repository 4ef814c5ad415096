//! Payment repository.
//!
//! Payments are written only by the renewal workflow; afterwards the only change a
//! payment ever sees is losing its `active` flag when a newer renewal supersedes it.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    page::PageRequest,
    payment::{CreatePaymentParams, Payment, PAYMENT_STATUS_PAID},
};

pub struct PaymentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an active, paid payment.
    pub async fn create(&self, params: CreatePaymentParams) -> Result<Payment, DbErr> {
        let entity = entity::payment::ActiveModel {
            member_id: ActiveValue::Set(params.member_id),
            membership_id: ActiveValue::Set(params.membership_id),
            amount: ActiveValue::Set(params.amount),
            valid_from: ActiveValue::Set(params.valid_from),
            valid_to: ActiveValue::Set(params.valid_to),
            status: ActiveValue::Set(PAYMENT_STATUS_PAID.to_string()),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Payment>, DbErr> {
        let entity = entity::prelude::Payment::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Payment::from_entity))
    }

    /// Gets one page of payments, newest first, optionally for a single member.
    ///
    /// # Returns
    /// - `Ok((payments, total))` - Payments on the page and the total matching count
    pub async fn get_paginated(
        &self,
        member_id: Option<i32>,
        page: PageRequest,
    ) -> Result<(Vec<Payment>, u64), DbErr> {
        use entity::payment::Column;

        let mut query = entity::prelude::Payment::find().order_by_desc(Column::Id);
        if let Some(member_id) = member_id {
            query = query.filter(Column::MemberId.eq(member_id));
        }

        let paginator = query.paginate(self.db, page.page_size);
        let total = paginator.num_items().await?;
        if !page.contains(total) {
            return Ok((Vec::new(), total));
        }
        let payments = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(Payment::from_entity)
            .collect();

        Ok((payments, total))
    }

    /// Clears the `active` flag on every active payment of a member.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of payments deactivated
    pub async fn deactivate_for_member(&self, member_id: i32) -> Result<u64, DbErr> {
        use entity::payment::Column;

        let result = entity::prelude::Payment::update_many()
            .col_expr(Column::Active, Expr::value(false))
            .filter(Column::MemberId.eq(member_id))
            .filter(Column::Active.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts payments recorded against a plan.
    pub async fn count_for_plan(&self, membership_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::MembershipId.eq(membership_id))
            .count(self.db)
            .await
    }
}

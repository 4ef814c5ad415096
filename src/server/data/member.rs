//! Member data repository for database operations.
//!
//! Provides the `MemberRepository` for the member registry: CRUD, searching, the counts
//! behind the dashboard sub-views, the renewal write and the bulk expiry update used by
//! the scheduler.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    member::{Member, MemberParams, MembershipStatus, MEMBER_ROLE},
    page::PageRequest,
};

pub struct MemberRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a member. A missing status is stored as `expired` until the first renewal.
    pub async fn create(&self, params: MemberParams) -> Result<Member, DbErr> {
        let status = params
            .membership_status
            .unwrap_or(MembershipStatus::Expired);

        let entity = entity::member::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            mobile: ActiveValue::Set(params.mobile),
            dob: ActiveValue::Set(params.dob),
            address: ActiveValue::Set(params.address),
            role_name: ActiveValue::Set(params.role_name),
            reg_code: ActiveValue::Set(params.reg_code),
            membership_id: ActiveValue::Set(params.membership_id),
            membership_valid_from: ActiveValue::Set(None),
            membership_valid_to: ActiveValue::Set(None),
            membership_status: ActiveValue::Set(status.to_string()),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Member::from_entity(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Member>, DbErr> {
        entity::prelude::Member::find_by_id(id)
            .one(self.db)
            .await?
            .map(Member::from_entity)
            .transpose()
    }

    /// Gets one page of members with role `member`, newest first, optionally filtered by
    /// a search term.
    ///
    /// The term is matched as a substring of first name, last name, email, mobile and
    /// address.
    ///
    /// # Returns
    /// - `Ok((members, total))` - Members on the page and the total matching count
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<(Vec<Member>, u64), DbErr> {
        use entity::member::Column;

        let mut query = entity::prelude::Member::find()
            .filter(Column::RoleName.like(MEMBER_ROLE))
            .order_by_desc(Column::Id);
        if let Some(term) = search {
            query = query.filter(
                Condition::any()
                    .add(Column::FirstName.contains(term))
                    .add(Column::LastName.contains(term))
                    .add(Column::Email.contains(term))
                    .add(Column::Mobile.contains(term))
                    .add(Column::Address.contains(term)),
            );
        }

        let paginator = query.paginate(self.db, page.page_size);
        let total = paginator.num_items().await?;
        if !page.contains(total) {
            return Ok((Vec::new(), total));
        }
        let members = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(Member::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((members, total))
    }

    /// Replaces the editable fields of a member.
    ///
    /// The validity window is owned by the renewal workflow and is left untouched. A
    /// `None` status keeps the stored one.
    ///
    /// # Returns
    /// - `Ok(Some(member))` - Updated member
    /// - `Ok(None)` - No member with that ID
    pub async fn update(&self, id: i32, params: MemberParams) -> Result<Option<Member>, DbErr> {
        let Some(existing) = entity::prelude::Member::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::member::ActiveModel = existing.into();
        active.first_name = ActiveValue::Set(params.first_name);
        active.last_name = ActiveValue::Set(params.last_name);
        active.email = ActiveValue::Set(params.email);
        active.mobile = ActiveValue::Set(params.mobile);
        active.dob = ActiveValue::Set(params.dob);
        active.address = ActiveValue::Set(params.address);
        active.role_name = ActiveValue::Set(params.role_name);
        active.reg_code = ActiveValue::Set(params.reg_code);
        active.membership_id = ActiveValue::Set(params.membership_id);
        if let Some(status) = params.membership_status {
            active.membership_status = ActiveValue::Set(status.to_string());
        }

        let entity = active.update(self.db).await?;

        Member::from_entity(entity).map(Some)
    }

    /// Deletes a member, returning whether a row was removed.
    ///
    /// Payments and attendance records of the member are removed by cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Member::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether another member already uses a mobile number.
    pub async fn mobile_taken(&self, mobile: &str, except_id: Option<i32>) -> Result<bool, DbErr> {
        use entity::member::Column;

        let mut query = entity::prelude::Member::find().filter(Column::Mobile.eq(mobile));
        if let Some(id) = except_id {
            query = query.filter(Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Counts gym members (role `member`, any case), optionally in one status.
    pub async fn count_members(&self, status: Option<MembershipStatus>) -> Result<u64, DbErr> {
        use entity::member::Column;

        // SQLite LIKE without wildcards is a case-insensitive equality.
        let mut query = entity::prelude::Member::find().filter(Column::RoleName.like(MEMBER_ROLE));
        if let Some(status) = status {
            query = query.filter(Column::MembershipStatus.eq(status.as_str()));
        }

        query.count(self.db).await
    }

    /// Counts gym members enrolled on a plan.
    pub async fn count_on_plan(&self, membership_id: i32) -> Result<u64, DbErr> {
        use entity::member::Column;

        entity::prelude::Member::find()
            .filter(Column::RoleName.like(MEMBER_ROLE))
            .filter(Column::MembershipId.eq(membership_id))
            .count(self.db)
            .await
    }

    /// Starts a new membership window for a member.
    ///
    /// Sets the plan, the window `[valid_from, valid_to]` and status `continue`.
    ///
    /// # Returns
    /// - `Ok(Some(member))` - Updated member
    /// - `Ok(None)` - No member with that ID
    pub async fn start_membership(
        &self,
        id: i32,
        membership_id: i32,
        valid_from: NaiveDate,
        valid_to: NaiveDate,
    ) -> Result<Option<Member>, DbErr> {
        let Some(existing) = entity::prelude::Member::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::member::ActiveModel = existing.into();
        active.membership_id = ActiveValue::Set(Some(membership_id));
        active.membership_valid_from = ActiveValue::Set(Some(valid_from));
        active.membership_valid_to = ActiveValue::Set(Some(valid_to));
        active.membership_status = ActiveValue::Set(MembershipStatus::Continue.to_string());

        let entity = active.update(self.db).await?;

        Member::from_entity(entity).map(Some)
    }

    /// Moves every `continue` member whose window ended before `today` to `expired`.
    ///
    /// Members in any other status are untouched.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of members expired
    pub async fn expire_lapsed(&self, today: NaiveDate) -> Result<u64, DbErr> {
        use entity::member::Column;

        let result = entity::prelude::Member::update_many()
            .col_expr(
                Column::MembershipStatus,
                Expr::value(MembershipStatus::Expired.as_str()),
            )
            .filter(Column::MembershipStatus.eq(MembershipStatus::Continue.as_str()))
            .filter(Column::MembershipValidTo.lt(today))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

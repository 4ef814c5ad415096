//! Attendance repository. Records are append-only.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    attendance::{AttendanceFilter, AttendanceRecord, CreateAttendanceParams},
    page::PageRequest,
};

pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateAttendanceParams) -> Result<AttendanceRecord, DbErr> {
        let entity = entity::attendance::ActiveModel {
            member_id: ActiveValue::Set(params.member_id),
            direction: ActiveValue::Set(params.direction.to_string()),
            recorded_at: ActiveValue::Set(params.recorded_at),
            class_id: ActiveValue::Set(params.class_id),
            role_name: ActiveValue::Set(params.role_name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        AttendanceRecord::from_entity(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<AttendanceRecord>, DbErr> {
        entity::prelude::Attendance::find_by_id(id)
            .one(self.db)
            .await?
            .map(AttendanceRecord::from_entity)
            .transpose()
    }

    /// Gets one page of punches, most recent first.
    ///
    /// `filter.search` is matched as a substring of direction and role name.
    ///
    /// # Returns
    /// - `Ok((records, total))` - Records on the page and the total matching count
    pub async fn get_paginated(
        &self,
        filter: &AttendanceFilter,
        page: PageRequest,
    ) -> Result<(Vec<AttendanceRecord>, u64), DbErr> {
        use entity::attendance::Column;

        let mut query = entity::prelude::Attendance::find()
            .order_by_desc(Column::RecordedAt)
            .order_by_desc(Column::Id);
        if let Some(member_id) = filter.member_id {
            query = query.filter(Column::MemberId.eq(member_id));
        }
        if let Some(term) = filter.search.as_deref() {
            query = query.filter(
                Condition::any()
                    .add(Column::Direction.contains(term))
                    .add(Column::RoleName.contains(term)),
            );
        }

        let paginator = query.paginate(self.db, page.page_size);
        let total = paginator.num_items().await?;
        if !page.contains(total) {
            return Ok((Vec::new(), total));
        }
        let records = paginator
            .fetch_page(page.index())
            .await?
            .into_iter()
            .map(AttendanceRecord::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((records, total))
    }
}

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{attendance::AttendanceRepository, member::MemberRepository},
    error::AppError,
    model::{
        attendance::{AttendanceFilter, AttendanceRecord, CreateAttendanceParams},
        page::{Page, PageRequest},
    },
};

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a punch for an existing member
    pub async fn record(&self, params: CreateAttendanceParams) -> Result<AttendanceRecord, AppError> {
        if MemberRepository::new(self.db)
            .get_by_id(params.member_id)
            .await?
            .is_none()
        {
            return Err(AppError::field(
                "member_id",
                format!("Member {} does not exist.", params.member_id),
            ));
        }

        Ok(AttendanceRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<AttendanceRecord, AppError> {
        AttendanceRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Attendance record {} not found", id)))
    }

    pub async fn get_paginated(
        &self,
        filter: &AttendanceFilter,
        page: PageRequest,
    ) -> Result<Page<AttendanceRecord>, AppError> {
        let (records, total) = AttendanceRepository::new(self.db)
            .get_paginated(filter, page)
            .await?;

        Page::new(records, total, page)
    }
}

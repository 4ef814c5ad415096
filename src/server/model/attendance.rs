//! Attendance (check-in/check-out) domain models.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::attendance::{AttendanceDto, CreateAttendanceDto},
    server::error::AppError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            other => Err(format!("Unknown attendance direction '{}'", other)),
        }
    }
}

/// One punch on the attendance device. Records are never edited.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub id: i32,
    pub member_id: i32,
    pub direction: Direction,
    pub recorded_at: DateTime<Utc>,
    pub class_id: Option<i32>,
    pub role_name: Option<String>,
}

impl AttendanceRecord {
    pub fn from_entity(entity: entity::attendance::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            member_id: entity.member_id,
            direction: entity.direction.parse().map_err(DbErr::Custom)?,
            recorded_at: entity.recorded_at,
            class_id: entity.class_id,
            role_name: entity.role_name,
        })
    }

    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            id: self.id,
            member_id: self.member_id,
            direction: self.direction.to_string(),
            recorded_at: self.recorded_at,
            class_id: self.class_id,
            role_name: self.role_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAttendanceParams {
    pub member_id: i32,
    pub direction: Direction,
    pub recorded_at: DateTime<Utc>,
    pub class_id: Option<i32>,
    pub role_name: Option<String>,
}

impl CreateAttendanceParams {
    /// Converts a request body into params, stamping `now` when no time was sent.
    pub fn from_dto(dto: CreateAttendanceDto, now: DateTime<Utc>) -> Result<Self, AppError> {
        let direction = dto
            .direction
            .parse::<Direction>()
            .map_err(|_| AppError::field("direction", "Must be one of: in, out."))?;

        Ok(Self {
            member_id: dto.member_id,
            direction,
            recorded_at: dto.recorded_at.unwrap_or(now),
            class_id: dto.class_id,
            role_name: dto.role_name,
        })
    }
}

/// Filter applied to attendance listings.
#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    pub member_id: Option<i32>,
    pub search: Option<String>,
}

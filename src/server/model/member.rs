//! Member domain models and parameters.
//!
//! Provides the member registry's domain model, the membership status lifecycle and the
//! sub-views (`?query=...`) supported by the member list endpoint.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::member::{MemberDto, MemberInputDto, MembershipCountDto},
    server::error::AppError,
};

/// Role name that identifies gym members, compared case-insensitively.
pub const MEMBER_ROLE: &str = "member";

/// Stored membership status.
///
/// `Continue` while a paid window is running, `Expired` once it lapses and `Left`
/// when the member has quit. Only renewal moves a member to `Continue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipStatus {
    Continue,
    Expired,
    Left,
}

impl MembershipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::Expired => "expired",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MembershipStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "continue" => Ok(Self::Continue),
            "expired" => Ok(Self::Expired),
            "left" => Ok(Self::Left),
            other => Err(format!("Unknown membership status '{}'", other)),
        }
    }
}

/// Gym member with contact details and the current membership window.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub mobile: String,
    pub dob: NaiveDate,
    pub address: Option<String>,
    /// `member` for gym members; other values mark staff or trainers.
    pub role_name: String,
    pub reg_code: Option<String>,
    /// Plan of the latest renewal.
    pub membership_id: Option<i32>,
    pub membership_valid_from: Option<NaiveDate>,
    pub membership_valid_to: Option<NaiveDate>,
    pub membership_status: MembershipStatus,
    pub joined_at: DateTime<Utc>,
}

impl Member {
    /// Converts an entity model to a member domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Member)` - The converted member
    /// - `Err(DbErr::Custom)` - Stored membership status is not recognised
    pub fn from_entity(entity: entity::member::Model) -> Result<Self, DbErr> {
        let membership_status = entity
            .membership_status
            .parse::<MembershipStatus>()
            .map_err(DbErr::Custom)?;

        Ok(Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            mobile: entity.mobile,
            dob: entity.dob,
            address: entity.address,
            role_name: entity.role_name,
            reg_code: entity.reg_code,
            membership_id: entity.membership_id,
            membership_valid_from: entity.membership_valid_from,
            membership_valid_to: entity.membership_valid_to,
            membership_status,
            joined_at: entity.joined_at,
        })
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            mobile: self.mobile,
            dob: self.dob,
            address: self.address,
            role_name: self.role_name,
            reg_code: self.reg_code,
            membership_id: self.membership_id,
            membership_valid_from: self.membership_valid_from,
            membership_valid_to: self.membership_valid_to,
            membership_status: self.membership_status.to_string(),
            joined_at: self.joined_at,
        }
    }
}

/// Parameters for creating or fully updating a member.
///
/// `membership_status` of `None` means `expired` on create and "keep the stored
/// value" on update.
#[derive(Debug, Clone)]
pub struct MemberParams {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub mobile: String,
    pub dob: NaiveDate,
    pub address: Option<String>,
    pub role_name: String,
    pub reg_code: Option<String>,
    pub membership_id: Option<i32>,
    pub membership_status: Option<MembershipStatus>,
}

impl MemberParams {
    /// Converts a validated request body into params.
    ///
    /// # Returns
    /// - `Ok(MemberParams)` - Converted params with `role_name` defaulted to `member`
    /// - `Err(AppError::Validation)` - `membership_status` is not a known status
    pub fn from_dto(dto: MemberInputDto) -> Result<Self, AppError> {
        let membership_status = dto
            .membership_status
            .as_deref()
            .map(|status| {
                status.parse::<MembershipStatus>().map_err(|_| {
                    AppError::field(
                        "membership_status",
                        "Must be one of: continue, expired, left.",
                    )
                })
            })
            .transpose()?;

        Ok(Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            mobile: dto.mobile,
            dob: dto.dob,
            address: dto.address,
            role_name: dto.role_name.unwrap_or_else(|| MEMBER_ROLE.to_string()),
            reg_code: dto.reg_code,
            membership_id: dto.membership_id,
            membership_status,
        })
    }
}

/// Number of members enrolled on one plan.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipCount {
    pub membership_id: i32,
    pub label: String,
    pub members: u64,
}

impl MembershipCount {
    pub fn into_dto(self) -> MembershipCountDto {
        MembershipCountDto {
            membership_id: self.membership_id,
            label: self.label,
            members: self.members,
        }
    }
}

/// Sub-views of the member list endpoint selected by `?query=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberQuery {
    TotalMembers,
    ActiveMembers,
    LeftMembers,
    MembershipCounts,
}

impl FromStr for MemberQuery {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "total-members" => Ok(Self::TotalMembers),
            "active-members" => Ok(Self::ActiveMembers),
            "left-members" => Ok(Self::LeftMembers),
            "membership-counts" => Ok(Self::MembershipCounts),
            other => Err(AppError::BadRequest(format!(
                "Unrecognised query '{}'.",
                other
            ))),
        }
    }
}

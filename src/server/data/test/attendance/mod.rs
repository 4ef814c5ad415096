use crate::server::{
    data::attendance::AttendanceRepository,
    model::{
        attendance::{AttendanceFilter, CreateAttendanceParams, Direction},
        page::PageRequest,
    },
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;

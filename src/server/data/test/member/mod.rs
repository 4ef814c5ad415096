use crate::server::{
    data::member::MemberRepository,
    model::{
        member::{MemberParams, MembershipStatus},
        page::PageRequest,
    },
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_members;
mod create;
mod expire_lapsed;
mod get_paginated;
mod start_membership;
mod update;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn member_params(first_name: &str, mobile: &str) -> MemberParams {
    MemberParams {
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        email: Some(format!("{}@example.com", first_name.to_lowercase())),
        mobile: mobile.to_string(),
        dob: date(1992, 6, 15),
        address: Some("12 Lake Road".to_string()),
        role_name: "member".to_string(),
        reg_code: None,
        membership_id: None,
        membership_status: None,
    }
}

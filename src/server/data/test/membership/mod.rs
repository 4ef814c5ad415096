use crate::server::{
    data::membership::MembershipPlanRepository,
    model::{membership::MembershipPlanParams, page::PageRequest},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_label;
mod get_paginated;
mod update;

fn plan_params(label: &str, duration_days: i32) -> MembershipPlanParams {
    MembershipPlanParams {
        label: label.to_string(),
        class: "regular".to_string(),
        description: Some("Gym floor access".to_string()),
        price: 1500.0,
        signup_fee: Some(500.0),
        duration_days,
    }
}

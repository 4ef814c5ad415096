use crate::server::{
    data::payment::PaymentRepository,
    model::{page::PageRequest, payment::CreatePaymentParams},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod deactivate_for_member;
mod get_paginated;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

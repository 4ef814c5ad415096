use crate::server::{
    data::ledger::LedgerRepository,
    model::{
        ledger::{EntryType, LedgerEntryParams, LedgerFilter, MonthlyReportRow, PaymentStatus},
        page::PageRequest,
    },
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_monthly_totals;
mod get_paginated;
mod soft_delete;
mod sum_amount;
mod update;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

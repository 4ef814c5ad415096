mod attendance;
mod ledger;
mod member;
mod membership;
mod payment;
mod user;

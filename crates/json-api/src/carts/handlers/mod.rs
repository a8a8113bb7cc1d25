//! Cart Handlers

pub(crate) mod add;
pub(crate) mod get;
pub(crate) mod order_now;
pub(crate) mod remove;

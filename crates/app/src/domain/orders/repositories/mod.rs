//! Order Repositories

mod items;
mod orders;

pub(crate) use items::{NewOrderLineItem, SqliteOrderItemsRepository};
pub(crate) use orders::{NewOrder, SqliteOrdersRepository};

pub mod catalog;
pub mod countries;
pub mod dispatch;
pub mod schema;
pub mod series;
pub mod shared;
pub mod snapshot;

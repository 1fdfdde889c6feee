//! Data access layer repositories.
//!
//! Repositories borrow any [`sea_orm::ConnectionTrait`] implementor, so they work
//! against a plain connection or inside a transaction, and return sea-orm's
//! `DbErr` untouched. Constraint failures are classified by the service layer.

pub mod catalog;
pub mod favorite;
/// `user` table repository
pub mod user;

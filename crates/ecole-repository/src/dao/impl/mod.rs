//! DAO implementations.
//!
//! Trait definitions live in the parent `dao/` module. Each DAO is written
//! once as a macro and instantiated per backend. Both backends run the
//! statements from `dao/sql.rs` and decode into the records of `dao/rows.rs`;
//! they differ only in the pool type and in how the generated key is reported.

#[macro_use]
mod person_dao_impl;
#[macro_use]
mod teacher_dao_impl;
#[macro_use]
mod course_dao_impl;

pub mod mysql;
pub mod sqlite;

//! Database record models matching table schemas.
//!
//! Struct definitions that correspond directly to database table rows.
//! Database models are distinct from API models so storage and API
//! representations can evolve independently; repositories accept
//! `*CreateDBRequest` structs and return `*DBResponse` structs, which the API
//! layer converts with `From` impls.

pub mod conversations;
pub mod messages;
pub mod recommendations;
pub mod study_sessions;
pub mod users;

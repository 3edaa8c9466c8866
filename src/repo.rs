//! Typed fetch, create and remove operations running on the request's unit
//! of work. Storage-level uniqueness violations are collapsed into conflict
//! errors here, so handlers never see engine-specific failures.

pub mod adverts;
pub mod users;

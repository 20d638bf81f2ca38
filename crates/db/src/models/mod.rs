//! Row structs mapped from the `movies` schema.

pub mod movie;

//! Building blocks shared by every bounded context

pub mod error;

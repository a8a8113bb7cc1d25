//! Authentication and authorization gates

pub(crate) mod middleware;

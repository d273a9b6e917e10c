//! Command implementations for wordweb

pub mod diameter;
pub mod dispatch;
pub mod dot;
pub mod sizes;

pub mod member;
pub mod punctuality;
pub mod role;
pub mod shift;

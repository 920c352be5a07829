mod member_locks;
pub mod verification;

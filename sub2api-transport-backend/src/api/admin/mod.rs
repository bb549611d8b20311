pub mod announcement;
pub mod referral;

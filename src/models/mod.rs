pub mod bowel;
pub mod condition;
pub mod fasting;
pub mod inbody;
pub mod meal;
pub mod period;
pub mod review;
pub mod user;
pub mod weight;

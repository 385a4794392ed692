pub mod fasting;

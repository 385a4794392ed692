pub mod auth;
pub mod bowels;
pub mod conditions;
pub mod fastings;
pub mod health;
pub mod inbody;
pub mod meals;
pub mod periods;
pub mod presets;
pub mod reviews;
pub mod summary;
pub mod weights;

pub mod certificates;
pub mod contacts;
pub mod health;
pub mod helpers;

pub mod a001_pizza;
pub mod a002_accompaniment;
pub mod a003_promotion;
pub mod a004_client;
pub mod a005_order;
pub mod a006_ingredient;
pub mod common;

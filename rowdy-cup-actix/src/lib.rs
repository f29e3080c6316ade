pub mod args;
pub mod auth;
pub mod controller;
pub mod db_prefill;
pub mod events;
pub mod storage;

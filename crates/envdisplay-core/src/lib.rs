#![cfg_attr(not(test), no_std)]

pub mod buzzer;
pub mod consts;
pub mod dashboard;
pub mod icons;
pub mod stats;
pub mod time;
pub mod time_sync;

mod gfx;

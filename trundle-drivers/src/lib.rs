//! Hardware driver implementations
//!
//! Concrete implementations of the traits defined in trundle-core over
//! `embedded-hal` 1.0, currently just the brushed DC motor channel used
//! on both sides of the drive base.

#![no_std]
#![deny(unsafe_code)]

pub mod motor;

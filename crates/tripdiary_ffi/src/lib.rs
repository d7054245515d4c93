//! FFI crate exposing TripDiary core use cases to the Flutter shell.

pub mod api;

//! UI-facing FFI crate for ticklist.
//!
//! Exposes the board session to the Flutter shell through
//! `flutter_rust_bridge`; all state lives in `ticklist_core`.

pub mod api;

/// Foreground and whole-tile color averaging
pub mod average;
/// Canvas sizing, resampling and the tile loop
pub mod builder;
/// Diagonal boundary and foreground/background membership
pub mod mask;
/// Corner-contrast orientation selection
pub mod orientation;
/// Single-tile rendering into the canvas
pub mod render;

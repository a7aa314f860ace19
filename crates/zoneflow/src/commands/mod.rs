//! サブコマンドの実装

pub mod down;
pub mod up;

#[cfg(test)]
pub mod mock;

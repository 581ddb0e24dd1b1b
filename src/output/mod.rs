// Output: terminal display and renderer-ready exports.

pub mod export;
pub mod terminal;

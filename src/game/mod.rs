pub mod block;
pub mod clock;
pub mod field;
pub mod gameplay;
pub mod judgment;
pub mod profile;
pub mod scores;
pub mod slice;
pub mod song;
pub mod timeline;

pub mod lyrics;
pub use lyrics::LyricsController;

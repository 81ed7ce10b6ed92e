pub mod lyrics;
pub use lyrics::lyrics_routes;

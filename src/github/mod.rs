mod client;
pub use client::ContentsClient;

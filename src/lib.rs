//! Garment Scan - 衣類写真のクリーニング料金見積り
//!
//! 物体検出モデルの生ラベルを衣類カテゴリに正規化し、
//! 点数・料金・エコスコアをJSONで出力する。

pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod detector;
pub mod error;
pub mod output;
pub mod scanner;

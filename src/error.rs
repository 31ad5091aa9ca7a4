use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("image path is required")]
    MissingImagePath,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していない画像形式です: {0}")]
    UnsupportedFormat(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("モデルファイルが見つかりません: {0}")]
    ModelNotFound(String),

    #[error("モデル読み込みエラー: {0}")]
    ModelLoad(String),

    #[error("推論エラー: {0}")]
    Inference(String),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] garment_scan_common::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;

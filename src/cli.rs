use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "garment-scan")]
#[command(about = "衣類写真から品目を検出し、クリーニング料金とエコスコアを見積もる", long_about = None)]
pub struct Cli {
    /// 入力画像のパス
    #[arg(value_name = "IMAGE")]
    pub image: Option<PathBuf>,

    /// モデルファイル（設定・環境変数より優先）
    #[arg(short, long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// 信頼度の閾値 (0〜1)
    #[arg(long, value_name = "F")]
    pub confidence: Option<f32>,

    /// モデルを使わず、JSONのラベル列から集計する
    #[arg(long, value_name = "FILE")]
    pub labels: Option<PathBuf>,

    /// JSONを整形して出力
    #[arg(long)]
    pub pretty: bool,

    /// 出力先ファイル（省略時は標準出力）
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// 詳細ログを出力（標準エラー）
    #[arg(short, long)]
    pub verbose: bool,

    /// 有効な設定を表示して終了
    #[arg(long)]
    pub show_config: bool,
}

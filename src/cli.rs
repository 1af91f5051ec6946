use clap::{Parser, Subcommand};
use dialoguer::Input;
use guidefy_common::{CareerRequest, UpskillLayout};
use std::path::PathBuf;

use crate::error::Result;

#[derive(Parser)]
#[command(name = "guidefy")]
#[command(about = "キャリア推薦・履歴書解析クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// バックエンドURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// AIシステムのステータスを表示
    Status,

    /// キャリア推薦を取得してHTMLレポートを出力
    Recommend {
        /// 興味のある分野
        #[arg(long)]
        interests: Option<String>,

        /// 得意なこと
        #[arg(long)]
        strengths: Option<String>,

        /// 好きな科目
        #[arg(long)]
        subjects: Option<String>,

        /// キャリア目標
        #[arg(long)]
        goal: Option<String>,

        /// 出力HTMLファイル（デフォルト: 出力先/career-日時.html）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Upskillセクションのレイアウト (grid/hero)
        #[arg(long, default_value = "grid")]
        layout: UpskillLayout,

        /// 未入力の項目を対話入力しない
        #[arg(long)]
        no_prompt: bool,
    },

    /// 履歴書を解析してHTMLレポートを出力
    Resume {
        /// 履歴書ファイル（PDF/DOCX/DOC、10MBまで）
        #[arg(required = true)]
        file: PathBuf,

        /// 出力HTMLファイル（デフォルト: 出力先/resume-日時.html）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// バックエンドURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// コマンドライン引数と対話入力からフォーム内容を組み立てる
pub fn collect_request(
    interests: Option<String>,
    strengths: Option<String>,
    subjects: Option<String>,
    goal: Option<String>,
    prompt: bool,
) -> Result<CareerRequest> {
    Ok(CareerRequest {
        interests: field(interests, "Interests", prompt)?,
        strengths: field(strengths, "Strengths", prompt)?,
        preferred_subjects: field(subjects, "Preferred subjects", prompt)?,
        career_goal: field(goal, "Career goal", prompt)?,
    })
}

fn field(value: Option<String>, label: &str, prompt: bool) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None if prompt => Ok(Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?),
        None => Ok(String::new()),
    }
}

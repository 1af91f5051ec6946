use clap::Parser;
use guidefy::{cli, client, config, error, progress, report};
use cli::{Cli, Commands};
use client::BackendClient;
use config::Config;
use error::{GuidefyError, Result};
use guidefy_common::upload::{mime_from_file_name, SelectedFile};
use guidefy_common::{
    render_resume_results, wrap_document, IndicatorState, SubmitController, UploadController,
};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn output_dir(config: &Config) -> PathBuf {
    config.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Status => {
            let client = BackendClient::new(&config.resolve_base_url(cli.base_url.as_deref()), config.timeout_seconds)?;
            let result = client.fetch_status().await;
            if let Err(e) = &result {
                warn!(error = %e, "ステータス取得に失敗");
            }
            let last_error = result.as_ref().ok().and_then(|s| s.last_error.clone());
            let state = IndicatorState::from_fetch(result);

            println!("{}", state.label());
            println!("  接続先: {}", client.base_url());
            if let Some(last_error) = last_error {
                println!("  直近のエラー: {}", last_error);
            }
        }

        Commands::Recommend { interests, strengths, subjects, goal, output, layout, no_prompt } => {
            println!("🧭 guidefy - キャリア推薦\n");

            let client = BackendClient::new(&config.resolve_base_url(cli.base_url.as_deref()), config.timeout_seconds)?;
            let prompt = !no_prompt && std::io::stdin().is_terminal();
            let request = cli::collect_request(interests, strengths, subjects, goal, prompt)?;

            // 1. ステータス
            println!("[1/3] AIステータスを確認中...");
            println!("✔ {}\n", client.indicator().await.label());

            // 2. 推薦取得
            println!("[2/3] 推薦を生成中...");
            let mut controller = SubmitController::new(layout);
            controller.begin()?;
            println!("{}", IndicatorState::Processing.label());

            let result = progress::with_progress(client.recommend(&request), cli.verbose).await;
            let payload = match result {
                Ok(payload) => payload,
                Err(e) => {
                    let (message, state) = match &e {
                        GuidefyError::Common(inner) => controller.finish_err(inner),
                        _ => controller.finish_transport_failure(),
                    };
                    eprintln!("{}", message);
                    eprintln!("{}", state.label());
                    return Err(e);
                }
            };
            let html = controller.finish_ok(&payload);

            // 応答によってバックエンドの状態が変わるため再取得
            let state = client.indicator().await;
            println!("✔ 推薦を取得 ({})\n", state.label());
            for line in report::recommendation_summary(&payload) {
                println!("  {}", line);
            }

            // 3. 保存
            println!("\n[3/3] レポートを保存中...");
            let path = output.unwrap_or_else(|| report::default_report_path(&output_dir(&config), "career"));
            report::write_report(&path, &wrap_document("Career Recommendation", Some(state), &html))?;
            println!("✔ レポートを保存: {}", path.display());

            println!("\n✅ 完了");
        }

        Commands::Resume { file, output } => {
            println!("📄 guidefy - 履歴書解析\n");

            let client = BackendClient::new(&config.resolve_base_url(cli.base_url.as_deref()), config.timeout_seconds)?;

            // 1. ファイル検証（送信前）
            println!("[1/3] ファイルを確認中...");
            let mut controller = UploadController::new();
            let selected = selected_file(&file)?;
            controller.select(selected)?;
            let selected = controller.begin_analysis()?;
            println!("✔ {} ({})\n", selected.name, selected.display_size());

            // 2. 解析
            println!("[2/3] 解析中...");
            let result = progress::with_progress(client.analyze_resume(&file, &selected), cli.verbose).await;
            let rendered = result.and_then(|payload| {
                let html = render_resume_results(&payload)?;
                Ok((payload, html))
            });
            let (payload, html) = match rendered {
                Ok(rendered) => rendered,
                Err(e) => {
                    let message = controller.finish_failure(e.server_message());
                    eprintln!("❌ {}", message);
                    return Err(e);
                }
            };
            controller.finish_success();
            println!("✔ 解析完了\n");
            for line in report::resume_summary(&payload) {
                println!("  {}", line);
            }

            // 3. 保存
            println!("\n[3/3] レポートを保存中...");
            let path = output.unwrap_or_else(|| report::default_report_path(&output_dir(&config), "resume"));
            report::write_report(&path, &wrap_document("Resume Analysis", None, &html))?;
            println!("✔ レポートを保存: {}", path.display());

            println!("\n✅ 完了");
        }

        Commands::Config { set_base_url, set_timeout, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                changed = true;
                println!("✔ バックエンドURLを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                changed = true;
                println!("✔ タイムアウトを設定しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  バックエンドURL: {}", config.resolve_base_url(cli.base_url.as_deref()));
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  出力先: {}",
                    config.output_dir.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| ".".into())
                );
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

/// パスから送信ファイルのメタデータを作る
fn selected_file(path: &Path) -> Result<SelectedFile> {
    let metadata = std::fs::metadata(path)
        .map_err(|_| GuidefyError::FileNotFound(path.display().to_string()))?;
    if !metadata.is_file() {
        return Err(GuidefyError::FileNotFound(path.display().to_string()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let mime = mime_from_file_name(&name).unwrap_or("application/octet-stream");
    Ok(SelectedFile::new(name, metadata.len(), mime))
}

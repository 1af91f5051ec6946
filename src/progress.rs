//! 疑似プログレス表示
//!
//! リクエスト完了まで SimulatedProgress を一定間隔で進め、
//! 完了時に100%にしてからバーを閉じる。

use guidefy_common::progress::PROGRESS_TICK_MS;
use guidefy_common::SimulatedProgress;
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

fn progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(100);
    let style = ProgressStyle::with_template("{spinner} [{bar:40.cyan/blue}] {pos:>3}% {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    bar.set_style(style);
    bar
}

/// `future` の実行中に疑似プログレスを表示する
pub async fn with_progress<F>(future: F, quiet: bool) -> F::Output
where
    F: Future,
{
    let bar = if quiet { ProgressBar::hidden() } else { progress_bar() };
    let mut progress = SimulatedProgress::new();
    bar.set_message(progress.phrase());

    let mut ticker = tokio::time::interval(Duration::from_millis(u64::from(PROGRESS_TICK_MS)));
    tokio::pin!(future);

    let output = loop {
        tokio::select! {
            output = &mut future => break output,
            _ = ticker.tick() => {
                progress.advance();
                bar.set_position(u64::from(progress.percent()));
                bar.set_message(progress.phrase());
            }
        }
    };

    drop(ticker);
    progress.complete();
    bar.set_position(u64::from(progress.percent()));
    bar.finish_with_message(progress.phrase());
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_progress_returns_output() {
        let value = with_progress(async { 42 }, true).await;
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_with_progress_slow_future() {
        let value = with_progress(
            async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                "done"
            },
            true,
        )
        .await;
        assert_eq!(value, "done");
    }
}

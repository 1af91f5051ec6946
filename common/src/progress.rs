//! スコアカウンターと疑似プログレス
//!
//! どちらもタイマー側（gloo / tokio）から `tick` / `advance` を呼び出す。
//! 状態遷移だけをここで持ち、タイマーの生成・停止は呼び出し側の責務。

/// スコアアニメーションの所要時間
pub const SCORE_ANIMATION_MS: u32 = 2000;

/// 疑似プログレスの更新間隔
pub const PROGRESS_TICK_MS: u32 = 400;

/// 実リクエスト完了前に到達できる上限
pub const PROGRESS_CAP: u8 = 95;

/// 進捗率としきい値ごとの表示文言（昇順）
pub const PROGRESS_PHASES: &[(u8, &str)] = &[
    (0, "Analyzing your interests..."),
    (25, "Matching career paths..."),
    (50, "Curating courses..."),
    (75, "Gathering learning resources..."),
    (100, "Done!"),
];

/// 0% から目標値まで1ポイントずつ数えるカウンター
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCounter {
    target: u32,
    current: u32,
    duration_ms: u32,
}

impl ScoreCounter {
    pub fn new(target: u32, duration_ms: u32) -> Self {
        Self {
            target,
            current: 0,
            duration_ms,
        }
    }

    /// 1ポイントあたりの間隔（target=0 のときはタイマー不要なので0）
    pub fn step_interval_ms(&self) -> u32 {
        if self.target == 0 {
            0
        } else {
            (self.duration_ms / self.target).max(1)
        }
    }

    /// 1ポイント進めて現在値を返す
    pub fn tick(&mut self) -> u32 {
        if self.current < self.target {
            self.current += 1;
        }
        self.current
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.target
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn display(&self) -> String {
        format!("{}%", self.current)
    }
}

/// 実際の完了時刻に依存しない疑似プログレス
///
/// 単調増加し、`complete` されるまでは [`PROGRESS_CAP`] で止まる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulatedProgress {
    percent: u8,
}

impl SimulatedProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// 残り幅の1/8ずつ（最低1）進める
    pub fn advance(&mut self) -> u8 {
        if self.percent < PROGRESS_CAP {
            let step = ((PROGRESS_CAP - self.percent) / 8).max(1);
            self.percent = (self.percent + step).min(PROGRESS_CAP);
        }
        self.percent
    }

    /// 強制的に100%にする
    pub fn complete(&mut self) {
        self.percent = 100;
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100
    }

    /// 現在の進捗に対応する文言
    pub fn phrase(&self) -> &'static str {
        PROGRESS_PHASES
            .iter()
            .rev()
            .find(|(threshold, _)| self.percent >= *threshold)
            .map(|(_, phrase)| *phrase)
            .unwrap_or(PROGRESS_PHASES[0].1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_counter_counts_to_target() {
        let mut counter = ScoreCounter::new(74, SCORE_ANIMATION_MS);
        assert_eq!(counter.display(), "0%");
        assert_eq!(counter.step_interval_ms(), 27);

        let mut ticks = 0;
        while !counter.is_done() {
            let before = counter.current();
            let after = counter.tick();
            assert_eq!(after, before + 1);
            ticks += 1;
        }
        assert_eq!(ticks, 74);
        assert_eq!(counter.display(), "74%");

        // 完了後は動かない
        assert_eq!(counter.tick(), 74);
    }

    #[test]
    fn test_score_counter_zero() {
        let mut counter = ScoreCounter::new(0, SCORE_ANIMATION_MS);
        assert!(counter.is_done());
        assert_eq!(counter.step_interval_ms(), 0);
        assert_eq!(counter.tick(), 0);
        assert_eq!(counter.display(), "0%");
    }

    #[test]
    fn test_score_counter_short_duration() {
        let counter = ScoreCounter::new(100, 10);
        assert_eq!(counter.step_interval_ms(), 1);
    }

    #[test]
    fn test_progress_monotonic_and_capped() {
        let mut progress = SimulatedProgress::new();
        let mut last = progress.percent();
        for _ in 0..200 {
            let now = progress.advance();
            assert!(now >= last);
            assert!(now <= PROGRESS_CAP);
            last = now;
        }
        assert_eq!(progress.percent(), PROGRESS_CAP);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_progress_complete() {
        let mut progress = SimulatedProgress::new();
        progress.advance();
        progress.complete();
        assert_eq!(progress.percent(), 100);
        assert!(progress.is_complete());
        assert_eq!(progress.phrase(), "Done!");

        // 完了後のadvanceで戻らない
        assert_eq!(progress.advance(), 100);
    }

    #[test]
    fn test_progress_phrases() {
        let mut progress = SimulatedProgress::new();
        assert_eq!(progress.phrase(), "Analyzing your interests...");

        let mut seen = vec![progress.phrase()];
        for _ in 0..50 {
            progress.advance();
            if seen.last() != Some(&progress.phrase()) {
                seen.push(progress.phrase());
            }
        }
        assert_eq!(
            seen,
            vec![
                "Analyzing your interests...",
                "Matching career paths...",
                "Curating courses...",
                "Gathering learning resources...",
            ]
        );
    }
}

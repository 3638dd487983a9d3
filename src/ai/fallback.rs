use crate::types::AiPick;

pub const NOT_CONFIGURED: &str = "APIキーが設定されていません。";
pub const SUMMARY_APOLOGY: &str = "申し訳ありません。ゲーム情報の取得中にエラーが発生しました。";
pub const CHAT_CONNECTION_PROBLEM: &str = "接続に問題が発生しました。もう一度お試しください。";

pub const PICK_COUNT: usize = 3;

const FALLBACK_PICKS: [(&str, &str); PICK_COUNT] = [
    (
        "エルデンリング",
        "オープンワールドの金字塔として今なお圧倒的な人気を誇ります。",
    ),
    (
        "バルダーズ・ゲート3",
        "究極のロールプレイング体験を提供し、世界中で絶賛されています。",
    ),
    (
        "VALORANT",
        "競技シーンが最高潮に達しており、eスポーツ界を牽引しています。",
    ),
];

/// Default picks shown whenever live generation is unavailable.
pub fn fallback_picks() -> Vec<AiPick> {
    FALLBACK_PICKS
        .iter()
        .map(|(title, reason)| AiPick {
            title: title.to_string(),
            reason: reason.to_string(),
        })
        .collect()
}

use crate::types::{Article, Category};

struct SeedArticle {
    id: &'static str,
    title: &'static str,
    excerpt: &'static str,
    content: Option<&'static str>,
    category: Category,
    author: &'static str,
    date: &'static str,
    read_time: &'static str,
    rating: Option<f64>,
}

const SEED: &[SeedArticle] = &[
    SeedArticle {
        id: "1",
        title: "次世代機のロードマップ：2025年に向けて何が変わるのか",
        excerpt: "主要プラットフォーム各社の発表を整理し、ハードウェアとサービスの今後を展望します。",
        content: Some(
            "各社の決算説明会と開発者向けイベントを振り返ると、共通するキーワードは**クラウド**と**互換性**です。\n\n\
             本記事では、発表済みのスペックと開発者の証言をもとに、次世代機が遊びの形をどう変えるのかを読み解きます。",
        ),
        category: Category::News,
        author: "佐藤 ハルカ",
        date: "2024年5月12日",
        read_time: "6分で読める",
        rating: None,
    },
    SeedArticle {
        id: "2",
        title: "『エルデンリング』DLC レビュー：狭間の地はさらに深く",
        excerpt: "新たなエリアと強敵が待ち受ける大型拡張。その難易度と探索の魅力を徹底検証。",
        content: Some(
            "広大なマップに散りばめられた遺跡と地下墓地は、本編以上に探索欲を刺激します。\n\n\
             一方でボス戦の難易度は大きく引き上げられており、ビルドの見直しが必須です。",
        ),
        category: Category::Review,
        author: "高橋 レン",
        date: "2024年6月28日",
        read_time: "9分で読める",
        rating: Some(9.5),
    },
    SeedArticle {
        id: "3",
        title: "初心者のための『VALORANT』エージェント選びガイド",
        excerpt: "ロールごとの役割と、最初に触るべきエージェントをわかりやすく解説します。",
        content: None,
        category: Category::Guide,
        author: "中村 ユウキ",
        date: "2024年4月3日",
        read_time: "7分で読める",
        rating: None,
    },
    SeedArticle {
        id: "4",
        title: "国内eスポーツリーグ、賞金総額が過去最高に",
        excerpt: "スポンサー参入が相次ぎ、プロシーンの裾野が急速に広がっています。",
        content: Some(
            "今シーズンは新たに3チームが参戦し、観客動員数も前年比で大幅に伸びました。",
        ),
        category: Category::ESports,
        author: "山本 ケイ",
        date: "2024年7月15日",
        read_time: "4分で読める",
        rating: None,
    },
    SeedArticle {
        id: "5",
        title: "『バルダーズ・ゲート3』レビュー：選択が物語になる",
        excerpt: "プレイヤーの決断が世界を形作る、現代RPGの到達点を振り返ります。",
        content: None,
        category: Category::Review,
        author: "高橋 レン",
        date: "2024年2月20日",
        read_time: "10分で読める",
        rating: Some(9.8),
    },
    SeedArticle {
        id: "6",
        title: "インディーゲーム注目作まとめ：夏のセールで買うべき10本",
        excerpt: "小規模チームならではの尖ったアイデアが光る作品を厳選しました。",
        content: None,
        category: Category::Guide,
        author: "佐藤 ハルカ",
        date: "2024年7月1日",
        read_time: "8分で読める",
        rating: None,
    },
];

/// Fixtures every session starts from.
pub fn seed_articles() -> Vec<Article> {
    SEED.iter()
        .map(|seed| Article {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            excerpt: seed.excerpt.to_string(),
            content: seed.content.map(str::to_string),
            category: seed.category,
            image_url: None,
            author: seed.author.to_string(),
            date: seed.date.to_string(),
            read_time: seed.read_time.to_string(),
            rating: seed.rating,
        })
        .collect()
}

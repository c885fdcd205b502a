use serde_json::{json, Value};

pub(super) fn academy() -> Value {
    json!([
        {
            "_id": "fallback-academy-what-is-bitcoin",
            "_type": "article",
            "title": "What Is Bitcoin?",
            "slug": { "current": "what-is-bitcoin" },
            "category": "academy",
            "excerpt": "A plain introduction to the first decentralized digital currency and how its network reaches agreement.",
            "publishedAt": "2024-01-08T09:00:00Z",
            "imageUrl": "/images/fallback/academy-bitcoin.jpg"
        },
        {
            "_id": "fallback-academy-how-blockchains-work",
            "_type": "article",
            "title": "How Blockchains Work",
            "slug": { "current": "how-blockchains-work" },
            "category": "academy",
            "excerpt": "Blocks, hashes and consensus: the building blocks behind every public ledger.",
            "publishedAt": "2024-01-15T09:00:00Z",
            "imageUrl": "/images/fallback/academy-blockchain.jpg"
        },
        {
            "_id": "fallback-academy-wallet-security",
            "_type": "article",
            "title": "Keeping Your Wallet Safe",
            "slug": { "current": "wallet-security-basics" },
            "category": "academy",
            "excerpt": "Seed phrases, hardware wallets and the habits that keep funds out of reach of attackers.",
            "publishedAt": "2024-01-22T09:00:00Z",
            "imageUrl": "/images/fallback/academy-wallet.jpg"
        },
        {
            "_id": "fallback-academy-what-is-defi",
            "_type": "article",
            "title": "An Introduction to DeFi",
            "slug": { "current": "introduction-to-defi" },
            "category": "academy",
            "excerpt": "Lending, swaps and liquidity pools explained without the jargon.",
            "publishedAt": "2024-01-29T09:00:00Z",
            "imageUrl": "/images/fallback/academy-defi.jpg"
        }
    ])
}

pub(super) fn news() -> Value {
    json!([
        {
            "_id": "fallback-news-market-roundup",
            "_type": "article",
            "title": "Weekly Market Roundup",
            "slug": { "current": "weekly-market-roundup" },
            "category": "news",
            "excerpt": "Live news is temporarily unavailable. Check back shortly for the latest market headlines.",
            "publishedAt": "2024-02-05T08:00:00Z",
            "imageUrl": "/images/fallback/news-roundup.jpg"
        },
        {
            "_id": "fallback-news-regulation-update",
            "_type": "article",
            "title": "Regulation Update",
            "slug": { "current": "regulation-update" },
            "category": "news",
            "excerpt": "An overview of the regulatory topics our newsroom follows most closely.",
            "publishedAt": "2024-02-12T08:00:00Z",
            "imageUrl": "/images/fallback/news-regulation.jpg"
        },
        {
            "_id": "fallback-news-network-upgrades",
            "_type": "article",
            "title": "Upcoming Network Upgrades",
            "slug": { "current": "upcoming-network-upgrades" },
            "category": "news",
            "excerpt": "Scheduled protocol upgrades across major networks and what they change.",
            "publishedAt": "2024-02-19T08:00:00Z",
            "imageUrl": "/images/fallback/news-upgrades.jpg"
        }
    ])
}

pub(super) fn analysis() -> Value {
    json!([
        {
            "_id": "fallback-analysis-reading-charts",
            "_type": "article",
            "title": "Reading Price Charts",
            "slug": { "current": "reading-price-charts" },
            "category": "analysis",
            "excerpt": "Candlesticks, volume and timeframes: how analysts read a price chart.",
            "publishedAt": "2024-03-04T10:00:00Z",
            "imageUrl": "/images/fallback/analysis-charts.jpg"
        },
        {
            "_id": "fallback-analysis-on-chain-metrics",
            "_type": "article",
            "title": "On-Chain Metrics Explained",
            "slug": { "current": "on-chain-metrics-explained" },
            "category": "analysis",
            "excerpt": "Active addresses, exchange flows and other signals read straight from the ledger.",
            "publishedAt": "2024-03-11T10:00:00Z",
            "imageUrl": "/images/fallback/analysis-on-chain.jpg"
        },
        {
            "_id": "fallback-analysis-market-cycles",
            "_type": "article",
            "title": "Understanding Market Cycles",
            "slug": { "current": "understanding-market-cycles" },
            "category": "analysis",
            "excerpt": "Why crypto markets move in cycles and how past cycles compare.",
            "publishedAt": "2024-03-18T10:00:00Z",
            "imageUrl": "/images/fallback/analysis-cycles.jpg"
        }
    ])
}

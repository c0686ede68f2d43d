//! Shared fixtures for tokenfilter tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokenfilter_common::AssetRecord;

/// Ten records shaped like a CryptoCompare top-10 response, in market-cap
/// order. Totals at default thresholds are noted per line; sorted by total
/// they read DOGE, USDT, USDC, ADA, SOL, BTC, ETH, BNB, XRP, TON.
pub fn sample_records() -> Vec<AssetRecord> {
    vec![
        AssetRecord::new("BTC", 1_300_000_000_000.0, 30_000_000_000.0, 450_000.0), // 0
        AssetRecord::new("ETH", 400_000_000_000.0, 15_000_000_000.0, 4_500_000.0), // 0
        AssetRecord::new("USDT", 110_000_000_000.0, 60_000_000_000.0, 60_000_000_000.0), // 2
        AssetRecord::new("BNB", 90_000_000_000.0, 1_500_000_000.0, 2_500_000.0), // 0
        AssetRecord::new("SOL", 70_000_000_000.0, 38_000_000_000.0, 26_000_000.0), // 1
        AssetRecord::new("USDC", 33_000_000_000.0, 17_000_000_000.0, 17_000_000_000.0), // 2
        AssetRecord::new("XRP", 30_000_000_000.0, 1_200_000_000.0, 2_000_000_000.0), // 0
        AssetRecord::new("DOGE", 20_000_000_000.0, 11_000_000_000.0, 45_000_000_000.0), // 4
        AssetRecord::new("TON", 18_000_000_000.0, 400_000_000.0, 60_000_000.0), // 0
        AssetRecord::new("ADA", 15_000_000_000.0, 500_000_000.0, 16_000_000_000.0), // 2
    ]
}

/// A successful `data/top/mktcapfull` payload for two coins, trimmed to the
/// fields the client reads.
pub fn cryptocompare_success_json() -> serde_json::Value {
    serde_json::json!({
        "Message": "Success",
        "Type": 100,
        "MetaData": { "Count": 2 },
        "Data": [
            {
                "CoinInfo": { "Id": "1182", "Name": "BTC", "FullName": "Bitcoin" },
                "RAW": { "USD": {
                    "MKTCAP": 1300000000000.0,
                    "TOTALVOLUME24HTO": 30000000000.0,
                    "TOTALVOLUME24H": 450000.0
                } },
                "DISPLAY": { "USD": { "MKTCAP": "$ 1.30 T" } }
            },
            {
                "CoinInfo": { "Id": "7605", "Name": "ETH", "FullName": "Ethereum" },
                "RAW": { "USD": {
                    "MKTCAP": 400000000000.0,
                    "TOTALVOLUME24HTO": 15000000000.0,
                    "TOTALVOLUME24H": 4500000.0
                } }
            }
        ]
    })
}

/// An error payload as CryptoCompare returns it for a bad `tsym`.
pub fn cryptocompare_error_json() -> serde_json::Value {
    serde_json::json!({
        "Response": "Error",
        "Message": "tsym param is invalid. (tsym length is higher than maxlength: 10)",
        "HasWarning": false,
        "Type": 2,
        "RateLimit": {},
        "Data": {}
    })
}

/// `n` records with random non-negative figures, deterministic per `seed`.
pub fn random_records(seed: u64, n: usize) -> Vec<AssetRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let mcap = if rng.gen_bool(0.05) { 0.0 } else { rng.gen_range(0.0..1_000.0) };
            AssetRecord::new(
                format!("COIN{i}"),
                mcap,
                rng.gen_range(0.0..12_000.0),
                rng.gen_range(0.0..2_500.0),
            )
        })
        .collect()
}

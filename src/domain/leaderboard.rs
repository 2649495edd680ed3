/// A ranked team on the home-page leaderboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaderboardEntry {
    pub id: u32,
    pub name: &'static str,
    pub members: u32,
    pub roi: f64,
    pub streak: u32,
}

pub const LEADERBOARD: [LeaderboardEntry; 4] = [
    LeaderboardEntry { id: 1, name: "Alpha Traders", members: 8, roi: 287.5, streak: 12 },
    LeaderboardEntry { id: 2, name: "Crypto Knights", members: 6, roi: 245.2, streak: 8 },
    LeaderboardEntry { id: 3, name: "Future Masters", members: 5, roi: 198.7, streak: 6 },
    LeaderboardEntry { id: 4, name: "DeFi Dragons", members: 7, roi: 176.4, streak: 5 },
];

/// Trophy accent for a zero-based rank
pub fn rank_accent(rank: usize) -> &'static str {
    match rank {
        0 => "accent-yellow",
        1 => "accent-blue",
        _ => "accent-purple",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaderboard_is_sorted_by_roi() {
        assert!(LEADERBOARD.windows(2).all(|w| w[0].roi >= w[1].roi));
        assert_eq!(rank_accent(0), "accent-yellow");
        assert_eq!(rank_accent(3), "accent-purple");
    }
}

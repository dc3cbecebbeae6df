//! Card ranks and their confetti images
//!
//! The rank set is closed. Images are loaded by the host at startup; a rank
//! whose image failed to load simply has no entry.

/// Card rank, decides which image a reveal burst uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Regular,
    Prime,
    Pugman,
}

impl Rank {
    pub const ALL: [Rank; 3] = [Rank::Regular, Rank::Prime, Rank::Pugman];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Regular => "Regular",
            Rank::Prime => "Prime",
            Rank::Pugman => "Pugman",
        }
    }

    /// Parse a rank attribute, ignoring case ("prime", "Prime", ...)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Some(Rank::Regular),
            "prime" => Some(Rank::Prime),
            "pugman" => Some(Rank::Pugman),
            _ => None,
        }
    }

    /// Default image location relative to the page
    pub fn asset_path(&self) -> &'static str {
        match self {
            Rank::Regular => "assets/img/cards/confetti/regular.png",
            Rank::Prime => "assets/img/cards/confetti/prime.png",
            Rank::Pugman => "assets/img/cards/confetti/pugman.png",
        }
    }

    fn index(&self) -> usize {
        match self {
            Rank::Regular => 0,
            Rank::Prime => 1,
            Rank::Pugman => 2,
        }
    }
}

/// Rank → image mapping populated once at startup
#[derive(Debug, Clone)]
pub struct RankAssets<A> {
    entries: [Option<A>; 3],
}

impl<A> Default for RankAssets<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> RankAssets<A> {
    pub fn new() -> Self {
        Self {
            entries: [None, None, None],
        }
    }

    /// Record the load result for a rank (`None` on failure)
    pub fn insert(&mut self, rank: Rank, asset: Option<A>) {
        self.entries[rank.index()] = asset;
    }

    pub fn get(&self, rank: Rank) -> Option<&A> {
        self.entries[rank.index()].as_ref()
    }

    /// Number of ranks with a usable image
    pub fn loaded_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }
}

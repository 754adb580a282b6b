pub mod accounts;
pub mod challenges;
pub mod common;
pub mod duels;
pub mod games;
pub mod maps;
pub mod profile;
pub mod search;
pub mod social;
pub mod subscriptions;

pub use accounts::{SignInRequest, SignedInUser};
pub use challenges::{
    Challenge, ChallengeCreator, ChallengeMap, HighscoreGame, HighscoreItem, HighscorePlayer,
    Highscores,
};
pub use common::{Amount, Label, MedalCounts};
pub use duels::{
    Duel, DuelGuess, DuelMap, DuelOptions, DuelPlayer, DuelResult, DuelRound, DuelTeam, Panorama,
    ReplayEvent, TeamRoundResult, replay_duration_seconds,
};
pub use games::{
    Game, GamePlayer, Guess, GuessDistance, Round, StreakGame, StreakGameSettings, StreakPreset,
    StreakType,
};
pub use maps::{MapCategory, MapCreator, MapSummary};
pub use profile::{Competitive, Division, Profile, Progress, User};
pub use search::UserSearchResult;
pub use social::{ActivityKind, FeedEntry, FeedPage, FeedUser, Friend};
pub use subscriptions::{BillingInterval, Plan, Subscription};

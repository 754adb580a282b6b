//! Descriptors of every supported GeoGuessr endpoint.

use crate::models::{
    Challenge, Duel, FeedPage, Friend, Game, Highscores, MapCategory, MapSummary, Plan, Profile,
    ReplayEvent, SignedInUser, StreakGame, Subscription, UserSearchResult,
};

use super::endpoint::{Endpoint, EndpointInfo, Host};

pub const PROFILE: Endpoint<Profile> =
    Endpoint::get("profile", Host::Web, "/api/v3/profiles").authenticated();

/// Query parameter: `q`.
pub const SEARCH_USERS: Endpoint<Vec<UserSearchResult>> =
    Endpoint::get("search_users", Host::Web, "/api/v3/search/user").authenticated();

/// Query parameter: `q`.
pub const SEARCH_MAPS: Endpoint<Vec<MapSummary>> =
    Endpoint::get("search_maps", Host::Web, "/api/v3/search/map");

pub const BROWSE_MAPS_POPULAR: Endpoint<Vec<MapSummary>> =
    Endpoint::get("browse_maps_popular", Host::Web, "/api/v3/maps/browse/popular");

pub const BROWSE_MAPS_FEATURED: Endpoint<Vec<MapSummary>> =
    Endpoint::get("browse_maps_featured", Host::Web, "/api/v3/maps/browse/featured");

pub const BROWSE_MAPS_NEW: Endpoint<Vec<MapSummary>> =
    Endpoint::get("browse_maps_new", Host::Web, "/api/v3/maps/browse/new");

pub const BROWSE_MAPS_HOT: Endpoint<Vec<MapSummary>> =
    Endpoint::get("browse_maps_hot", Host::Web, "/api/v3/maps/browse/hot");

pub const CHALLENGE: Endpoint<Challenge> =
    Endpoint::get("challenge", Host::Web, "/api/v3/challenges/{token}").authenticated();

pub const CHALLENGE_HIGHSCORES: Endpoint<Highscores> = Endpoint::get(
    "challenge_highscores",
    Host::Web,
    "/api/v3/results/highscores/{token}",
)
.authenticated();

pub const GAME: Endpoint<Game> = Endpoint::get("game", Host::Web, "/api/v3/games/{token}")
    .authenticated()
    .with_query(&[("client", "web")]);

/// Body: [`StreakGameSettings`](crate::models::StreakGameSettings).
pub const CREATE_STREAK_GAME: Endpoint<StreakGame> =
    Endpoint::post("create_streak_game", Host::Web, "/api/v3/games/streak").authenticated();

pub const DUEL: Endpoint<Duel> =
    Endpoint::get("duel", Host::GameServer, "/api/duels/{gameId}").authenticated();

pub const DUEL_REPLAY: Endpoint<Vec<ReplayEvent>> = Endpoint::get(
    "duel_replay",
    Host::GameServer,
    "/api/replays/{playerId}/{duelId}/{roundNumber}",
)
.authenticated();

pub const FRIENDS: Endpoint<Vec<Friend>> =
    Endpoint::get("friends", Host::Web, "/api/v3/social/friends").authenticated();

pub const FRIENDS_FEED: Endpoint<FeedPage> =
    Endpoint::get("friends_feed", Host::Web, "/api/v4/feed/friends")
        .authenticated()
        .paginated("paginationToken");

pub const SUBSCRIPTION: Endpoint<Subscription> =
    Endpoint::get("subscription", Host::Web, "/api/v3/subscriptions").authenticated();

pub const SUBSCRIPTION_PLANS: Endpoint<Vec<Plan>> =
    Endpoint::get("subscription_plans", Host::Web, "/api/v3/subscriptions/plans");

/// Body: [`SignInRequest`](crate::models::SignInRequest).
pub const SIGN_IN: Endpoint<SignedInUser> =
    Endpoint::post("sign_in", Host::Web, "/api/v3/accounts/signin");

pub fn browse_maps(category: MapCategory) -> &'static Endpoint<Vec<MapSummary>> {
    match category {
        MapCategory::Popular => &BROWSE_MAPS_POPULAR,
        MapCategory::Featured => &BROWSE_MAPS_FEATURED,
        MapCategory::New => &BROWSE_MAPS_NEW,
        MapCategory::Hot => &BROWSE_MAPS_HOT,
    }
}

/// Summary of the whole catalog, in listing order.
pub fn all() -> Vec<EndpointInfo> {
    vec![
        PROFILE.info(),
        SEARCH_USERS.info(),
        SEARCH_MAPS.info(),
        BROWSE_MAPS_POPULAR.info(),
        BROWSE_MAPS_FEATURED.info(),
        BROWSE_MAPS_NEW.info(),
        BROWSE_MAPS_HOT.info(),
        CHALLENGE.info(),
        CHALLENGE_HIGHSCORES.info(),
        GAME.info(),
        CREATE_STREAK_GAME.info(),
        DUEL.info(),
        DUEL_REPLAY.info(),
        FRIENDS.info(),
        FRIENDS_FEED.info(),
        SUBSCRIPTION.info(),
        SUBSCRIPTION_PLANS.info(),
        SIGN_IN.info(),
    ]
}

/* Fixed strings used in the bot's replies. */

pub const PROFILE_BASE_URL: &str = "https://twitch.tv/";
pub const SOURCE_NAME: &str = "twitchpayouts.com";
pub const CURRENCY_SYMBOL: &str = "$";

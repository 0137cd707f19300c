use crate::settings_commands::SettingsCommands;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Print the installation id, creating it on first use
    InstallationId,

    /// Query the billing balance
    Balance,

    /// Redeem a coupon code
    Redeem {
        /// Coupon code
        code: String,
    },

    /// Remove a previously redeemed coupon code
    Remove {
        /// Coupon code
        code: String,
    },

    /// Speech settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },

    /// Classify a voice name
    Voice {
        /// Voice name as reported by the speech engine
        name: String,
    },

    /// Split a voice language tag into language and first subtag
    Lang {
        /// Language tag, e.g. en_US
        tag: String,
    },
}

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show effective settings (defaults for anything unset)
    Show,
    /// Update one or more settings
    Set {
        /// Voice name
        #[arg(long)]
        voice: Option<String>,
        /// Speech rate
        #[arg(long)]
        rate: Option<f64>,
        /// Speech pitch
        #[arg(long)]
        pitch: Option<f64>,
        /// Speech volume
        #[arg(long)]
        volume: Option<f64>,
        /// Highlighting mode (0 = off)
        #[arg(long)]
        show_highlighting: Option<u8>,
    },
    /// Reset all settings to defaults
    Clear,
}

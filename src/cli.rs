use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_TIME_ZONE;

#[derive(Parser, Debug)]
#[command(name = "lunch_board")]
#[command(about = "Builds the daily lunch menu page", long_about = None)]
pub struct Cli {
    /// Output directory for index.html and assets/
    #[arg(long, visible_alias = "site_dir", default_value = "site")]
    pub site_dir: PathBuf,

    /// Time zone the 10:00 weekday schedule is checked in
    #[arg(long, default_value = DEFAULT_TIME_ZONE)]
    pub tz: String,

    /// Build even if it's not 10:00 (useful for local testing)
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["lunch_board"]);
        assert_eq!(cli.site_dir, PathBuf::from("site"));
        assert_eq!(cli.tz, "Europe/Ljubljana");
        assert!(!cli.force);
    }

    #[test]
    fn test_underscore_alias() {
        let cli = Cli::parse_from(["lunch_board", "--site_dir", "public", "--force"]);
        assert_eq!(cli.site_dir, PathBuf::from("public"));
        assert!(cli.force);
    }
}

use clap::Parser;

/// A photo travel diary for the terminal
#[derive(Parser, Debug)]
#[clap(name = "wander", about = "A photo travel diary for the terminal")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Saves your display name before starting the session
    #[clap(short = 'n', long)]
    pub name: Option<String>,

    /// Forgets the stored display name and exits
    #[clap(long, conflicts_with = "name")]
    pub forget_name: bool,

    /// Address served to the locator for this session ("name, city, region")
    #[clap(short = 'a', long)]
    pub address: Option<String>,

    /// Print verbose output
    #[clap(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}

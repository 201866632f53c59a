use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wikilint")]
#[command(author, version)]
#[command(about = "A linter for the lead section of wikitext articles")]
#[command(
    long_about = "Wikilint checks that the elements at the top of a wikitext article (short \
    description, hatnotes, maintenance tags, date-format and English-variety templates, \
    infobox, lead image, navigation headers) appear in the order the Manual of Style \
    prescribes. Template redirects and hatnote synonyms are resolved through an optional \
    site snapshot."
)]
#[command(after_help = "\
EXAMPLES:

    # Lint an article
    wikilint lint Amelia_Earhart.wiki

    # Lint from stdin
    cat Amelia_Earhart.wiki | wikilint lint

    # Resolve redirects and hatnotes through a site snapshot
    wikilint lint --site site.toml Amelia_Earhart.wiki

    # Exit with code 1 if any issue is found
    wikilint lint --check Amelia_Earhart.wiki

    # Parse and inspect the node sequence
    wikilint parse Amelia_Earhart.wiki

CONFIGURATION:

Wikilint looks for configuration files in this order:
  1. Explicit --config path
  2. wikilint.toml or .wikilint.toml in the article's directory and its parents
  3. ~/.config/wikilint/config.toml (XDG)
  4. Built-in defaults

Example .wikilint.toml:

    site = \"site.toml\"
    hatnote-category = \"Category:Hatnote templates\"

    [[rules]]
    kind = \"navigation-header\"
    pattern = \"campaignbox\"
")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, wikilint will \
        search for .wikilint.toml or wikilint.toml in the article's directory and its parents, \
        then fall back to ~/.config/wikilint/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the order of the elements before the lead
    #[command(
        long_about = "Check that the templates and images preceding the lead of an article \
        appear in canonical order. Each element that comes after something it should precede \
        is reported once. Elements that are not recognized are ignored."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Lint a file
    wikilint lint Amelia_Earhart.wiki

    # Lint from stdin
    echo '{{Use mdy dates}} {{Short description|Aviator}}' | wikilint lint

    # Fail in CI when issues are found
    wikilint lint --check Amelia_Earhart.wiki

CANONICAL ORDER:

  1. Short description
  2. Title modifiers (DISPLAYTITLE, Italic title, ...)
  3. Hatnotes
  4. Featured article, featured list and good article badges
  5. Deletion and protection tags
  6. Maintenance tags
  7. English-variety and date-format templates
  8. Infobox
  9. Language maintenance templates
  10. Lead image
  11. Navigation headers (sidebars)")]
    Lint {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Site snapshot used to resolve redirects and hatnotes
        #[arg(long, env = "WIKILINT_SITE")]
        #[arg(help = "Path to a site snapshot (TOML)")]
        #[arg(
            long_help = "Path to a TOML site snapshot listing redirects and category members. \
            Overrides the `site` setting of the configuration file. Without a snapshot, only \
            the built-in template names are recognized."
        )]
        site: Option<PathBuf>,

        /// Exit with code 1 if issues are found
        #[arg(long)]
        #[arg(help = "Exit with code 1 if issues are found")]
        check: bool,
    },
    /// Parse and display the node sequence for debugging
    #[command(
        long_about = "Parse an article and display the top-level nodes (text, templates, \
        links, headings, comments) the linter operates on."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Parse a file
    wikilint parse Amelia_Earhart.wiki

    # Parse from stdin
    echo '{{Infobox aviator|name=Amelia Earhart}}' | wikilint parse")]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
}
